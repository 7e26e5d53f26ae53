/// Nested arrays.
///
/// Defines the `Array` type: an ordered sequence of scalars or nested arrays
/// that supports elementwise operators against a scalar by broadcasting over
/// every leaf.
pub mod array;

/// The `Value` enum and its conversions and display.
pub mod core;
