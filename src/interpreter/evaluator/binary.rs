/// Operator dispatch and array broadcasting.
pub mod core;

/// Arithmetic on pairs of scalars.
pub mod scalar;

/// Exponentiation and tetration.
pub mod power;

/// Ordering and equality.
pub mod comparison;

/// Logical `&` and `|`.
pub mod logic;
