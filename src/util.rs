/// Numeric conversion and formatting helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without silent data loss, plus the rendering of reals
/// in the same textual form Python uses, which is shared by value display and
/// the transpiler.
///
/// All conversions return a `Result`, which is `Ok` if the conversion is
/// valid, or a `RuntimeError` if the value is out of range or not integral.
pub mod num;
