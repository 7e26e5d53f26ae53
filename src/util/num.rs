use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Most terms a single range may produce.
pub const MAX_RANGE_LEN: usize = 10_000_000;

/// Reals at or above this magnitude are printed in exponent form.
const EXPONENT_ABOVE: f64 = 1e16;
/// Non-zero reals below this magnitude are printed in exponent form.
const EXPONENT_BELOW: f64 = 1e-4;

/// Safely converts an `f64` to `u64` if the value is finite, non-negative,
/// within range, and not fractional.
///
/// Used for factorial arguments, which must be non-negative integers.
///
/// # Errors
/// - `RuntimeError::InvalidArgument` for negative, fractional or non-finite
///   values.
/// - `RuntimeError::Overflow` for values above `MAX_SAFE_U64_INT`.
///
/// # Example
/// ```
/// use turquoise::{error::RuntimeError, util::num::f64_to_u64_checked};
///
/// assert_eq!(f64_to_u64_checked(7.0).unwrap(), 7);
///
/// let err = f64_to_u64_checked(-5.0).unwrap_err();
/// assert!(matches!(err, RuntimeError::InvalidArgument { .. }));
///
/// let err = f64_to_u64_checked(1.5).unwrap_err();
/// assert!(matches!(err, RuntimeError::InvalidArgument { .. }));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_u64_checked(value: f64) -> EvalResult<u64> {
    if !value.is_finite() {
        return Err(RuntimeError::InvalidArgument { details: format!("{} is not a finite number",
                                                                    format_real(value)) });
    }
    if value < 0.0 {
        return Err(RuntimeError::InvalidArgument { details: format!("{} is negative",
                                                                    format_real(value)) });
    }
    if value.fract() != 0.0 {
        return Err(RuntimeError::InvalidArgument { details: format!("{} is not integral",
                                                                    format_real(value)) });
    }
    if value > MAX_SAFE_U64_INT as f64 {
        return Err(RuntimeError::Overflow);
    }
    Ok(value as u64)
}
/// Truncates an `f64` toward zero and converts it to `i64`.
///
/// This mirrors Python's `int(x)` on floats: the fractional part is dropped,
/// non-finite values are rejected.
///
/// # Errors
/// - `RuntimeError::InvalidArgument` for NaN.
/// - `RuntimeError::Overflow` for infinities and values outside `i64`.
///
/// # Example
/// ```
/// use turquoise::util::num::f64_trunc_to_i64;
///
/// assert_eq!(f64_trunc_to_i64(2.9).unwrap(), 2);
/// assert_eq!(f64_trunc_to_i64(-1.5).unwrap(), -1);
/// assert!(f64_trunc_to_i64(f64::INFINITY).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_trunc_to_i64(value: f64) -> EvalResult<i64> {
    if value.is_nan() {
        return Err(RuntimeError::InvalidArgument { details:
                                                       "cannot convert nan to an integer".to_string() });
    }
    let truncated = value.trunc();
    if !truncated.is_finite() || truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(RuntimeError::Overflow);
    }
    Ok(truncated as i64)
}
/// Computes the element count of a range, `round((stop - start) / step) + 1`,
/// rounding half to even as Python's `round` does.
///
/// Negative counts are clamped to zero (an empty range), matching
/// `range(n)` for `n < 0`.
///
/// # Errors
/// - `RuntimeError::DivisionByZero` if `step` is zero.
/// - `RuntimeError::Overflow` if the count is not finite or exceeds
///   `MAX_RANGE_LEN`.
///
/// # Example
/// ```
/// use turquoise::util::num::range_count;
///
/// assert_eq!(range_count(0.0, 10.0, 2.0).unwrap(), 6);
/// // 5 / 2 = 2.5 rounds to 2, so three terms.
/// assert_eq!(range_count(0.0, 5.0, 2.0).unwrap(), 3);
/// assert_eq!(range_count(5.0, 0.0, 1.0).unwrap(), 0);
/// assert!(range_count(0.0, 1e11, 1.0).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
pub fn range_count(start: f64, stop: f64, step: f64) -> EvalResult<usize> {
    if step == 0.0 {
        return Err(RuntimeError::DivisionByZero);
    }
    let steps = ((stop - start) / step).round_ties_even();
    if !steps.is_finite() || steps > MAX_SAFE_U64_INT as f64 {
        return Err(RuntimeError::Overflow);
    }
    let count = steps + 1.0;
    if count <= 0.0 {
        return Ok(0);
    }
    let count = usize::try_from(count as u64).map_err(|_| RuntimeError::Overflow)?;
    if count > MAX_RANGE_LEN {
        return Err(RuntimeError::Overflow);
    }
    Ok(count)
}
/// Safely converts a `usize` index to `f64`.
///
/// # Errors
/// Returns `RuntimeError::Overflow` if the value exceeds `MAX_SAFE_U64_INT`.
#[allow(clippy::cast_precision_loss)]
pub fn usize_to_f64_checked(value: usize) -> EvalResult<f64> {
    let value = u64::try_from(value).map_err(|_| RuntimeError::Overflow)?;
    if value > MAX_SAFE_U64_INT {
        return Err(RuntimeError::Overflow);
    }
    Ok(value as f64)
}
/// Formats a real the way Python's `str(float)` does.
///
/// Integral values keep a trailing `.0`, very large and very small
/// magnitudes switch to exponent notation with a signed two-digit exponent,
/// everything else uses the shortest round-trip representation.
///
/// # Example
/// ```
/// use turquoise::util::num::format_real;
///
/// assert_eq!(format_real(14.0), "14.0");
/// assert_eq!(format_real(0.5), "0.5");
/// assert_eq!(format_real(1e16), "1e+16");
/// assert_eq!(format_real(1.5e-7), "1.5e-07");
/// assert_eq!(format_real(-0.0), "-0.0");
/// assert_eq!(format_real(f64::INFINITY), "inf");
/// ```
#[must_use]
pub fn format_real(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(EXPONENT_BELOW..EXPONENT_ABOVE).contains(&magnitude) {
        let formatted = format!("{value:e}");
        if let Some((mantissa, exponent)) = formatted.split_once('e')
           && let Ok(exponent) = exponent.parse::<i32>()
        {
            let sign = if exponent < 0 { '-' } else { '+' };
            return format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs());
        }
        return formatted;
    }

    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_length_is_capped() {
        let last = (MAX_RANGE_LEN - 1) as f64;
        assert_eq!(range_count(0.0, last, 1.0).unwrap(), MAX_RANGE_LEN);
        assert_eq!(range_count(0.0, last + 1.0, 1.0), Err(RuntimeError::Overflow));
        assert_eq!(range_count(0.0, 1e11, 1.0), Err(RuntimeError::Overflow));
    }
}
