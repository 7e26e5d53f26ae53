use crate::{
    ast::Operator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::core::unsupported,
            core::{Context, EvalResult},
        },
        value::core::Value,
    },
    util::num::{f64_trunc_to_i64, format_real},
};

impl Context<'_> {
    /// Evaluates an exponentiation operation.
    ///
    /// Integer–integer exponentiation with a non-negative exponent uses
    /// checked arithmetic. Negative integer exponents, and every pair
    /// involving a real, are computed in floating point.
    ///
    /// # Parameters
    /// - `base`: The base value.
    /// - `exponent`: The exponent value.
    ///
    /// # Errors
    /// - `RuntimeError::DivisionByZero` for zero raised to a negative power.
    /// - `RuntimeError::InvalidArgument` for a negative base with a fractional
    ///   exponent.
    /// - `RuntimeError::Overflow` when the result does not fit.
    ///
    /// # Example
    /// ```
    /// use turquoise::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let result = Context::eval_pow(&Value::Integer(2), &Value::Integer(10)).unwrap();
    /// assert_eq!(result, Value::Integer(1024));
    ///
    /// let result = Context::eval_pow(&Value::Real(9.0), &Value::Real(0.5)).unwrap();
    /// assert_eq!(result, Value::Real(3.0));
    ///
    /// assert!(Context::eval_pow(&Value::Real(-8.0), &Value::Real(0.5)).is_err());
    /// ```
    pub fn eval_pow(base: &Value, exponent: &Value) -> EvalResult<Value> {
        if let (Some(b), Some(e)) = (base.as_exact(), exponent.as_exact())
           && e >= 0
        {
            return integer_pow(b, e).map(Value::Integer);
        }

        match (base.as_real(), exponent.as_real()) {
            (Some(b), Some(e)) => real_pow(b, e).map(Value::Real),
            _ => Err(unsupported(Operator::Pow, base, exponent)),
        }
    }

    /// Evaluates tetration, a tower of repeated exponentiation.
    ///
    /// The height is truncated toward zero. Starting from `r = base`, the
    /// step `r = base ** r` is applied `height` times, so a height of zero or
    /// less returns the base itself. The loop stops early once the tower
    /// reaches a fixed point or settles into a two-cycle.
    ///
    /// # Example
    /// ```
    /// use turquoise::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let result = Context::eval_tetration(&Value::Real(2.0), &Value::Real(2.0)).unwrap();
    /// assert_eq!(result, Value::Real(16.0));
    ///
    /// let result = Context::eval_tetration(&Value::Real(1.0), &Value::Real(1e18)).unwrap();
    /// assert_eq!(result, Value::Real(1.0));
    /// ```
    pub fn eval_tetration(base: &Value, height: &Value) -> EvalResult<Value> {
        let steps = match (base.as_real(), height.as_real()) {
            (Some(_), Some(h)) => f64_trunc_to_i64(h)?,
            _ => return Err(unsupported(Operator::Tetration, base, height)),
        };

        let mut previous: Option<Value> = None;
        let mut tower = base.clone();
        let mut step = 0;

        while step < steps {
            let next = Self::eval_pow(base, &tower)?;
            step += 1;

            if next == tower {
                break;
            }
            if previous.as_ref() == Some(&next) {
                // Two-cycle: the remaining parity picks the side.
                if (steps - step) % 2 == 1 {
                    return Ok(tower);
                }
                return Ok(next);
            }

            previous = Some(std::mem::replace(&mut tower, next));
        }

        Ok(tower)
    }
}

fn integer_pow(base: i64, exponent: i64) -> EvalResult<i64> {
    match (base, exponent) {
        (_, 0) => Ok(1),
        (0 | 1, _) => Ok(base),
        (-1, e) => Ok(if e % 2 == 0 { 1 } else { -1 }),
        (b, e) => {
            let e = u32::try_from(e).map_err(|_| RuntimeError::Overflow)?;
            b.checked_pow(e).ok_or(RuntimeError::Overflow)
        },
    }
}

fn real_pow(base: f64, exponent: f64) -> EvalResult<f64> {
    if base == 0.0 && exponent < 0.0 {
        return Err(RuntimeError::DivisionByZero);
    }
    if base < 0.0 && exponent.is_finite() && exponent.fract() != 0.0 {
        return Err(RuntimeError::InvalidArgument { details: format!("{} ** {} is not a real number",
                                                                    format_real(base),
                                                                    format_real(exponent)) });
    }

    let result = base.powf(exponent);
    if result.is_infinite() && base.is_finite() && exponent.is_finite() {
        return Err(RuntimeError::Overflow);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_integer_exponent_is_real() {
        let result = Context::eval_pow(&Value::Integer(2), &Value::Integer(-1)).unwrap();
        assert_eq!(result, Value::Real(0.5));
    }

    #[test]
    fn zero_to_negative_power_divides_by_zero() {
        assert_eq!(Context::eval_pow(&Value::Real(0.0), &Value::Real(-1.0)).unwrap_err(),
                   RuntimeError::DivisionByZero);
        assert_eq!(Context::eval_pow(&Value::Integer(0), &Value::Integer(-2)).unwrap_err(),
                   RuntimeError::DivisionByZero);
    }

    #[test]
    fn real_overflow_is_reported() {
        assert_eq!(Context::eval_pow(&Value::Real(10.0), &Value::Real(400.0)).unwrap_err(),
                   RuntimeError::Overflow);
        assert_eq!(Context::eval_pow(&Value::Integer(10), &Value::Integer(40)).unwrap_err(),
                   RuntimeError::Overflow);
    }

    #[test]
    fn tetration_height_is_truncated() {
        let result = Context::eval_tetration(&Value::Real(3.0), &Value::Real(1.9)).unwrap();
        assert_eq!(result, Value::Real(27.0));
        let result = Context::eval_tetration(&Value::Real(3.0), &Value::Real(-4.0)).unwrap();
        assert_eq!(result, Value::Real(3.0));
    }

    #[test]
    fn tall_towers_overflow() {
        assert_eq!(Context::eval_tetration(&Value::Real(2.0), &Value::Real(5.0)).unwrap_err(),
                   RuntimeError::Overflow);
    }

    #[test]
    fn converging_towers_stop_early() {
        let result = Context::eval_tetration(&Value::Real(0.5), &Value::Real(200.0)).unwrap();
        let Value::Real(r) = result else { panic!("expected a real") };
        assert!((r - 0.641_185_744_504_985_9).abs() < 1e-9);
    }
}
