use crate::{
    ast::Operator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::f64_to_u64_checked,
};

impl Context<'_> {
    /// Evaluates a unary operation on a value.
    ///
    /// Factorial is the only unary operator. Its argument must be a
    /// non-negative integral number; the result is an exact integer.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    ///
    /// # Errors
    /// - `RuntimeError::InvalidArgument` for negative or fractional input.
    /// - `RuntimeError::Overflow` when the result does not fit in an `i64`.
    /// - `RuntimeError::TypeError` for arrays, text and binary operators.
    ///
    /// # Example
    /// ```
    /// use turquoise::{
    ///     ast::Operator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let v = Context::eval_unary(Operator::Factorial, &Value::Real(5.0)).unwrap();
    /// assert_eq!(v, Value::Integer(120));
    ///
    /// assert!(Context::eval_unary(Operator::Factorial, &Value::Real(2.5)).is_err());
    /// ```
    pub fn eval_unary(op: Operator, value: &Value) -> EvalResult<Value> {
        if op != Operator::Factorial {
            return Err(RuntimeError::TypeError { details: format!("'{op}' needs two operands") });
        }

        let n = match value {
            Value::Integer(_) | Value::Bool(_) => {
                let exact = value.as_exact().unwrap_or_default();
                u64::try_from(exact).map_err(|_| RuntimeError::InvalidArgument { details: format!("{exact} is negative") })?
            },
            Value::Real(x) => f64_to_u64_checked(*x)?,
            _ => {
                return Err(RuntimeError::TypeError { details: format!("factorial is not defined for '{}'",
                                                                      value.type_name()) });
            },
        };

        factorial(n).map(Value::Integer)
    }
}

/// Computes `n!` with checked multiplication.
///
/// # Errors
/// Returns `RuntimeError::Overflow` once the product leaves `i64`.
pub fn factorial(n: u64) -> EvalResult<i64> {
    let mut product: i64 = 1;
    for k in 2..=n {
        let k = i64::try_from(k).map_err(|_| RuntimeError::Overflow)?;
        product = product.checked_mul(k).ok_or(RuntimeError::Overflow)?;
    }
    Ok(product)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_factorials() {
        assert_eq!(factorial(0).unwrap(), 1);
        assert_eq!(factorial(1).unwrap(), 1);
        assert_eq!(factorial(20).unwrap(), 2_432_902_008_176_640_000);
    }

    #[test]
    fn factorial_overflows_past_twenty() {
        assert_eq!(factorial(21).unwrap_err(), RuntimeError::Overflow);
        assert_eq!(Context::eval_unary(Operator::Factorial, &Value::Real(1e15)).unwrap_err(),
                   RuntimeError::Overflow);
    }

    #[test]
    fn negative_input_is_invalid() {
        let err = Context::eval_unary(Operator::Factorial, &Value::Real(-3.0)).unwrap_err();
        assert!(matches!(err, RuntimeError::InvalidArgument { .. }));
        let err = Context::eval_unary(Operator::Factorial, &Value::Integer(-3)).unwrap_err();
        assert!(matches!(err, RuntimeError::InvalidArgument { .. }));
    }

    #[test]
    fn arrays_have_no_factorial() {
        let array = Value::from(vec![Value::Real(3.0)]);
        assert!(matches!(Context::eval_unary(Operator::Factorial, &array).unwrap_err(),
                         RuntimeError::TypeError { .. }));
    }
}
