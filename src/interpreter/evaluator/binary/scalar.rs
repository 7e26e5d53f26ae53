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
};

impl Context<'_> {
    /// Evaluates `+ - * / // %` on two scalars.
    ///
    /// Integers and booleans stay exact for everything except `/`, which
    /// always produces a real. A real on either side promotes the pair.
    /// Floor division and modulo round toward negative infinity, so the
    /// remainder takes the sign of the divisor.
    ///
    /// # Parameters
    /// - `op`: One of `Add`, `Sub`, `Mul`, `Div`, `FloorDiv` or `Mod`.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed scalar.
    ///
    /// # Example
    /// ```
    /// use turquoise::{
    ///     ast::Operator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let x = Value::Real(-7.0);
    /// let y = Value::Real(2.0);
    ///
    /// assert_eq!(Context::eval_arithmetic(Operator::FloorDiv, &x, &y).unwrap(), Value::Real(-4.0));
    /// assert_eq!(Context::eval_arithmetic(Operator::Mod, &x, &y).unwrap(), Value::Real(1.0));
    /// assert_eq!(Context::eval_arithmetic(Operator::Div, &Value::Integer(1), &Value::Integer(2)).unwrap(),
    ///            Value::Real(0.5));
    /// ```
    pub fn eval_arithmetic(op: Operator, left: &Value, right: &Value) -> EvalResult<Value> {
        if let (Some(a), Some(b)) = (left.as_exact(), right.as_exact())
           && op != Operator::Div
        {
            return integer_arithmetic(op, a, b).map(Value::Integer);
        }

        match (left.as_real(), right.as_real()) {
            (Some(a), Some(b)) => real_arithmetic(op, a, b).map(Value::Real),
            _ => Err(unsupported(op, left, right)),
        }
    }
}

fn integer_arithmetic(op: Operator, a: i64, b: i64) -> EvalResult<i64> {
    let result = match op {
        Operator::Add => a.checked_add(b),
        Operator::Sub => a.checked_sub(b),
        Operator::Mul => a.checked_mul(b),
        Operator::FloorDiv | Operator::Mod if b == 0 => return Err(RuntimeError::DivisionByZero),
        Operator::FloorDiv => a.checked_div(b).map(|q| if a % b != 0 && (a < 0) != (b < 0) { q - 1 } else { q }),
        Operator::Mod => a.checked_rem(b).map(|r| if r != 0 && (r < 0) != (b < 0) { r + b } else { r }),
        _ => return Err(RuntimeError::TypeError { details: format!("'{op}' is not an arithmetic operator") }),
    };
    result.ok_or(RuntimeError::Overflow)
}

fn real_arithmetic(op: Operator, a: f64, b: f64) -> EvalResult<f64> {
    match op {
        Operator::Add => Ok(a + b),
        Operator::Sub => Ok(a - b),
        Operator::Mul => Ok(a * b),
        Operator::Div | Operator::FloorDiv | Operator::Mod if b == 0.0 => Err(RuntimeError::DivisionByZero),
        Operator::Div => Ok(a / b),
        Operator::FloorDiv => Ok(floor_divmod(a, b).0),
        Operator::Mod => Ok(floor_divmod(a, b).1),
        _ => Err(RuntimeError::TypeError { details: format!("'{op}' is not an arithmetic operator") }),
    }
}

/// Floored quotient and remainder of two reals, `b` non-zero.
///
/// Rounds the quotient so that `a == q * b + r` holds as closely as floating
/// point allows, with `r` carrying the sign of `b`.
fn floor_divmod(a: f64, b: f64) -> (f64, f64) {
    let mut rem = a % b;
    let mut div = (a - rem) / b;

    if rem == 0.0 {
        rem = 0.0_f64.copysign(b);
    } else if (b < 0.0) != (rem < 0.0) {
        rem += b;
        div -= 1.0;
    }

    let quotient = if div == 0.0 {
        0.0_f64.copysign(a / b)
    } else {
        let floored = div.floor();
        if div - floored > 0.5 { floored + 1.0 } else { floored }
    };

    (quotient, rem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_stay_exact() {
        let result = Context::eval_arithmetic(Operator::Add, &Value::Integer(2), &Value::Bool(true)).unwrap();
        assert_eq!(result, Value::Integer(3));
    }

    #[test]
    fn integer_floor_division_rounds_down() {
        let result = Context::eval_arithmetic(Operator::FloorDiv, &Value::Integer(-7), &Value::Integer(2)).unwrap();
        assert_eq!(result, Value::Integer(-4));
        let result = Context::eval_arithmetic(Operator::Mod, &Value::Integer(7), &Value::Integer(-3)).unwrap();
        assert_eq!(result, Value::Integer(-2));
    }

    #[test]
    fn integer_overflow_is_reported() {
        let err = Context::eval_arithmetic(Operator::Mul, &Value::Integer(i64::MAX), &Value::Integer(2)).unwrap_err();
        assert_eq!(err, RuntimeError::Overflow);
    }

    #[test]
    fn zero_divisors_are_rejected() {
        for op in [Operator::Div, Operator::FloorDiv, Operator::Mod] {
            assert_eq!(Context::eval_arithmetic(op, &Value::Real(1.0), &Value::Real(0.0)).unwrap_err(),
                       RuntimeError::DivisionByZero);
            assert_eq!(Context::eval_arithmetic(op, &Value::Integer(1), &Value::Integer(0)).unwrap_err(),
                       RuntimeError::DivisionByZero);
        }
    }

    #[test]
    fn real_remainder_takes_divisor_sign() {
        assert_eq!(floor_divmod(7.0, -2.0), (-4.0, -1.0));
        assert_eq!(floor_divmod(-0.0, 5.0).1, 0.0);
        assert_eq!(floor_divmod(5.5, 2.0), (2.0, 1.5));
    }

    #[test]
    fn text_is_not_a_number() {
        let err = Context::eval_arithmetic(Operator::Add, &Value::Text("a".into()), &Value::Real(1.0)).unwrap_err();
        assert!(matches!(err, RuntimeError::TypeError { .. }));
    }
}
