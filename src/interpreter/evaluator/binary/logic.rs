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
    /// Evaluates `&` or `|` between two values.
    ///
    /// Both operators are bitwise, as in Python: two booleans give a boolean,
    /// any other pair of integers or booleans gives an integer. Reals and
    /// text are rejected.
    ///
    /// # Parameters
    /// - `op`: `Operator::And` or `Operator::Or`.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Example
    /// ```
    /// use turquoise::{
    ///     ast::Operator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_logic(Operator::Or, &Value::Bool(true), &Value::Bool(false));
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    ///
    /// let result = Context::eval_logic(Operator::And, &Value::Integer(6), &Value::Bool(true));
    /// assert_eq!(result.unwrap(), Value::Integer(0));
    ///
    /// assert!(Context::eval_logic(Operator::And, &Value::Real(1.0), &Value::Real(1.0)).is_err());
    /// ```
    pub fn eval_logic(op: Operator, left: &Value, right: &Value) -> EvalResult<Value> {
        let (Some(a), Some(b)) = (left.as_exact(), right.as_exact()) else {
            return Err(unsupported(op, left, right));
        };

        let bits = match op {
            Operator::And => a & b,
            Operator::Or => a | b,
            _ => return Err(RuntimeError::TypeError { details: format!("'{op}' is not a logical operator") }),
        };

        match (left, right) {
            (Value::Bool(_), Value::Bool(_)) => Ok(Value::Bool(bits != 0)),
            _ => Ok(Value::Integer(bits)),
        }
    }
}
