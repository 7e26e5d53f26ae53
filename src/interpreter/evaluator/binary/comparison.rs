use std::cmp::Ordering;

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

/// Maps a comparison operator and an ordering to the boolean result.
///
/// An ordering of `None` stands for an unordered pair (a NaN operand), for
/// which every operator except `!=` is false.
#[must_use]
pub fn ordering_result(op: Operator, ordering: Option<Ordering>) -> bool {
    use Ordering::{Equal, Greater, Less};

    match (op, ordering) {
        (Operator::NotEqual, ordering) => ordering != Some(Equal),
        (_, None) => false,
        (Operator::Less, Some(o)) => o == Less,
        (Operator::LessEqual, Some(o)) => o != Greater,
        (Operator::Greater, Some(o)) => o == Greater,
        (Operator::GreaterEqual, Some(o)) => o != Less,
        (Operator::Equal, Some(o)) => o == Equal,
        _ => false,
    }
}

impl Context<'_> {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// Numbers compare by value, exactly when both sides are integers or
    /// booleans. Text compares with text lexicographically. A number never
    /// equals a piece of text, and ordering them is an error.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    ///
    /// # Returns
    /// A `Value::Bool`.
    ///
    /// # Example
    /// ```
    /// use turquoise::{
    ///     ast::Operator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_comparison(Operator::LessEqual, &Value::Integer(2), &Value::Real(2.0));
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    ///
    /// let result = Context::eval_comparison(Operator::Equal, &Value::Real(1.0), &Value::Text("a".into()));
    /// assert_eq!(result.unwrap(), Value::Bool(false));
    ///
    /// assert!(Context::eval_comparison(Operator::Less, &Value::Real(1.0), &Value::Text("a".into())).is_err());
    /// ```
    pub fn eval_comparison(op: Operator, left: &Value, right: &Value) -> EvalResult<Value> {
        let ordering = match (left, right) {
            (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
            _ => match (left.as_exact(), right.as_exact()) {
                (Some(a), Some(b)) => Some(a.cmp(&b)),
                _ => match (left.as_real(), right.as_real()) {
                    (Some(a), Some(b)) => a.partial_cmp(&b),
                    _ if matches!(op, Operator::Equal | Operator::NotEqual) => {
                        return Ok(Value::Bool(op == Operator::NotEqual));
                    },
                    _ => return Err(unsupported(op, left, right)),
                },
            },
        };

        match op {
            Operator::Less
            | Operator::LessEqual
            | Operator::Greater
            | Operator::GreaterEqual
            | Operator::Equal
            | Operator::NotEqual => Ok(Value::Bool(ordering_result(op, ordering))),
            _ => Err(RuntimeError::TypeError { details: format!("'{op}' is not a comparison") }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_is_unordered() {
        let nan = Value::Real(f64::NAN);
        assert_eq!(Context::eval_comparison(Operator::Equal, &nan, &nan).unwrap(), Value::Bool(false));
        assert_eq!(Context::eval_comparison(Operator::NotEqual, &nan, &nan).unwrap(), Value::Bool(true));
        assert_eq!(Context::eval_comparison(Operator::GreaterEqual, &nan, &Value::Real(0.0)).unwrap(),
                   Value::Bool(false));
    }

    #[test]
    fn text_compares_lexicographically() {
        let result = Context::eval_comparison(Operator::Less, &Value::Text("abc".into()), &Value::Text("abd".into()));
        assert_eq!(result.unwrap(), Value::Bool(true));
    }

    #[test]
    fn booleans_compare_as_integers() {
        let result = Context::eval_comparison(Operator::Equal, &Value::Bool(true), &Value::Real(1.0));
        assert_eq!(result.unwrap(), Value::Bool(true));
    }
}
