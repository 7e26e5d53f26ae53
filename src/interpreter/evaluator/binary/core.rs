use crate::{
    ast::Operator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a binary operation between two values.
    ///
    /// An array on the left broadcasts the operator against a scalar on the
    /// right. Every other array placement is rejected: `scalar ∘ Array` and
    /// `Array ∘ Array` are type errors. Scalar pairs go through
    /// `eval_scalar`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use turquoise::{
    ///     ast::Operator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let array = Value::from(vec![Value::Real(1.0), Value::Real(2.0)]);
    ///
    /// let result = Context::eval_binary(Operator::Mul, &array, &Value::Real(3.0)).unwrap();
    /// assert_eq!(result.to_string(), "[3.0, 6.0]");
    ///
    /// assert!(Context::eval_binary(Operator::Mul, &Value::Real(3.0), &array).is_err());
    /// ```
    pub fn eval_binary(op: Operator, left: &Value, right: &Value) -> EvalResult<Value> {
        match (left, right) {
            (Value::Array(array), scalar) => array.broadcast(op, scalar).map(Value::Array),
            (_, Value::Array(_)) => {
                Err(RuntimeError::TypeError { details: format!("unsupported operand type(s) for {op}: '{}' and 'Array'",
                                                               left.type_name()) })
            },
            _ => Self::eval_scalar(op, left, right),
        }
    }

    /// Evaluates a binary operator on two non-array values.
    ///
    /// Routes arithmetic to `eval_arithmetic`, exponentiation to `eval_pow`,
    /// tetration to `eval_tetration`, relational operators to
    /// `eval_comparison` and `&`/`|` to `eval_logic`.
    ///
    /// # Errors
    /// Returns `RuntimeError::TypeError` for the unary factorial and for
    /// operand types the operator does not support.
    pub fn eval_scalar(op: Operator, left: &Value, right: &Value) -> EvalResult<Value> {
        use Operator::{
            Add, And, Div, Equal, Factorial, FloorDiv, Greater, GreaterEqual, Less, LessEqual,
            Mod, Mul, NotEqual, Or, Pow, Sub, Tetration,
        };

        match op {
            Add | Sub | Mul | Div | FloorDiv | Mod => Self::eval_arithmetic(op, left, right),
            Pow => Self::eval_pow(left, right),
            Tetration => Self::eval_tetration(left, right),
            Less | LessEqual | Greater | GreaterEqual | Equal | NotEqual => {
                Self::eval_comparison(op, left, right)
            },
            And | Or => Self::eval_logic(op, left, right),
            Factorial => Err(RuntimeError::TypeError { details: format!("'{op}' takes a single operand") }),
        }
    }
}

/// Builds the type error Python raises for an unsupported operand pair.
pub(crate) fn unsupported(op: Operator, left: &Value, right: &Value) -> RuntimeError {
    RuntimeError::TypeError { details: format!("unsupported operand type(s) for {op}: '{}' and '{}'",
                                               left.type_name(),
                                               right.type_name()) }
}
