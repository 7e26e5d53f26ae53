use crate::{
    ast::{Expression, Group, Number, Operand, Range, Semantic},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{array::Array, core::Value},
    },
    util::num::{range_count, usize_to_f64_checked},
};

impl Context<'_> {
    /// Evaluates the semantic node attached to a reduced block.
    ///
    /// # Parameters
    /// - `semantic`: The node to evaluate.
    /// - `depth`: Depth of the owning block.
    pub fn eval_semantic(&self, semantic: &Semantic, depth: usize) -> EvalResult<Value> {
        match semantic {
            Semantic::Number(Number(x)) => Ok(Value::Real(*x)),
            Semantic::Range(range) => self.eval_range(range, depth),
            Semantic::Expression(expression) => self.eval_expression(expression, depth),
            Semantic::Group(Group { inner }) => self.eval_operand(inner, depth),
        }
    }

    /// Evaluates one operand of a semantic node.
    ///
    /// Literals are returned as they are; a node reference evaluates the
    /// referenced block one level deeper.
    pub fn eval_operand(&self, operand: &Operand, depth: usize) -> EvalResult<Value> {
        match operand {
            Operand::Number(Number(x)) => Ok(Value::Real(*x)),
            Operand::Text(text) => Ok(Value::Text(text.clone())),
            Operand::Node(id) => self.eval_node(*id, depth + 1),
        }
    }

    /// Evaluates a range into an array of reals.
    ///
    /// The array holds `round_half_even((stop - start) / step) + 1` terms
    /// `start + step * i`. Rounding may place the last term past `stop`.
    ///
    /// # Errors
    /// - `RuntimeError::TypeError` if a bound is not a scalar number.
    /// - `RuntimeError::DivisionByZero` for a zero step.
    /// - `RuntimeError::Overflow` for a count that does not fit.
    pub fn eval_range(&self, range: &Range, depth: usize) -> EvalResult<Value> {
        let start = self.eval_bound(&range.start, "start", depth)?;
        let stop = self.eval_bound(&range.stop, "stop", depth)?;
        let step = self.eval_bound(&range.step, "step", depth)?;

        let count = range_count(start, stop, step)?;

        (0..count).map(|i| -> EvalResult<Value> { Ok(Value::Real(start + step * usize_to_f64_checked(i)?)) })
                  .collect::<EvalResult<Array>>()
                  .map(Value::Array)
    }

    /// Evaluates an operator application.
    ///
    /// Operands are evaluated left to right before the operator is applied.
    pub fn eval_expression(&self, expression: &Expression, depth: usize) -> EvalResult<Value> {
        let a = self.eval_operand(&expression.a, depth)?;

        match &expression.b {
            None => Self::eval_unary(expression.op, &a),
            Some(b) => {
                let b = self.eval_operand(b, depth)?;
                Self::eval_binary(expression.op, &a, &b)
            },
        }
    }

    fn eval_bound(&self, operand: &Operand, name: &str, depth: usize) -> EvalResult<f64> {
        let value = self.eval_operand(operand, depth)?;
        value.as_real()
             .ok_or_else(|| RuntimeError::TypeError { details: format!("range {name} must be a number, not '{}'",
                                                                     value.type_name()) })
    }
}
