use crate::{
    ast::Operator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// Raw material for an array literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    /// An element.
    Value(Value),
    /// A piece of text; `,` and `;` are separators and are dropped, anything
    /// else is kept as a text element.
    Text(String),
    /// A nested literal sequence.
    Nested(Vec<Self>),
}

/// Separator punctuation stripped during construction.
pub const SEPARATORS: [&str; 2] = [",", ";"];

/// An ordered sequence of scalars and nested arrays.
///
/// Arrays broadcast against scalars: `Array ∘ scalar` applies `∘` to every
/// leaf and keeps the nested shape. `scalar ∘ Array` and `Array ∘ Array` are
/// not part of the contract and are rejected as type errors.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Array {
    items: Vec<Value>,
}

impl From<Vec<Value>> for Array {
    fn from(items: Vec<Value>) -> Self {
        Self { items }
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

impl Array {
    /// Builds an array from raw terms, dropping separators and turning
    /// nested term lists into nested arrays.
    ///
    /// # Example
    /// ```
    /// use turquoise::interpreter::value::{
    ///     array::{Array, Term},
    ///     core::Value,
    /// };
    ///
    /// let terms = vec![Term::Value(Value::Real(1.0)),
    ///                  Term::Text(",".to_string()),
    ///                  Term::Nested(vec![Term::Value(Value::Real(2.0)),
    ///                                    Term::Text(";".to_string()),
    ///                                    Term::Value(Value::Real(3.0))])];
    /// let array = Array::from_terms(terms);
    ///
    /// assert_eq!(array.to_string(), "[1.0, [2.0, 3.0]]");
    /// ```
    #[must_use]
    pub fn from_terms(terms: Vec<Term>) -> Self {
        terms.into_iter()
             .filter_map(|term| match term {
                 Term::Value(value) => Some(value),
                 Term::Text(text) if SEPARATORS.contains(&text.as_str()) => None,
                 Term::Text(text) => Some(Value::Text(text)),
                 Term::Nested(terms) => Some(Value::Array(Self::from_terms(terms))),
             })
             .collect()
    }

    /// The elements.
    #[must_use]
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    /// Number of top-level elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the array has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends an element.
    pub fn push(&mut self, value: Value) {
        self.items.push(value);
    }

    /// Applies `op(leaf, scalar)` to every leaf, recursing into nested
    /// arrays, and returns a new array of the same shape.
    ///
    /// # Errors
    /// Returns `RuntimeError::TypeError` if `scalar` is itself an array, and
    /// propagates any error raised by `op`.
    pub fn apply<F>(&self, op: &F, scalar: &Value) -> EvalResult<Self>
        where F: Fn(&Value, &Value) -> EvalResult<Value>
    {
        if scalar.is_array() {
            return Err(RuntimeError::TypeError { details: "arrays only broadcast against scalars, not against other arrays".to_string() });
        }

        self.items
            .iter()
            .map(|item| match item {
                Value::Array(nested) => nested.apply(op, scalar).map(Value::Array),
                leaf => op(leaf, scalar),
            })
            .collect::<EvalResult<Vec<_>>>()
            .map(Self::from)
    }

    /// Broadcasts a binary operator against a scalar.
    ///
    /// # Errors
    /// Returns `RuntimeError::TypeError` for operators without an
    /// elementwise form (factorial and tetration).
    pub fn broadcast(&self, op: Operator, scalar: &Value) -> EvalResult<Self> {
        match op {
            Operator::Add => self.add(scalar),
            Operator::Sub => self.subtract(scalar),
            Operator::Mul => self.multiply(scalar),
            Operator::Div => self.true_divide(scalar),
            Operator::FloorDiv => self.floor_divide(scalar),
            Operator::Pow => self.power(scalar),
            Operator::Mod => self.modulo(scalar),
            Operator::Less => self.less(scalar),
            Operator::LessEqual => self.less_equal(scalar),
            Operator::Greater => self.greater(scalar),
            Operator::GreaterEqual => self.greater_equal(scalar),
            Operator::Equal => self.equal(scalar),
            Operator::NotEqual => self.not_equal(scalar),
            Operator::And => self.logical_and(scalar),
            Operator::Or => self.logical_or(scalar),
            Operator::Tetration | Operator::Factorial => {
                Err(RuntimeError::TypeError { details: format!("'{op}' is not defined for arrays") })
            },
        }
    }

    fn elementwise(&self, op: Operator, scalar: &Value) -> EvalResult<Self> {
        self.apply(&|leaf, scalar| Context::eval_scalar(op, leaf, scalar), scalar)
    }

    /// Elementwise `+`.
    ///
    /// # Example
    /// ```
    /// use turquoise::interpreter::value::{array::Array, core::Value};
    ///
    /// let array: Array = [1.0, 2.0, 3.0].into_iter().map(Value::Real).collect();
    /// let sum = array.add(&Value::Real(1.0)).unwrap();
    ///
    /// assert_eq!(sum.to_string(), "[2.0, 3.0, 4.0]");
    /// ```
    pub fn add(&self, scalar: &Value) -> EvalResult<Self> {
        self.elementwise(Operator::Add, scalar)
    }

    /// Elementwise `-`.
    pub fn subtract(&self, scalar: &Value) -> EvalResult<Self> {
        self.elementwise(Operator::Sub, scalar)
    }

    /// Elementwise `*`.
    ///
    /// # Example
    /// ```
    /// use turquoise::interpreter::value::{array::Array, core::Value};
    ///
    /// let row = |a: f64, b: f64| Value::from(vec![Value::Real(a), Value::Real(b)]);
    /// let matrix = Array::from(vec![row(1.0, 2.0), row(3.0, 4.0)]);
    /// let doubled = matrix.multiply(&Value::Real(2.0)).unwrap();
    ///
    /// assert_eq!(doubled.to_string(), "[[2.0, 4.0], [6.0, 8.0]]");
    /// ```
    pub fn multiply(&self, scalar: &Value) -> EvalResult<Self> {
        self.elementwise(Operator::Mul, scalar)
    }

    /// Elementwise `/`.
    pub fn true_divide(&self, scalar: &Value) -> EvalResult<Self> {
        self.elementwise(Operator::Div, scalar)
    }

    /// Elementwise `//`.
    pub fn floor_divide(&self, scalar: &Value) -> EvalResult<Self> {
        self.elementwise(Operator::FloorDiv, scalar)
    }

    /// Elementwise `**`.
    pub fn power(&self, scalar: &Value) -> EvalResult<Self> {
        self.elementwise(Operator::Pow, scalar)
    }

    /// Elementwise `%`.
    pub fn modulo(&self, scalar: &Value) -> EvalResult<Self> {
        self.elementwise(Operator::Mod, scalar)
    }

    /// Elementwise `<`.
    pub fn less(&self, scalar: &Value) -> EvalResult<Self> {
        self.elementwise(Operator::Less, scalar)
    }

    /// Elementwise `<=`.
    pub fn less_equal(&self, scalar: &Value) -> EvalResult<Self> {
        self.elementwise(Operator::LessEqual, scalar)
    }

    /// Elementwise `>`.
    pub fn greater(&self, scalar: &Value) -> EvalResult<Self> {
        self.elementwise(Operator::Greater, scalar)
    }

    /// Elementwise `>=`.
    pub fn greater_equal(&self, scalar: &Value) -> EvalResult<Self> {
        self.elementwise(Operator::GreaterEqual, scalar)
    }

    /// Elementwise `==`. Returns an array of booleans, not a single answer.
    pub fn equal(&self, scalar: &Value) -> EvalResult<Self> {
        self.elementwise(Operator::Equal, scalar)
    }

    /// Elementwise `!=`.
    pub fn not_equal(&self, scalar: &Value) -> EvalResult<Self> {
        self.elementwise(Operator::NotEqual, scalar)
    }

    /// Elementwise `&`.
    pub fn logical_and(&self, scalar: &Value) -> EvalResult<Self> {
        self.elementwise(Operator::And, scalar)
    }

    /// Elementwise `|`.
    pub fn logical_or(&self, scalar: &Value) -> EvalResult<Self> {
        self.elementwise(Operator::Or, scalar)
    }
}

impl std::fmt::Display for Array {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;

        for (index, value) in self.items.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }

            write!(f, "{value}")?;
        }

        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reals(values: &[f64]) -> Array {
        values.iter().map(|v| Value::Real(*v)).collect()
    }

    #[test]
    fn nested_shape_is_preserved() {
        let matrix = Array::from(vec![Value::Array(reals(&[1.0, 2.0])), Value::Array(reals(&[3.0, 4.0]))]);
        let result = matrix.subtract(&Value::Real(1.0)).unwrap();
        assert_eq!(result,
                   Array::from(vec![Value::Array(reals(&[0.0, 1.0])), Value::Array(reals(&[2.0, 3.0]))]));
    }

    #[test]
    fn comparisons_produce_boolean_arrays() {
        let result = reals(&[1.0, 5.0]).greater(&Value::Real(2.0)).unwrap();
        assert_eq!(result.to_string(), "[False, True]");
    }

    #[test]
    fn floor_divide_and_modulo_follow_python() {
        let array = reals(&[7.0, -7.0]);
        assert_eq!(array.floor_divide(&Value::Real(2.0)).unwrap(), reals(&[3.0, -4.0]));
        assert_eq!(array.modulo(&Value::Real(3.0)).unwrap(), reals(&[1.0, 2.0]));
    }

    #[test]
    fn array_against_array_is_rejected() {
        let array = reals(&[1.0]);
        let err = array.add(&Value::Array(reals(&[1.0]))).unwrap_err();
        assert!(matches!(err, RuntimeError::TypeError { .. }));
    }

    #[test]
    fn division_by_zero_propagates() {
        assert_eq!(reals(&[1.0]).true_divide(&Value::Real(0.0)).unwrap_err(),
                   RuntimeError::DivisionByZero);
    }

    #[test]
    fn tetration_does_not_broadcast() {
        assert!(reals(&[1.0]).broadcast(Operator::Tetration, &Value::Real(2.0)).is_err());
    }

    #[test]
    fn separators_are_stripped_at_every_depth() {
        let terms = vec![Term::Text(";".to_string()),
                         Term::Nested(vec![Term::Value(Value::Real(1.0)),
                                           Term::Text(",".to_string()),
                                           Term::Nested(vec![Term::Text(",".to_string()),
                                                             Term::Text("x".to_string())])]),
                         Term::Text(",".to_string()),
                         Term::Nested(Vec::new())];

        let inner = Array::from(vec![Value::Text("x".to_string())]);
        let middle = Array::from(vec![Value::Real(1.0), Value::Array(inner)]);
        assert_eq!(Array::from_terms(terms),
                   Array::from(vec![Value::Array(middle), Value::Array(Array::default())]));
    }

    #[test]
    fn empty_array_displays_brackets() {
        assert_eq!(Array::default().to_string(), "[]");
    }
}
