use crate::{interpreter::value::array::Array, util::num::format_real};

/// Represents a runtime value in the interpreter.
///
/// Numbers follow Python's numeric tower: integers and booleans stay exact,
/// anything touching a real becomes a real.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit integer, produced by factorial and by integer-only
    /// arithmetic on such results.
    Integer(i64),
    /// A double precision real. Every literal in the source is read as one.
    Real(f64),
    /// A boolean, produced by comparisons and by `&`/`|` on booleans.
    Bool(bool),
    /// The raw text of a token that never took part in a reduction.
    Text(String),
    /// A nested array.
    Array(Array),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(v.into())
    }
}

impl Value {
    /// Returns the value as an exact integer if it is an integer or a boolean.
    ///
    /// Booleans count as `0` and `1`, as they do in Python arithmetic.
    #[must_use]
    pub const fn as_exact(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::Bool(b) => Some(*b as i64),
            _ => None,
        }
    }

    /// Returns the value as a real if it is numeric.
    ///
    /// # Example
    /// ```
    /// use turquoise::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(3).as_real(), Some(3.0));
    /// assert_eq!(Value::Bool(true).as_real(), Some(1.0));
    /// assert_eq!(Value::Text("a".into()).as_real(), None);
    /// ```
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub const fn as_real(&self) -> Option<f64> {
        match self {
            Self::Real(r) => Some(*r),
            Self::Integer(n) => Some(*n as f64),
            Self::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    /// Returns the array if the value is one.
    #[must_use]
    pub const fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    /// Returns `true` if the value is [`Value::Array`].
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Name of the value's type for error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "int",
            Self::Real(_) => "float",
            Self::Bool(_) => "bool",
            Self::Text(_) => "str",
            Self::Array(_) => "Array",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{}", format_real(*r)),
            Self::Bool(true) => write!(f, "True"),
            Self::Bool(false) => write!(f, "False"),
            Self::Text(text) => write!(f, "{text}"),
            Self::Array(array) => write!(f, "{array}"),
        }
    }
}
