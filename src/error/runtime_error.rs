#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details: String,
    },
    /// Attempted division (true, floor or modulo) by zero, or raised zero to
    /// a negative power.
    DivisionByZero,
    /// Arithmetic overflowed the representable range.
    Overflow,
    /// An argument was outside the domain of an operation.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
    },
    /// A statement never collapsed to a single node (parse residue).
    NoApplicableRule {
        /// Number of sibling pieces left at statement level.
        pieces: usize,
    },
    /// Evaluation nested deeper than the configured ceiling.
    DepthExceeded {
        /// The ceiling that was hit.
        limit: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeError { details } => write!(f, "Type error: {details}."),
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::Overflow => write!(f, "Numeric overflow while trying to compute result."),
            Self::InvalidArgument { details } => write!(f, "Invalid argument: {details}."),
            Self::NoApplicableRule { pieces } => write!(f,
                                                        "No applicable rule: statement left {pieces} unreduced pieces."),
            Self::DepthExceeded { limit } => {
                write!(f, "Nesting exceeds the maximum depth of {limit}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
