/// Parsing errors.
///
/// Defines all error types that can occur while lexing a statement or while
/// the grammar engine folds its tokens into semantic nodes.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a reduced
/// tree: type mismatches, division by zero, overflow, parse residue and depth
/// exhaustion.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// A failure tagged with the statement it happened in.
///
/// Errors are contained per statement: a failing statement is reported with
/// this type and the remaining statements are still processed.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The statement could not be lexed or reduced.
    Parse {
        /// 1-based index of the statement in the program.
        statement: usize,
        /// Source text of the statement.
        text:      String,
        /// The underlying parse error.
        error:     ParseError,
    },
    /// The statement was parsed but failed during evaluation.
    Runtime {
        /// 1-based index of the statement in the program.
        statement: usize,
        /// Source text of the statement.
        text:      String,
        /// The underlying runtime error.
        error:     RuntimeError,
    },
}

impl Error {
    /// Returns the 1-based index of the statement that failed.
    #[must_use]
    pub const fn statement(&self) -> usize {
        match self {
            Self::Parse { statement, .. } | Self::Runtime { statement, .. } => *statement,
        }
    }

    /// Returns the source text of the statement that failed.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Parse { text, .. } | Self::Runtime { text, .. } => text,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse { statement,
                          text,
                          error, } => {
                write!(f, "Error in statement {statement} `{text}`: {error}")
            },
            Self::Runtime { statement,
                            text,
                            error, } => {
                write!(f, "Error in statement {statement} `{text}`: {error}")
            },
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse { error, .. } => Some(error),
            Self::Runtime { error, .. } => Some(error),
        }
    }
}
