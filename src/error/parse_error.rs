#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or reduction.
pub enum ParseError {
    /// A character belongs to none of the lexical classes.
    UnclassifiableCharacter {
        /// The offending character.
        character: char,
        /// 0-based character column inside the statement.
        column:    usize,
    },
    /// A numeric token could not be read as a number, e.g. `8-6` or `1.2.3`.
    InvalidLiteral {
        /// The token text.
        literal: String,
    },
    /// An operator run that is not part of the operator table, e.g. `!+`.
    UnknownOperator {
        /// The operator text.
        operator: String,
    },
    /// An operator was given the wrong number of operands.
    OperatorArity {
        /// The operator text.
        operator: String,
        /// The number of operands the operator expects.
        expected: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnclassifiableCharacter { character, column } => write!(f,
                                                                          "Unclassifiable character {character:?} at column {column}."),
            Self::InvalidLiteral { literal } => {
                write!(f, "Invalid numeric literal '{literal}'.")
            },
            Self::UnknownOperator { operator } => write!(f, "Unknown operator '{operator}'."),
            Self::OperatorArity { operator, expected } => write!(f,
                                                                 "Operator '{operator}' expects {expected} operand(s)."),
        }
    }
}

impl std::error::Error for ParseError {}
