use crate::{
    error::ParseError,
    interpreter::parser::core::ParseResult,
    tree::{Node, NodeId, Tree},
    util::num::format_real,
};

/// Represents an operator of the language.
///
/// Factorial is the only unary operator; every other operator is binary and
/// infix.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// True division (`/`)
    Div,
    /// Floor division (`//`)
    FloorDiv,
    /// Exponentiation (`**`, also spelled `^`)
    Pow,
    /// Tetration (`^^`)
    Tetration,
    /// Modulo (`%`)
    Mod,
    /// Factorial (postfix `!`)
    Factorial,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Logical/bitwise and (`&`)
    And,
    /// Logical/bitwise or (`|`)
    Or,
}

impl Operator {
    /// Looks an operator up in the operator table.
    ///
    /// # Errors
    /// Returns `ParseError::UnknownOperator` for text outside the table.
    ///
    /// # Example
    /// ```
    /// use turquoise::ast::Operator;
    ///
    /// assert_eq!(Operator::parse("^").unwrap(), Operator::Pow);
    /// assert_eq!(Operator::parse("**").unwrap(), Operator::Pow);
    /// assert_eq!(Operator::parse("^^").unwrap(), Operator::Tetration);
    /// assert!(Operator::parse("!+").is_err());
    /// ```
    pub fn parse(text: &str) -> ParseResult<Self> {
        Ok(match text {
            "+" => Self::Add,
            "-" => Self::Sub,
            "*" => Self::Mul,
            "/" => Self::Div,
            "//" => Self::FloorDiv,
            "**" | "^" => Self::Pow,
            "^^" => Self::Tetration,
            "%" => Self::Mod,
            "!" => Self::Factorial,
            "<" => Self::Less,
            "<=" => Self::LessEqual,
            ">" => Self::Greater,
            ">=" => Self::GreaterEqual,
            "==" => Self::Equal,
            "!=" => Self::NotEqual,
            "&" => Self::And,
            "|" => Self::Or,
            _ => {
                return Err(ParseError::UnknownOperator { operator: text.to_string() });
            },
        })
    }

    /// Returns `true` for operators taking a single operand.
    #[must_use]
    pub const fn is_unary(self) -> bool {
        matches!(self, Self::Factorial)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::FloorDiv => "//",
            Self::Pow => "**",
            Self::Tetration => "^^",
            Self::Mod => "%",
            Self::Factorial => "!",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::And => "&",
            Self::Or => "|",
        };
        write!(f, "{operator}")
    }
}

/// A numeric literal, parsed to a real when its rule fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number(pub f64);

impl Number {
    /// Parses the text of a numeric token.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidLiteral` if the text is not a number. A
    /// minus sign is a numeric character, so `8-6` is one token and is
    /// rejected here.
    ///
    /// # Example
    /// ```
    /// use turquoise::ast::Number;
    ///
    /// assert_eq!(Number::parse("-2.5").unwrap(), Number(-2.5));
    /// assert!(Number::parse("8-6").is_err());
    /// ```
    pub fn parse(text: &str) -> ParseResult<Self> {
        text.parse().map(Self).map_err(|_| ParseError::InvalidLiteral { literal: text.to_string() })
    }
}

/// An argument of a semantic node.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A literal read from a numeric token.
    Number(Number),
    /// The text of a non-numeric token.
    Text(String),
    /// A reduced child block, evaluated when the parent is.
    Node(NodeId),
}

impl Operand {
    /// Converts a window node into an operand.
    ///
    /// Numeric tokens are parsed immediately, other tokens keep their text and
    /// blocks are referenced by id.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidLiteral` for malformed numeric tokens.
    pub fn from_node(tree: &Tree, id: NodeId) -> ParseResult<Self> {
        match tree.node(id) {
            Node::Token(token) if tree.is_numeric(id) => Ok(Self::Number(Number::parse(token.text())?)),
            Node::Token(token) => Ok(Self::Text(token.text().to_string())),
            Node::Block(_) => Ok(Self::Node(id)),
        }
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Self::Number(Number(value))
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(Number(value)) => write!(f, "{}", format_real(*value)),
            Self::Text(text) => write!(f, "{text}"),
            Self::Node(id) => write!(f, "<{id}>"),
        }
    }
}

/// An arithmetic sequence `start, start + step, ...` up to about `stop`.
#[derive(Debug, Clone, PartialEq)]
pub struct Range {
    /// First term.
    pub start: Operand,
    /// Nominal last term.
    pub stop:  Operand,
    /// Distance between terms.
    pub step:  Operand,
}

impl Range {
    /// Creates a range.
    #[must_use]
    pub const fn new(start: Operand, stop: Operand, step: Operand) -> Self {
        Self { start, stop, step }
    }

    /// Creates a range with the default step of one.
    #[must_use]
    pub const fn unit(start: Operand, stop: Operand) -> Self {
        Self::new(start, stop, Operand::Number(Number(1.0)))
    }
}

/// An operator applied to one or two operands.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    /// Left (or only) operand.
    pub a:  Operand,
    /// Right operand, absent for unary operators.
    pub b:  Option<Operand>,
    /// The operator.
    pub op: Operator,
}

impl Expression {
    /// Creates an expression, checking the operand count against the
    /// operator.
    ///
    /// # Errors
    /// Returns `ParseError::OperatorArity` if a unary operator receives a
    /// second operand or a binary operator is missing one.
    ///
    /// # Example
    /// ```
    /// use turquoise::ast::{Expression, Operator};
    ///
    /// assert!(Expression::new(5.0.into(), None, Operator::Factorial).is_ok());
    /// assert!(Expression::new(5.0.into(), None, Operator::Add).is_err());
    /// ```
    pub fn new(a: Operand, b: Option<Operand>, op: Operator) -> ParseResult<Self> {
        match (op.is_unary(), &b) {
            (true, Some(_)) => Err(ParseError::OperatorArity { operator: op.to_string(),
                                                               expected: 1, }),
            (false, None) => Err(ParseError::OperatorArity { operator: op.to_string(),
                                                             expected: 2, }),
            _ => Ok(Self { a, b, op }),
        }
    }
}

/// A bracketed group; transparent around its inner operand.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    /// The bracketed content.
    pub inner: Operand,
}

/// The meaning attached to a reduced block.
#[derive(Debug, Clone, PartialEq)]
pub enum Semantic {
    /// A bare number.
    Number(Number),
    /// A range producing an array.
    Range(Range),
    /// An operator application.
    Expression(Expression),
    /// A bracketed group.
    Group(Group),
}

impl Semantic {
    /// Name of the variant.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Number(_) => "Number",
            Self::Range(_) => "Range",
            Self::Expression(_) => "Expression",
            Self::Group(_) => "Group",
        }
    }

    /// Field names and rendered values for diagnostics.
    ///
    /// # Example
    /// ```
    /// use turquoise::ast::{Expression, Operator, Semantic};
    ///
    /// let expression = Expression::new(8.0.into(), Some(6.0.into()), Operator::Add).unwrap();
    /// let report = Semantic::Expression(expression).report();
    ///
    /// assert_eq!(report,
    ///            vec![("a", "8.0".to_string()),
    ///                 ("op", "+".to_string()),
    ///                 ("b", "6.0".to_string())]);
    /// ```
    #[must_use]
    pub fn report(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Number(Number(value)) => vec![("value", format_real(*value))],
            Self::Range(range) => vec![("start", range.start.to_string()),
                                       ("stop", range.stop.to_string()),
                                       ("step", range.step.to_string())],
            Self::Expression(expression) => {
                let b = expression.b.as_ref().map_or_else(|| "None".to_string(), ToString::to_string);
                vec![("a", expression.a.to_string()), ("op", expression.op.to_string()), ("b", b)]
            },
            Self::Group(group) => vec![("inner", group.inner.to_string())],
        }
    }
}
