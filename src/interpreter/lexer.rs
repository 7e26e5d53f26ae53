use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult, tree::Token};

/// The lexical class of a character, and of every token built from a run of
/// such characters.
///
/// Each variant's regex is the character set of the class after the ordered
/// membership rule has been applied (`-` is numeric, `=` is an operator), so
/// the sets are disjoint and logos' longest match produces exactly one token
/// per maximal same-class run.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Digits, the decimal point and the minus sign.
    #[regex(r"[0-9.\-]+")]
    Numeric,
    /// Operator characters such as `+`, `*`, `<` or `!`.
    #[regex(r"[!@#$%^&*/+<>=?]+")]
    Operator,
    /// Brackets, separators and the range colon.
    #[regex(r"[()\[\]{},;:|]+")]
    Syntax,
    /// Lowercase ASCII letters.
    #[regex(r"[a-z]+")]
    Letter,
}

/// Membership sets in priority order. The first set containing a character
/// decides its class.
pub const CLASS_SETS: [(CharClass, &str); 4] =
    [(CharClass::Numeric, "0123456789.-"),
     (CharClass::Operator, "!@#$%^&*/-+<>=?"),
     (CharClass::Syntax, "()[]{},;:=|"),
     (CharClass::Letter, "abcdefghijklmnopqrstuvwxyz")];

/// Characters that separate statements.
pub const STATEMENT_SEPARATORS: [char; 2] = ['\n', '|'];

impl CharClass {
    /// Classifies a single character.
    ///
    /// Classes are checked in the declared order (numeric, operator, syntax,
    /// letter) and the first matching one wins.
    ///
    /// # Errors
    /// Returns `ParseError::UnclassifiableCharacter` (reported at column 0)
    /// when the character is in no class. Whitespace and uppercase letters
    /// are rejected.
    ///
    /// # Example
    /// ```
    /// use turquoise::interpreter::lexer::CharClass;
    ///
    /// assert_eq!(CharClass::classify('7').unwrap(), CharClass::Numeric);
    /// assert_eq!(CharClass::classify('-').unwrap(), CharClass::Numeric);
    /// assert_eq!(CharClass::classify('=').unwrap(), CharClass::Operator);
    /// assert_eq!(CharClass::classify(':').unwrap(), CharClass::Syntax);
    /// assert!(CharClass::classify(' ').is_err());
    /// ```
    pub fn classify(character: char) -> ParseResult<Self> {
        CLASS_SETS.iter()
                  .find(|(_, members)| members.contains(character))
                  .map(|(class, _)| *class)
                  .ok_or(ParseError::UnclassifiableCharacter { character,
                                                               column: 0 })
    }

    /// Returns the lowercase label of the class.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Operator => "operator",
            Self::Syntax => "syntax",
            Self::Letter => "letter",
        }
    }
}

impl std::fmt::Display for CharClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Splits a source string into statements.
///
/// Both newlines and pipes separate statements; empty statements are
/// discarded.
///
/// # Example
/// ```
/// use turquoise::interpreter::lexer::split_statements;
///
/// assert_eq!(split_statements("8+6|1:3\n\n5!"), vec!["8+6", "1:3", "5!"]);
/// ```
#[must_use]
pub fn split_statements(source: &str) -> Vec<&str> {
    source.split(STATEMENT_SEPARATORS)
          .filter(|statement| !statement.is_empty())
          .collect()
}

/// Lexes one statement into tokens.
///
/// Every token is a maximal run of characters of one class; a new token
/// starts exactly when the class changes. Concatenating the token texts
/// reproduces the statement.
///
/// # Errors
/// Returns `ParseError::UnclassifiableCharacter` with the character's column
/// as soon as a character belongs to no class. The statement is abandoned
/// rather than guessed.
///
/// # Example
/// ```
/// use turquoise::interpreter::lexer::{CharClass, lex_statement};
///
/// let tokens = lex_statement("12+[3]").unwrap();
/// let texts: Vec<&str> = tokens.iter().map(|t| t.text()).collect();
///
/// assert_eq!(texts, vec!["12", "+", "[", "3", "]"]);
/// assert_eq!(tokens[1].class(), CharClass::Operator);
/// ```
pub fn lex_statement(statement: &str) -> ParseResult<Vec<Token>> {
    let mut tokens = Vec::new();

    for (class, span) in CharClass::lexer(statement).spanned() {
        if let Ok(class) = class {
            tokens.push(Token::new(&statement[span], class));
        } else {
            let character = statement[span.start..].chars().next().unwrap_or_default();
            let column = statement[..span.start].chars().count();
            return Err(ParseError::UnclassifiableCharacter { character, column });
        }
    }

    Ok(tokens)
}
