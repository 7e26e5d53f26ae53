/// The evaluator module walks the reduced tree and computes values.
///
/// Evaluation starts at a statement block and descends through reduced
/// blocks, applying operators with Python's numeric semantics and
/// broadcasting arrays against scalars.
///
/// # Responsibilities
/// - Evaluates semantic nodes (numbers, ranges, expressions, groups).
/// - Bounds recursion with a depth ceiling instead of overflowing the stack.
/// - Reports runtime errors such as division by zero or parse residue.
pub mod evaluator;
/// The lexer module classifies characters and tokenizes statements.
///
/// Characters fall into four classes: numeric, operator, syntax and letter.
/// A token is a maximal run of one class. Statements are separated by
/// newlines and `|`.
///
/// # Responsibilities
/// - Maps each character to its class, rejecting everything else.
/// - Splits source text into statements and statements into tokens.
pub mod lexer;
/// The parser module folds token sequences into semantic nodes.
///
/// A priority-ordered table of window-matching rules repeatedly rewrites
/// sibling nodes into single reduced blocks until nothing matches.
///
/// # Responsibilities
/// - Holds the rule table and the nesting limit.
/// - Builds ranges, expressions and groups from matched windows.
/// - Reports malformed literals, unknown operators and wrong arities.
pub mod parser;
/// The transpiler module renders reduced statements as Python source.
///
/// Only statements that reduced to a single expression convert; every other
/// statement becomes a comment and is counted.
///
/// # Responsibilities
/// - Renders expressions with Python operators and calls.
/// - Adds the imports and helper definitions the rendered text needs.
pub mod transpiler;
/// The value module defines the runtime data types for evaluation.
///
/// Integers, reals, booleans, text and nested arrays. Arrays carry the
/// elementwise operations used for broadcasting.
///
/// # Responsibilities
/// - Defines the `Value` enum and its Python-style display.
/// - Implements arrays and their elementwise operators.
pub mod value;
