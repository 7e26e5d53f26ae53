/// Binary operator evaluation logic.
///
/// Handles every infix operator: arithmetic with Python's promotion rules,
/// exponentiation and tetration, comparisons and the logical operators, plus
/// broadcasting of arrays against scalars.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements the postfix factorial.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the tree walker, the depth ceiling, per-statement evaluation and
/// the trace lines produced for each statement.
pub mod core;

/// Evaluation of semantic nodes.
///
/// Turns ranges, expressions, groups and numbers into values, resolving
/// operands that refer to other reduced blocks.
pub mod semantic;
