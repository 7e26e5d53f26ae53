/// The rewriting engine.
///
/// Repeatedly folds windows of sibling nodes into reduced blocks, recursing
/// into child containers first, until no rule applies.
pub mod core;

/// The rule table.
///
/// Declares the ranges, factorial, binary expression and bracket group
/// patterns in priority order, with their predicates, selectors and
/// constructors.
pub mod rules;
