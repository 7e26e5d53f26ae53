//! # turquoise
//!
//! turquoise is a small expression language built on grammar rewriting.
//! Statements are split into character-class tokens, folded bottom-up by a
//! priority-ordered table of window-matching rules, and then evaluated with
//! Python's numeric semantics or transpiled to Python source.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{evaluator::core::Trace, transpiler::core::Transpilation},
    program::Program,
};

/// Defines the semantic nodes attached to reduced blocks.
///
/// This module declares the operator table, the `Operand` type and the four
/// semantic variants (number, range, expression, group) that the grammar
/// engine builds and the evaluator and transpiler consume.
///
/// # Responsibilities
/// - Maps operator symbols to `Operator` and back to Python spellings.
/// - Checks operand counts when an expression is built.
/// - Reports node fields for tree outlines.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, reducing
/// or evaluating a statement, and the statement-tagged `Error` returned by
/// the public entry points.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, grammar, evaluator).
/// - Tags failures with the statement index and text.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates lexing, reduction, evaluation and transpilation.
///
/// # Responsibilities
/// - Coordinates the lexer, grammar engine, evaluator and transpiler.
/// - Defines runtime values and their operations.
pub mod interpreter;
/// The public façade over a parsed program.
///
/// `Program` owns the source, the reduced tree and every statement's parse
/// outcome, and exposes evaluation and transpilation.
pub mod program;
/// The node arena that the grammar engine rewrites in place.
///
/// Nodes are tokens or blocks addressed by `NodeId`. The read-only accessors
/// double as the interface for tree visualizers.
pub mod tree;
/// General utilities for safe numeric conversion and helpers.
///
/// This module provides conversion routines used by the evaluator and the
/// Python-style formatting of reals used for display and transpilation.
///
/// # Responsibilities
/// - Safely convert between `u64`, `usize`, `i64` and `f64` without silent
///   data loss.
/// - Compute range lengths and format reals.
pub mod util;

/// Evaluates every statement of `source` and returns their traces.
///
/// Each statement is evaluated in order. With `auto_print` set, every
/// successful trace line is printed as `<source> -> <value>`.
///
/// # Errors
/// Returns the first statement-tagged failure, parse or runtime.
///
/// # Examples
/// ```
/// use turquoise::{get_result, interpreter::value::core::Value};
///
/// let traces = get_result("8+6\n9^3", false).unwrap();
/// assert_eq!(traces[0].value, Value::Real(14.0));
/// assert_eq!(traces[1].to_string(), "9^3 -> 729.0");
///
/// // A space is not part of the language.
/// let err = get_result("8 + 6", false).unwrap_err();
/// assert_eq!(err.statement(), 1);
/// ```
pub fn get_result(source: &str, auto_print: bool) -> Result<Vec<Trace>, Error> {
    Program::new(source).execute(auto_print, true).into_iter().collect()
}

/// Transpiles `source` to Python.
///
/// # Examples
/// ```
/// use turquoise::transpile;
///
/// let result = transpile("8+6", true);
/// assert_eq!(result.text, "print(8.0 + 6.0)");
/// assert_eq!(result.unconvertible, 0);
/// ```
#[must_use]
pub fn transpile(source: &str, auto_print: bool) -> Transpilation {
    Program::new(source).transpile(auto_print)
}
