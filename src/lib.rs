//! # stepwise
//!
//! stepwise evaluates flat arithmetic expressions and shows its work. Besides
//! the value it returns every operator application in the order it was
//! performed and a snapshot of the token sequence after each precedence pass.
//!
//! Supported operators, from tightest to loosest binding:
//! - `?` - square root, written before its operand (`?9`)
//! - `*`, `/`, `%` - multiplication, division, remainder
//! - `+`, `-` - addition and subtraction, which also chain as signs (`3*--4`)

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

use std::{fs, path::Path};

use crate::{
    error::{EvalError, EvalResult},
    interpreter::{evaluator::Evaluator, trace::Evaluation},
};

/// Provides the error type shared by every evaluation stage.
///
/// This module defines all failures that can be raised while tokenizing or
/// reducing an expression. Each failure carries a machine-readable kind and
/// renders a message fit for showing to the user.
///
/// # Responsibilities
/// - Defines one error variant per failure mode.
/// - Attaches the offending symbol or literal and its token span.
/// - Maps every variant to an `ErrorKind` for programmatic handling.
pub mod error;
/// Orchestrates tokenizing, reduction and result assembly.
///
/// This module ties together the lexer, the operator table, the reducer and
/// the trace types to evaluate an expression while recording every step.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, operators, reducer and trace.
/// - Provides the `Evaluator` entry point.
/// - Manages the flow of tokens and errors between passes.
pub mod interpreter;
/// JSON envelope for transports that report outcomes to a client.
pub mod report;

/// Evaluates `expression` with the shared operator registry.
///
/// # Errors
/// Returns an error if the expression is empty, contains a malformed number
/// or an unknown operator, cannot be fully reduced, or evaluates to NaN.
///
/// # Examples
/// ```
/// use stepwise::{error::ErrorKind, evaluate};
///
/// let evaluation = evaluate("3+-5").unwrap();
/// assert_eq!(evaluation.value, -2.0);
///
/// let error = evaluate("3~4").unwrap_err();
/// assert_eq!(error.kind(), ErrorKind::UnknownOperator);
/// ```
pub fn evaluate(expression: &str) -> EvalResult<Evaluation> {
    Evaluator::default().evaluate(expression)
}

/// Reads an expression from the file at `path` and evaluates it.
///
/// Line breaks are whitespace like any other, so an expression may be split
/// across lines.
///
/// # Errors
/// Returns [`EvalError::UnreadableInput`] if the file cannot be read, and
/// otherwise the same errors as [`evaluate`].
pub fn evaluate_file(path: impl AsRef<Path>) -> EvalResult<Evaluation> {
    let path = path.as_ref();
    let expression = fs::read_to_string(path).map_err(|e| {
                                                  EvalError::UnreadableInput { path:   path.display().to_string(),
                                                                               reason: e.to_string(), }
                                              })?;
    evaluate(&expression)
}
