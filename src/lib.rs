//! # calcapi
//!
//! calcapi evaluates textual arithmetic expressions written with digits,
//! decimal points, `+ - * /`, parentheses, unary minus and spaces. It returns
//! either the value as an `f64` or an error describing exactly why the
//! expression is malformed.

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

use tracing::debug;

use crate::{
    calculator::{evaluator::core::evaluate, tokenizer::tokenize_and_validate},
    error::CalcError,
};

/// Request and response payloads for the calculation endpoint.
///
/// This module describes what crosses the transport boundary: the JSON
/// request body carrying an expression, and the JSON bodies and status codes
/// returned for results, calculation errors and malformed requests.
///
/// # Responsibilities
/// - Decodes `{ "expression": ... }` request bodies.
/// - Maps every outcome to a status and an encoded response body.
pub mod api;
/// The expression evaluation engine.
///
/// This module ties together the lexer, the tokenizer/validator and the
/// evaluator. Raw text goes in, a flat token sequence is produced and checked,
/// and the sequence is folded into a single number.
///
/// # Responsibilities
/// - Classifies characters and rejects structurally invalid input.
/// - Resolves unary minus and parses numeric literals.
/// - Evaluates parentheses first, then `*`/`/`, then `+`/`-`.
pub mod calculator;
/// Provides unified error types for tokenizing and evaluation.
///
/// This module defines all errors that can be raised while validating or
/// evaluating an expression. Each error carries the offending character,
/// literal or pair of symbols so that a precise message can be rendered.
///
/// # Responsibilities
/// - Defines error enums for both phases (tokenizer, evaluator).
/// - Wraps them in a single `CalcError` returned by [`calc`].
pub mod error;

/// Evaluates an arithmetic expression.
///
/// The expression is tokenized and validated, then evaluated. Every call is
/// independent and keeps no state, so it can be used from any number of
/// threads at once.
///
/// # Errors
/// Returns a [`CalcError::Parse`] if the expression is malformed, or a
/// [`CalcError::Runtime`] if it cannot be evaluated, such as on division by
/// zero.
///
/// # Examples
/// ```
/// use calcapi::calc;
///
/// assert_eq!(calc("1+4*(5/4+4*2/1)").unwrap(), 38.0);
/// assert_eq!(calc("-5/2").unwrap(), -2.5);
///
/// // Trailing operator.
/// assert!(calc("2+5/").is_err());
/// ```
pub fn calc(expression: &str) -> Result<f64, CalcError> {
    let tokens = tokenize_and_validate(expression)?;
    let result = evaluate(&tokens)?;

    debug!(expression, result, "evaluated expression");
    Ok(result)
}
