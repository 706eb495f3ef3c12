//! # stackcalc
//!
//! stackcalc evaluates whitespace-separated infix arithmetic expressions such
//! as `2 * ( 5 * ( 1 + 2 ) )`. It supports decimal numbers, the binary
//! operators `+ - * /` with the usual precedence and left associativity, and
//! arbitrarily nested parentheses.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::interpreter::{
    evaluator::core::{EvalResult, Evaluator, check_length},
    lexer::tokenize,
};

/// Provides the error type for tokenizing and evaluation.
///
/// This module defines every failure that can be raised while turning an
/// expression string into a number, each carrying enough detail (offending
/// fragment, column) for a caller to point the user at the problem.
///
/// # Responsibilities
/// - Defines the error enum for all failure modes.
/// - Implements `Display` and `std::error::Error`.
pub mod error;
/// Orchestrates tokenizing and evaluation.
///
/// This module ties together the lexer, the precedence table and the
/// two-stack evaluator.
pub mod interpreter;

pub use crate::{
    error::EvalError,
    interpreter::evaluator::core::{DivisionPolicy, Options},
};

/// Evaluates an expression with the default [`Options`].
///
/// Tokens must be separated by whitespace. Division by zero follows IEEE-754
/// and yields an infinity or NaN; use [`evaluate_with`] to reject it instead.
///
/// # Errors
/// Returns an [`EvalError`] if the expression is too short, contains a
/// fragment that is not a token, or does not reduce to a single value.
///
/// # Examples
/// ```
/// use stackcalc::evaluate;
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(evaluate("( 2 + 3 ) * 4").unwrap(), 20.0);
/// assert_eq!(evaluate("8 - 4 - 2").unwrap(), 2.0);
///
/// // Missing operand.
/// assert!(evaluate("1 + + 2").is_err());
/// ```
pub fn evaluate(expression: &str) -> EvalResult<f64> {
    evaluate_with(expression, Options::default())
}

/// Evaluates an expression with the given options.
///
/// # Errors
/// Same as [`evaluate`], plus [`EvalError::DivisionByZero`] when
/// `options.division` is [`DivisionPolicy::Reject`].
///
/// # Examples
/// ```
/// use stackcalc::{DivisionPolicy, EvalError, Options, evaluate_with};
///
/// let strict = Options { division: DivisionPolicy::Reject };
/// assert_eq!(evaluate_with("1 / 0", strict),
///            Err(EvalError::DivisionByZero { column: 3 }));
/// assert!(evaluate_with("1 / 0", Options::default()).unwrap().is_infinite());
/// ```
pub fn evaluate_with(expression: &str, options: Options) -> EvalResult<f64> {
    let result = check_length(expression).and_then(|()| tokenize(expression))
                                         .and_then(|tokens| Evaluator::new(options).run(&tokens));

    match &result {
        Ok(value) => debug!(expression, value, "evaluated"),
        Err(error) => debug!(expression, %error, "rejected"),
    }

    result
}
