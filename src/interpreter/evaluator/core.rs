use tracing::trace;

use crate::{
    error::EvalError,
    interpreter::{lexer::Token, operator::Operator},
};

/// Result type used by the tokenizer and the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Length, in characters, of the shortest well-formed expression (`1 + 1`).
pub const MIN_EXPRESSION_LEN: usize = 5;

/// What to do when the right operand of `/` is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DivisionPolicy {
    /// Follow IEEE-754: `1 / 0` is infinity, `0 / 0` is NaN.
    #[default]
    Ieee,
    /// Fail with [`EvalError::DivisionByZero`].
    Reject,
}

/// Evaluation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    /// Handling of zero divisors.
    pub division: DivisionPolicy,
}

/// An entry on the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    /// An operator waiting for its right operand to be complete.
    Operator {
        /// The operator.
        op:     Operator,
        /// Column of the operator in the source.
        column: usize,
    },
    /// An unmatched `(`.
    OpenParen {
        /// Column of the parenthesis in the source.
        column: usize,
        /// Size of the operand stack when the parenthesis was opened.
        depth:  usize,
    },
}

/// Two-stack state of one evaluation.
///
/// An `Evaluator` is created per expression and consumed by [`finish`]; it
/// shares nothing with other evaluations.
///
/// ## Usage
///
/// Most callers go through [`crate::evaluate`]. Driving the evaluator by hand
/// is useful when tokens come from somewhere else:
///
/// ```
/// use stackcalc::interpreter::{
///     evaluator::core::{Evaluator, Options},
///     lexer::Token,
///     operator::Operator,
/// };
///
/// let mut evaluator = Evaluator::new(Options::default());
/// evaluator.push_token(Token::Number(2.0), 1).unwrap();
/// evaluator.push_token(Token::Operator(Operator::Add), 3).unwrap();
/// evaluator.push_token(Token::Number(3.0), 5).unwrap();
/// evaluator.push_token(Token::Operator(Operator::Mul), 7).unwrap();
/// evaluator.push_token(Token::Number(4.0), 9).unwrap();
/// assert_eq!(evaluator.finish().unwrap(), 14.0);
/// ```
///
/// [`finish`]: Evaluator::finish
#[derive(Debug, Default)]
pub struct Evaluator {
    /// Values waiting to be combined.
    pub operands:  Vec<f64>,
    /// Operators and open parentheses waiting to be reduced.
    pub operators: Vec<Pending>,
    pub options:   Options,
}

impl Evaluator {
    /// Creates an evaluator with empty stacks.
    #[must_use]
    pub const fn new(options: Options) -> Self {
        Self { operands: Vec::new(),
               operators: Vec::new(),
               options }
    }

    /// Feeds one token to the evaluator.
    ///
    /// # Parameters
    /// - `token`: The token to consume.
    /// - `column`: Where the token starts, for error reporting.
    ///
    /// # Errors
    /// Fails when a reduction triggered by this token finds too few operands,
    /// when a `)` has no matching `(`, or when a group is empty.
    pub fn push_token(&mut self, token: Token, column: usize) -> EvalResult<()> {
        match token {
            Token::Number(value) => {
                self.operands.push(value);
                Ok(())
            },
            Token::OpenParen => {
                self.operators.push(Pending::OpenParen { column,
                                                         depth: self.operands.len() });
                Ok(())
            },
            Token::Operator(op) => self.push_operator(op, column),
            Token::CloseParen => self.close_group(column),
        }
    }

    /// Reduces everything left on the operator stack and returns the sole
    /// remaining operand.
    ///
    /// # Errors
    /// - [`EvalError::UnbalancedParentheses`] if a `(` was never closed.
    /// - [`EvalError::InsufficientOperands`] if a pending operator lacks an
    ///   operand.
    /// - [`EvalError::MalformedExpression`] if the operand stack does not end
    ///   with exactly one value.
    pub fn finish(mut self) -> EvalResult<f64> {
        while let Some(&top) = self.operators.last() {
            match top {
                Pending::Operator { .. } => self.reduce_top()?,
                Pending::OpenParen { column, .. } => {
                    return Err(EvalError::UnbalancedParentheses { column });
                },
            }
        }

        match self.operands.as_slice() {
            [value] => Ok(*value),
            [] => Err(EvalError::MalformedExpression { details: "no value to compute".into() }),
            rest => Err(EvalError::MalformedExpression { details:
                                                             format!("{} values are not joined by an operator",
                                                                     rest.len()) }),
        }
    }

    /// Consumes a full token sequence and returns its value.
    ///
    /// # Errors
    /// Any error of [`push_token`](Self::push_token) or
    /// [`finish`](Self::finish).
    pub fn run(mut self, tokens: &[(Token, usize)]) -> EvalResult<f64> {
        for &(token, column) in tokens {
            self.push_token(token, column)?;
            trace!(%token,
                   operands = ?self.operands,
                   pending = self.operators.len(),
                   "consumed");
        }
        self.finish()
    }
}

/// Rejects input too short to hold `operand operator operand`.
///
/// Surrounding whitespace does not count.
///
/// # Errors
/// Returns [`EvalError::MalformedExpression`] for short input, including the
/// empty string.
pub fn check_length(expression: &str) -> EvalResult<()> {
    let len = expression.trim().chars().count();
    if len < MIN_EXPRESSION_LEN {
        return Err(EvalError::MalformedExpression { details:
                                                        format!("'{}' is shorter than the smallest valid expression",
                                                                expression.trim()) });
    }
    Ok(())
}
