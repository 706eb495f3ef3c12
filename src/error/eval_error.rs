#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing or evaluating an
/// expression.
///
/// Every variant that points at a specific fragment of the input carries the
/// 1-based column where that fragment starts.
pub enum EvalError {
    /// A whitespace-separated fragment is neither a number, an operator, nor
    /// a parenthesis.
    MalformedToken {
        /// The offending fragment, exactly as written.
        fragment: String,
        /// The column where the fragment starts.
        column:   usize,
    },
    /// An operator was applied with fewer than two operands available.
    ///
    /// Also raised for an empty group `( )`, in which case `symbol` is `)`.
    InsufficientOperands {
        /// The operator (or closing parenthesis) that found too few operands.
        symbol: char,
        /// The column of that operator.
        column: usize,
    },
    /// A closing parenthesis has no matching opening one, or an opening
    /// parenthesis is never closed.
    UnbalancedParentheses {
        /// The column of the unmatched parenthesis.
        column: usize,
    },
    /// The tokens are well formed but do not reduce to exactly one value.
    MalformedExpression {
        /// What went wrong.
        details: String,
    },
    /// A division by zero was attempted while division is strict.
    DivisionByZero {
        /// The column of the `/` operator.
        column: usize,
    },
}

impl EvalError {
    /// Returns a stable, kebab-case name for the error variant.
    ///
    /// # Examples
    /// ```
    /// use stackcalc::{error::EvalError, evaluate};
    ///
    /// let err = evaluate("1 + + 2").unwrap_err();
    /// assert_eq!(err.kind(), "insufficient-operands");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MalformedToken { .. } => "malformed-token",
            Self::InsufficientOperands { .. } => "insufficient-operands",
            Self::UnbalancedParentheses { .. } => "unbalanced-parentheses",
            Self::MalformedExpression { .. } => "malformed-expression",
            Self::DivisionByZero { .. } => "division-by-zero",
        }
    }

    /// Returns the column the error points at, if it points at one.
    #[must_use]
    pub const fn column(&self) -> Option<usize> {
        match self {
            Self::MalformedToken { column, .. }
            | Self::InsufficientOperands { column, .. }
            | Self::UnbalancedParentheses { column }
            | Self::DivisionByZero { column } => Some(*column),
            Self::MalformedExpression { .. } => None,
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedToken { fragment, column } => write!(f,
                                                                "Error at column {column}: '{fragment}' is not a number, operator or parenthesis."),
            Self::InsufficientOperands { symbol: ')', column } => {
                write!(f, "Error at column {column}: Empty parentheses.")
            },
            Self::InsufficientOperands { symbol, column } => write!(f,
                                                                    "Error at column {column}: Operator '{symbol}' is missing an operand."),
            Self::UnbalancedParentheses { column } => {
                write!(f, "Error at column {column}: Unbalanced parentheses.")
            },
            Self::MalformedExpression { details } => {
                write!(f, "Malformed expression: {details}.")
            },
            Self::DivisionByZero { column } => write!(f, "Error at column {column}: Division by zero."),
        }
    }
}

impl std::error::Error for EvalError {}
