/// Evaluation errors.
///
/// Defines every failure that can occur between receiving an expression string
/// and producing its value: unclassifiable fragments, operators short of
/// operands, unbalanced parentheses, expressions that do not reduce to a single
/// value, and (under strict division) division by zero.
pub mod eval_error;

pub use eval_error::EvalError;
