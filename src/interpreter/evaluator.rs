/// Evaluator state, settings and the result type.
///
/// Contains the two-stack [`core::Evaluator`], the [`core::Options`] that
/// steer it, and the length pre-check applied before tokenizing.
pub mod core;

/// Reduction rules.
///
/// Implements what happens on an incoming operator, on a closing parenthesis,
/// and when a single operator is applied to the top two operands.
pub mod reduce;
