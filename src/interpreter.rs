/// The evaluator module reduces a token sequence to a single value.
///
/// It keeps an operand stack and an operator stack and performs a single
/// left-to-right pass, resolving precedence and parentheses without building
/// a parse tree.
///
/// # Responsibilities
/// - Applies operators as soon as precedence allows.
/// - Scopes reductions to the innermost open parenthesis.
/// - Reports missing operands, unbalanced parentheses and leftover values.
pub mod evaluator;
/// The lexer module tokenizes expressions.
///
/// The input is split on whitespace and each fragment is classified as a
/// number, an operator or a parenthesis. This is the first stage of
/// evaluation.
///
/// # Responsibilities
/// - Converts the input string into tokens tagged with their column.
/// - Reports fragments that are not valid tokens.
pub mod lexer;
/// The operator module holds the precedence table.
///
/// Each of the four binary operators maps to a static spec with its symbol,
/// precedence rank and arithmetic function.
pub mod operator;
