use logos::Logos;
use tracing::trace;

use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, operator::Operator},
};

/// A classified fragment of an expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A decimal literal such as `42`, `11.5`, `.5` or `-3`.
    Number(f64),
    /// One of `+ - * /`.
    Operator(Operator),
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::OpenParen => write!(f, "("),
            Self::CloseParen => write!(f, ")"),
        }
    }
}

/// Raw lexemes recognized inside a single whitespace-free fragment.
///
/// A leading `-` glued to digits is part of the number, so `-5` is a negative
/// literal while `- 5` is an operator followed by a number.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
enum Lexeme {
    /// Numeric literals such as `3`, `3.`, `3.14`, `.5`, `2e10` or `-1.5E-3`.
    #[regex(r"-?[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"-?\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl From<Lexeme> for Token {
    fn from(lexeme: Lexeme) -> Self {
        match lexeme {
            Lexeme::Number(n) => Self::Number(n),
            Lexeme::Plus => Self::Operator(Operator::Add),
            Lexeme::Minus => Self::Operator(Operator::Sub),
            Lexeme::Star => Self::Operator(Operator::Mul),
            Lexeme::Slash => Self::Operator(Operator::Div),
            Lexeme::LParen => Self::OpenParen,
            Lexeme::RParen => Self::CloseParen,
        }
    }
}

/// Parses a numeric literal from the current lexeme slice.
///
/// Literals that overflow to infinity are rejected so that every number token
/// is finite.
fn parse_number(lex: &mut logos::Lexer<Lexeme>) -> Option<f64> {
    lex.slice().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Splits `source` on runs of whitespace.
///
/// Each fragment is paired with the 1-based column (in characters) where it
/// starts.
fn fragments(source: &str) -> Vec<(&str, usize)> {
    let mut out = Vec::new();
    let mut start: Option<(usize, usize)> = None;

    for (column, (byte, c)) in source.char_indices().enumerate() {
        match (c.is_whitespace(), start) {
            (false, None) => start = Some((byte, column + 1)),
            (true, Some((from, col))) => {
                out.push((&source[from..byte], col));
                start = None;
            },
            _ => {},
        }
    }
    if let Some((from, col)) = start {
        out.push((&source[from..], col));
    }

    out
}

/// Classifies one fragment. The fragment must lex as exactly one lexeme.
fn classify(fragment: &str, column: usize) -> EvalResult<Token> {
    let mut lexer = Lexeme::lexer(fragment);

    match lexer.next() {
        Some(Ok(lexeme)) if lexer.span() == (0..fragment.len()) => Ok(lexeme.into()),
        _ => Err(EvalError::MalformedToken { fragment: fragment.to_string(),
                                             column }),
    }
}

/// Turns an expression into its ordered token sequence.
///
/// The input is split on whitespace first and every fragment must be a whole
/// token, so `1+1` is rejected while `1 + 1` is accepted. Operator adjacency is
/// not checked here.
///
/// # Errors
/// Returns [`EvalError::MalformedToken`] for the first fragment that is not a
/// number, operator or parenthesis.
///
/// # Example
/// ```
/// use stackcalc::interpreter::{
///     lexer::{Token, tokenize},
///     operator::Operator,
/// };
///
/// let tokens = tokenize("  ( 1.5 * -2 )").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::OpenParen, 3),
///                 (Token::Number(1.5), 5),
///                 (Token::Operator(Operator::Mul), 9),
///                 (Token::Number(-2.0), 11),
///                 (Token::CloseParen, 14)]);
///
/// assert!(tokenize("1 + x").is_err());
/// ```
pub fn tokenize(source: &str) -> EvalResult<Vec<(Token, usize)>> {
    fragments(source).into_iter()
                     .map(|(fragment, column)| {
                         let token = classify(fragment, column)?;
                         trace!(%token, column, "token");
                         Ok((token, column))
                     })
                     .collect()
}
