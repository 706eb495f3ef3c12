use stackcalc::{
    DivisionPolicy, EvalError, Options, evaluate, evaluate_with,
    interpreter::{
        lexer::{Token, tokenize},
        operator::Operator,
    },
};

const TOLERANCE: f64 = 1e-9;

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert!((value - expected).abs() < TOLERANCE,
                             "'{src}' gave {value}, expected {expected}"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_kind(src: &str, kind: &str) {
    match evaluate(src) {
        Ok(value) => panic!("'{src}' gave {value} but was expected to fail with {kind}"),
        Err(e) => assert_eq!(e.kind(), kind, "'{src}' failed with the wrong error: {e}"),
    }
}

#[test]
fn single_operator_matches_direct_application() {
    let operands = [(7.0, 2.0), (0.5, 4.0), (-3.0, 1.5), (100.0, 0.25)];
    for op in [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div] {
        for (a, b) in operands {
            let src = format!("{a} {op} {b}");
            assert_eq!(evaluate(&src), Ok(op.apply(a, b)), "{src}");
        }
    }
}

#[test]
fn precedence() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("2 * 3 + 4", 10.0);
    assert_value("10 - 6 / 2", 7.0);
    assert_value("1 + 2 * 3 - 4 / 2", 5.0);
}

#[test]
fn left_associativity() {
    assert_value("8 - 4 - 2", 2.0);
    assert_value("8 / 4 / 2", 1.0);
    assert_value("2 * 6 / 3", 4.0);
    assert_value("10 - 2 + 3", 11.0);
}

#[test]
fn parentheses_override_precedence() {
    assert_value("( 2 + 3 ) * 4", 20.0);
    assert_value("2 * ( 5 * ( 1 + 2 ) )", 30.0);
    assert_value("8 - ( 4 - 2 )", 6.0);
    assert_value("( ( 1 + 2 ) * ( 3 + 4 ) ) / 7", 3.0);
}

#[test]
fn decimals_round_trip() {
    assert_value("( 1 / 2 ) - 1 + 1", 0.5);
    assert_value("23 - ( 29.3 - 12.5 )", 6.2);
    assert_value(".5 + 1.", 1.5);
    assert_value("1e3 + 2.5E-1", 1000.25);
}

#[test]
fn whitespace_is_flexible() {
    assert_value("   1 +\t2   ", 3.0);
    assert_value("1\n*\n( 2 + 2 )", 4.0);
}

#[test]
fn negative_literals() {
    assert_value("-5 + 2", -3.0);
    assert_value("2 - -5", 7.0);
    assert_value("-.5 * -4", 2.0);
    // A detached minus is an operator, not a sign.
    assert_kind("- 5 + 2", "insufficient-operands");
}

#[test]
fn evaluation_is_repeatable() {
    let src = "( 1 + 6 ) - ( ( 1 / 2 ) * 3 )";
    let first = evaluate(src);
    for _ in 0..10 {
        assert_eq!(evaluate(src), first);
    }
}

#[test]
fn short_input_is_rejected_early() {
    for src in ["", "   ", "+", "1 +", "1 1", "42"] {
        assert_kind(src, "malformed-expression");
    }
}

#[test]
fn unbalanced_parentheses() {
    assert_eq!(evaluate("( 1 + 2"), Err(EvalError::UnbalancedParentheses { column: 1 }));
    assert_eq!(evaluate("1 + 2 )"), Err(EvalError::UnbalancedParentheses { column: 7 }));
    assert_kind("( ( 1 + 2 )", "unbalanced-parentheses");
    assert_kind(") 1 + 2 (", "unbalanced-parentheses");
}

#[test]
fn missing_operands() {
    assert_eq!(evaluate("1 + + 2"),
               Err(EvalError::InsufficientOperands { symbol: '+',
                                                     column: 3, }));
    assert_eq!(evaluate("( ) + 1"),
               Err(EvalError::InsufficientOperands { symbol: ')',
                                                     column: 3, }));
    assert_eq!(evaluate("1 + ( * 2 )"),
               Err(EvalError::InsufficientOperands { symbol: '*',
                                                     column: 7, }));
    assert_kind("1 + 2 *", "insufficient-operands");
}

#[test]
fn leftover_values() {
    assert_kind("1 + 1 1", "malformed-expression");
    assert_kind("( 1 2 ) + 3", "malformed-expression");
    assert_kind("( 1 ) ( 2 )", "malformed-expression");
}

#[test]
fn malformed_tokens_report_fragment_and_column() {
    assert_eq!(evaluate("1 + two"),
               Err(EvalError::MalformedToken { fragment: "two".into(),
                                               column:   5, }));
    assert_eq!(evaluate("1+1 + 2"),
               Err(EvalError::MalformedToken { fragment: "1+1".into(),
                                               column:   1, }));
    for src in ["1 ^ 2", "1,5 + 2", "inf + 1", "NaN + 1", "1 + 1e999", "(1 + 2)"] {
        assert_kind(src, "malformed-token");
    }
}

#[test]
fn division_by_zero_follows_policy() {
    let ieee = evaluate("1 / 0").unwrap();
    assert!(ieee.is_infinite() && ieee.is_sign_positive());
    assert!(evaluate("0 / 0").unwrap().is_nan());
    assert_eq!(evaluate("-1 / 0"), Ok(f64::NEG_INFINITY));

    let strict = Options { division: DivisionPolicy::Reject };
    assert_eq!(evaluate_with("4 / ( 2 - 2 )", strict),
               Err(EvalError::DivisionByZero { column: 3 }));
    assert_eq!(evaluate_with("4 / ( 2 - 1 )", strict), Ok(4.0));
}

#[test]
fn tokenizer_classifies_fragments() {
    let tokens: Vec<Token> = tokenize("( 1 - 2.5 ) / -3").unwrap()
                                                          .into_iter()
                                                          .map(|(token, _)| token)
                                                          .collect();
    assert_eq!(tokens,
               vec![Token::OpenParen,
                    Token::Number(1.0),
                    Token::Operator(Operator::Sub),
                    Token::Number(2.5),
                    Token::CloseParen,
                    Token::Operator(Operator::Div),
                    Token::Number(-3.0)]);

    // Adjacent operators are only caught by the evaluator.
    assert!(tokenize("1 + + 2").is_ok());
    assert!(tokenize("").unwrap().is_empty());
}

#[test]
fn error_messages_point_at_the_problem() {
    let message = evaluate("1 + x").unwrap_err().to_string();
    assert!(message.contains("column 5"), "{message}");
    assert!(message.contains("'x'"), "{message}");

    assert_eq!(evaluate("( 1 + 2").unwrap_err().column(), Some(1));
    assert_eq!(evaluate("").unwrap_err().column(), None);

    let message = evaluate("( ) + 1").unwrap_err().to_string();
    assert!(message.contains("Empty parentheses"), "{message}");
}
