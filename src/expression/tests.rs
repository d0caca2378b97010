use pretty_assertions::assert_eq;

use crate::expression::{
    Associativity, ExpressionEngine, ExpressionError, MalformedInput, Operator, Paren,
    RuleViolation, Token, Tokenizer, evaluate_postfix, format_tokens, to_postfix,
};

fn eval(expression: &str) -> Result<f64, ExpressionError> {
    ExpressionEngine::new().evaluate(expression)
}

fn postfix(expression: &str) -> String {
    match ExpressionEngine::new().to_postfix(expression) {
        Ok(tokens) => format_tokens(&tokens),
        Err(e) => format!("error: {}", e),
    }
}

#[test]
fn test_operator_catalog() {
    assert_eq!(Operator::UnaryMinus.precedence(), 6);
    assert_eq!(Operator::UnaryPlus.precedence(), 6);
    assert_eq!(Operator::Mul.precedence(), 4);
    assert_eq!(Operator::Div.precedence(), 4);
    assert_eq!(Operator::Add.precedence(), 2);
    assert_eq!(Operator::Sub.precedence(), 2);

    for op in Operator::BINARY {
        assert_eq!(op.arity(), 2);
        assert_eq!(op.associativity(), Associativity::Left);
    }
    assert_eq!(Operator::UnaryMinus.arity(), 1);
    assert_eq!(Operator::from_symbol('-', true), Some(Operator::UnaryMinus));
    assert_eq!(Operator::from_symbol('-', false), Some(Operator::Sub));
    assert_eq!(Operator::from_symbol('^', false), None);
}

#[test]
fn test_tokenize_binary_expression() {
    let tokens = Tokenizer::default().tokenize("4 + 8 * 15");
    assert_eq!(
        tokens,
        Ok(vec![
            Token::Number(4.0),
            Token::Operator(Operator::Add),
            Token::Number(8.0),
            Token::Operator(Operator::Mul),
            Token::Number(15.0),
        ])
    );
}

#[test]
fn test_tokenize_unary_by_position() {
    let tokens = Tokenizer::default().tokenize("-3 - (+2)");
    assert_eq!(
        tokens,
        Ok(vec![
            Token::Operator(Operator::UnaryMinus),
            Token::Number(3.0),
            Token::Operator(Operator::Sub),
            Token::Paren(Paren::Open),
            Token::Operator(Operator::UnaryPlus),
            Token::Number(2.0),
            Token::Paren(Paren::Close),
        ])
    );
}

#[test]
fn test_tokenize_fractional_literals() {
    assert_eq!(
        Tokenizer::default().tokenize("1.5+.25"),
        Ok(vec![
            Token::Number(1.5),
            Token::Operator(Operator::Add),
            Token::Number(0.25),
        ])
    );
    assert_eq!(
        Tokenizer::new(',').tokenize("2,5"),
        Ok(vec![Token::Number(2.5)])
    );
}

#[test]
fn test_tokenize_errors() {
    let tokenizer = Tokenizer::default();
    assert_eq!(tokenizer.tokenize(""), Err(MalformedInput::EmptyExpression));
    assert_eq!(tokenizer.tokenize("   "), Err(MalformedInput::EmptyExpression));
    assert_eq!(
        tokenizer.tokenize("2 & 3"),
        Err(MalformedInput::UnknownToken {
            character: '&',
            position: 2
        })
    );
    assert_eq!(
        tokenizer.tokenize("(1 + 2"),
        Err(MalformedInput::UnbalancedParentheses)
    );
    assert_eq!(
        tokenizer.tokenize("."),
        Err(MalformedInput::InvalidNumber(".".to_string()))
    );
}

#[test]
fn test_postfix_order() {
    assert_eq!(postfix("2 + 3 * 4"), "2 3 4 * +");
    assert_eq!(postfix("2 * 3 + 4"), "2 3 * 4 +");
    assert_eq!(postfix("8 - 3 - 2"), "8 3 - 2 -");
    assert_eq!(postfix("(8 - 3) * 2"), "8 3 - 2 *");
    assert_eq!(postfix("-3 + 5"), "3 u- 5 +");
}

#[test]
fn test_postfix_unmatched_parentheses() {
    let tokens = vec![
        Token::Paren(Paren::Close),
        Token::Number(1.0),
        Token::Paren(Paren::Open),
    ];
    assert_eq!(
        to_postfix(&tokens),
        Err(MalformedInput::UnmatchedClosingParenthesis)
    );

    let tokens = vec![Token::Paren(Paren::Open), Token::Number(1.0)];
    assert_eq!(
        to_postfix(&tokens),
        Err(MalformedInput::UnmatchedOpeningParenthesis)
    );

    // Passes the balance pre-pass but is ordered wrong
    assert_eq!(
        eval(")1 + 2("),
        Err(ExpressionError::Malformed(
            MalformedInput::UnmatchedClosingParenthesis
        ))
    );
}

#[test]
fn test_evaluate_precedence_and_associativity() {
    assert_eq!(eval("2 + 3 * 4"), Ok(14.0));
    assert_eq!(eval("2 * 3 + 4"), Ok(10.0));
    assert_eq!(eval("8 - 3 - 2"), Ok(3.0));
    assert_eq!(eval("12 / 2 / 3"), Ok(2.0));
    assert_eq!(eval("8 * 15 + 20 - 11 + 4"), Ok(133.0));
    assert_eq!(eval("(8 - 5) * 2"), Ok(6.0));
}

#[test]
fn test_evaluate_unary_signs() {
    assert_eq!(eval("-3 + 5"), Ok(2.0));
    assert_eq!(eval("+7"), Ok(7.0));
    assert_eq!(eval("(-2 + 5) * 3"), Ok(9.0));
    assert_eq!(eval("2 * (-3)"), Ok(-6.0));
}

#[test]
fn test_sign_after_operator_is_binary() {
    assert_eq!(
        eval("2 * -3"),
        Err(ExpressionError::Malformed(MalformedInput::MissingOperand))
    );
}

#[test]
fn test_evaluate_fractional_literals() {
    assert_eq!(eval("1.5 + 2.5"), Ok(4.0));
    assert_eq!(
        ExpressionEngine::with_decimal_separator(',').evaluate("1,5 * 2"),
        Ok(3.0)
    );
}

#[test]
fn test_negative_step_rejected() {
    assert_eq!(
        eval("5 - 8"),
        Err(ExpressionError::RuleViolation(RuleViolation::Negative {
            left: 5.0,
            right: 8.0
        }))
    );
    // The final value would be 7, but the first step already went negative
    assert_eq!(
        eval("5 - 8 + 10"),
        Err(ExpressionError::RuleViolation(RuleViolation::Negative {
            left: 5.0,
            right: 8.0
        }))
    );
}

#[test]
fn test_fractional_step_rejected() {
    assert_eq!(
        eval("7 / 2"),
        Err(ExpressionError::RuleViolation(RuleViolation::Fractional {
            left: 7.0,
            right: 2.0
        }))
    );
    assert_eq!(
        eval("7 / 2 * 2"),
        Err(ExpressionError::RuleViolation(RuleViolation::Fractional {
            left: 7.0,
            right: 2.0
        }))
    );
    assert_eq!(eval("8 / 2"), Ok(4.0));
}

#[test]
fn test_division_by_zero_rejected() {
    assert_eq!(eval("8 / 0"), Err(ExpressionError::DivisionByZero));
    assert_eq!(eval("8 / (4 - 4)"), Err(ExpressionError::DivisionByZero));
    assert!(!ExpressionError::DivisionByZero.is_rule_violation());
}

#[test]
fn test_values_beyond_exact_range_rejected() {
    assert_eq!(eval("9007199254740992 + 0"), Ok(9_007_199_254_740_992.0));
    assert!(matches!(
        eval("4294967296 * 4294967296"),
        Err(ExpressionError::OutOfRange { .. })
    ));
    assert!(matches!(
        eval("9007199254740992 + 2 - 2"),
        Err(ExpressionError::OutOfRange { .. })
    ));
    assert!(matches!(
        eval("18014398509481984"),
        Err(ExpressionError::OutOfRange { .. })
    ));
}

#[test]
fn test_evaluate_malformed_stacks() {
    assert_eq!(
        eval("1 2"),
        Err(ExpressionError::Malformed(MalformedInput::ExcessOperand {
            count: 2
        }))
    );
    assert_eq!(
        eval("1 +"),
        Err(ExpressionError::Malformed(MalformedInput::MissingOperand))
    );
    assert_eq!(
        evaluate_postfix(&[]),
        Err(ExpressionError::Malformed(MalformedInput::EmptyExpression))
    );
}

#[test]
fn test_engine_matches_direct_arithmetic() {
    let cases = [
        ("4 + 8 * 5", 4 + 8 * 5),
        ("20 / 5 * 3 + 1", 20 / 5 * 3 + 1),
        ("15 - 11 + 8 * 4", 15 - 11 + 8 * 4),
        ("11 * 20 - 15 * 4 / 5", 11 * 20 - 15 * 4 / 5),
        ("20 - 15 - 4 + 5 * 11", 20 - 15 - 4 + 5 * 11),
    ];

    for (expression, expected) in cases {
        assert_eq!(eval(expression), Ok(f64::from(expected)), "{}", expression);
    }
}
