use std::fmt;

use crate::expression::operators::Operator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paren {
    Open,
    Close,
}

/// A lexical unit of an infix or postfix expression
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(Operator),
    Paren(Paren),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            // Unary signs get a marker so postfix dumps stay unambiguous
            Token::Operator(op) if op.is_unary() => write!(f, "u{}", op),
            Token::Operator(op) => write!(f, "{}", op),
            Token::Paren(Paren::Open) => write!(f, "("),
            Token::Paren(Paren::Close) => write!(f, ")"),
        }
    }
}

/// Space-separated rendering of a token sequence, used in trace logs
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
