use log::trace;

use crate::expression::errors::MalformedInput;
use crate::expression::operators::{Associativity, Operator};
use crate::expression::token::{Paren, Token, format_tokens};

/// Entries on the operator stack. `(` acts as a barrier with precedence 0.
#[derive(Debug, Clone, Copy)]
enum StackEntry {
    Operator(Operator),
    OpenParen,
}

impl StackEntry {
    fn precedence(self) -> u8 {
        match self {
            StackEntry::Operator(op) => op.precedence(),
            StackEntry::OpenParen => 0,
        }
    }
}

/// Whether the stack top must be emitted before `incoming` is pushed
fn should_pop(top: StackEntry, incoming: Operator) -> bool {
    let (top_prec, in_prec) = (top.precedence(), incoming.precedence());
    match incoming.associativity() {
        Associativity::Left => top_prec >= in_prec,
        Associativity::Right => top_prec > in_prec,
    }
}

/// Reorders infix tokens into postfix order with an explicit operator stack.
///
/// # Errors
///
/// Returns [`MalformedInput`] when a closing parenthesis has no partner on the
/// stack or an opening parenthesis is still pending at the end of input.
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, MalformedInput> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<StackEntry> = Vec::new();

    for &token in tokens {
        match token {
            Token::Number(_) => output.push(token),
            Token::Paren(Paren::Open) => stack.push(StackEntry::OpenParen),
            Token::Paren(Paren::Close) => loop {
                match stack.pop() {
                    Some(StackEntry::OpenParen) => break,
                    Some(StackEntry::Operator(op)) => output.push(Token::Operator(op)),
                    None => return Err(MalformedInput::UnmatchedClosingParenthesis),
                }
            },
            Token::Operator(incoming) => {
                while let Some(&top) = stack.last()
                    && should_pop(top, incoming)
                {
                    stack.pop();
                    if let StackEntry::Operator(op) = top {
                        output.push(Token::Operator(op));
                    }
                }
                stack.push(StackEntry::Operator(incoming));
            }
        }
    }

    while let Some(entry) = stack.pop() {
        match entry {
            StackEntry::Operator(op) => output.push(Token::Operator(op)),
            StackEntry::OpenParen => return Err(MalformedInput::UnmatchedOpeningParenthesis),
        }
    }

    trace!("Postfix: [{}]", format_tokens(&output));
    Ok(output)
}

#[cfg(test)]
mod tests_inner_helpers {
    use super::{StackEntry, should_pop};
    use crate::expression::operators::Operator;

    #[test]
    fn test_open_paren_is_a_barrier() {
        for op in Operator::BINARY {
            assert!(!should_pop(StackEntry::OpenParen, op));
        }
    }

    #[test]
    fn test_equal_precedence_pops_left_to_right() {
        assert!(should_pop(StackEntry::Operator(Operator::Sub), Operator::Add));
        assert!(should_pop(StackEntry::Operator(Operator::Div), Operator::Mul));
        assert!(!should_pop(StackEntry::Operator(Operator::Add), Operator::Mul));
    }
}
