use log::trace;

use crate::expression::errors::MalformedInput;
use crate::expression::operators::Operator;
use crate::expression::token::{Paren, Token, format_tokens};

pub const DEFAULT_DECIMAL_SEPARATOR: char = '.';

/// Splits an infix string into numbers, operators and parentheses.
///
/// `+` and `-` are unary when they open the expression or follow `(`,
/// binary everywhere else. Whitespace is ignored.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer {
    decimal_separator: char,
}

impl Tokenizer {
    pub fn new(decimal_separator: char) -> Self {
        Self { decimal_separator }
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    /// # Errors
    ///
    /// Returns [`MalformedInput`] when the string is blank, parentheses are
    /// unbalanced, a character is not part of the grammar, or a number
    /// literal cannot be parsed.
    pub fn tokenize(&self, input: &str) -> Result<Vec<Token>, MalformedInput> {
        check_balance(input)?;

        let chars: Vec<char> = input.chars().collect();
        let mut tokens = Vec::new();
        let mut pos = 0;

        while let Some(&c) = chars.get(pos) {
            if c.is_whitespace() {
                pos += 1;
                continue;
            }

            match c {
                '(' => {
                    tokens.push(Token::Paren(Paren::Open));
                    pos += 1;
                }
                ')' => {
                    tokens.push(Token::Paren(Paren::Close));
                    pos += 1;
                }
                '+' | '-' | '*' | '/' => {
                    let unary_position =
                        matches!(tokens.last(), None | Some(Token::Paren(Paren::Open)));
                    let op = Operator::from_symbol(c, unary_position).ok_or(
                        MalformedInput::UnknownToken {
                            character: c,
                            position: pos,
                        },
                    )?;
                    tokens.push(Token::Operator(op));
                    pos += 1;
                }
                _ if c.is_ascii_digit() || c == self.decimal_separator => {
                    let (value, next) = self.read_number(&chars, pos)?;
                    tokens.push(Token::Number(value));
                    pos = next;
                }
                _ => {
                    return Err(MalformedInput::UnknownToken {
                        character: c,
                        position: pos,
                    });
                }
            }
        }

        if tokens.is_empty() {
            return Err(MalformedInput::EmptyExpression);
        }

        trace!("Tokenized '{}' into [{}]", input, format_tokens(&tokens));
        Ok(tokens)
    }

    /// Greedy read of `digits [separator digits]` starting at `start`
    fn read_number(&self, chars: &[char], start: usize) -> Result<(f64, usize), MalformedInput> {
        let mut literal = String::new();
        let mut pos = start;

        while let Some(&c) = chars.get(pos).filter(|c| c.is_ascii_digit()) {
            literal.push(c);
            pos += 1;
        }

        if chars.get(pos) == Some(&self.decimal_separator) {
            literal.push('.');
            pos += 1;
            while let Some(&c) = chars.get(pos).filter(|c| c.is_ascii_digit()) {
                literal.push(c);
                pos += 1;
            }
        }

        let value = literal
            .parse::<f64>()
            .map_err(|_| MalformedInput::InvalidNumber(literal.clone()))?;
        Ok((value, pos))
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(DEFAULT_DECIMAL_SEPARATOR)
    }
}

/// Single pass over the raw string comparing opening and closing counts
fn check_balance(input: &str) -> Result<(), MalformedInput> {
    let balance = input.chars().fold(0_i64, |balance, c| match c {
        '(' => balance + 1,
        ')' => balance - 1,
        _ => balance,
    });

    if balance != 0 {
        return Err(MalformedInput::UnbalancedParentheses);
    }
    Ok(())
}
