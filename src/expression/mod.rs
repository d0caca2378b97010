//! Infix expression engine: tokenizer, shunting-yard converter and RPN evaluator

mod engine;
mod errors;
mod eval;
mod operators;
mod shunting_yard;
mod token;
mod tokenizer;

pub use engine::ExpressionEngine;
pub use errors::{ExpressionError, MalformedInput, RuleViolation};
pub use eval::evaluate_postfix;
pub use operators::{Associativity, Operator};
pub use shunting_yard::to_postfix;
pub use token::{Paren, Token, format_tokens};
pub use tokenizer::{DEFAULT_DECIMAL_SEPARATOR, Tokenizer};

#[cfg(test)]
mod tests;
