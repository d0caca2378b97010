use log::trace;

use crate::expression::errors::ExpressionError;
use crate::expression::eval::evaluate_postfix;
use crate::expression::shunting_yard::to_postfix;
use crate::expression::token::Token;
use crate::expression::tokenizer::Tokenizer;

/// Tokenizer, shunting-yard converter and RPN evaluator chained together.
///
/// Holds configuration only; every call builds its own token buffers and
/// stacks, so one engine can be shared across worker threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpressionEngine {
    tokenizer: Tokenizer,
}

impl ExpressionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_decimal_separator(decimal_separator: char) -> Self {
        Self {
            tokenizer: Tokenizer::new(decimal_separator),
        }
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// # Errors
    ///
    /// Returns a [`MalformedInput`](crate::expression::MalformedInput) error
    /// when the expression cannot be tokenized or reordered.
    pub fn to_postfix(&self, expression: &str) -> Result<Vec<Token>, ExpressionError> {
        let tokens = self.tokenizer.tokenize(expression)?;
        Ok(to_postfix(&tokens)?)
    }

    /// Evaluate an infix expression under the no-negative, exact-division rules
    ///
    /// # Errors
    ///
    /// Returns the first malformed-input, division-by-zero or rule-violation
    /// error met while parsing or evaluating.
    pub fn evaluate(&self, expression: &str) -> Result<f64, ExpressionError> {
        let result = self
            .to_postfix(expression)
            .and_then(|postfix| evaluate_postfix(&postfix));

        match &result {
            Ok(value) => trace!("'{}' evaluated to {}", expression, value),
            Err(e) => trace!("'{}' rejected: {}", expression, e),
        }

        result
    }
}
