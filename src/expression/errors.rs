use thiserror::Error;

/// Structural problems with an expression string or token stream
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MalformedInput {
    #[error("Expression is empty")]
    EmptyExpression,
    #[error("Number of opening and closing parentheses is not equal")]
    UnbalancedParentheses,
    #[error("Unknown token '{character}' at position {position}")]
    UnknownToken { character: char, position: usize },
    #[error("Invalid number literal: '{0}'")]
    InvalidNumber(String),
    #[error("Closing parenthesis without a matching opening parenthesis")]
    UnmatchedClosingParenthesis,
    #[error("Opening parenthesis without a matching closing parenthesis")]
    UnmatchedOpeningParenthesis,
    #[error("Operator is missing an operand")]
    MissingOperand,
    #[error("Excess operand: {count} values left on the stack")]
    ExcessOperand { count: usize },
}

/// Domain rules every intermediate step must respect
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuleViolation {
    #[error("Subtraction {left} - {right} would go negative")]
    Negative { left: f64, right: f64 },
    #[error("Division {left} / {right} is not exact")]
    Fractional { left: f64, right: f64 },
}

/// Errors that can occur while parsing or evaluating an expression
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Malformed expression: {0}")]
    Malformed(#[from] MalformedInput),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Rule violation: {0}")]
    RuleViolation(#[from] RuleViolation),
    #[error("Value {value} is beyond the exact integer range of f64")]
    OutOfRange { value: f64 },
}

impl ExpressionError {
    /// True for the expected, per-candidate rejections (negative or fractional steps)
    pub fn is_rule_violation(&self) -> bool {
        matches!(self, ExpressionError::RuleViolation(_))
    }
}
