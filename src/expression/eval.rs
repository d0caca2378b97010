use log::trace;

use crate::expression::errors::{ExpressionError, MalformedInput, RuleViolation};
use crate::expression::operators::Operator;
use crate::expression::token::Token;

#[inline]
fn is_zero(value: f64) -> bool {
    value.abs() < f64::EPSILON
}

/// Past 2^53 neighbouring integers collapse and divisibility checks lie
fn check_exact(value: f64) -> Result<f64, ExpressionError> {
    if value.abs() > 2_f64.powi(53) {
        trace!("Value {} is beyond exact range", value);
        return Err(ExpressionError::OutOfRange { value });
    }
    Ok(value)
}

fn apply_unary(op: Operator, arg: f64) -> f64 {
    match op {
        Operator::UnaryMinus => -arg,
        _ => arg,
    }
}

/// Apply a binary operator, enforcing the no-negative and exact-division rules
fn apply_binary(op: Operator, left: f64, right: f64) -> Result<f64, ExpressionError> {
    match op {
        Operator::Add => Ok(left + right),
        Operator::Sub => {
            if right > left {
                trace!("Negative step rejected: {} - {}", left, right);
                return Err(RuleViolation::Negative { left, right }.into());
            }
            Ok(left - right)
        }
        Operator::Mul => Ok(left * right),
        Operator::Div => {
            if is_zero(right) {
                trace!("Division by zero rejected: {} / {}", left, right);
                return Err(ExpressionError::DivisionByZero);
            }
            if !is_zero(left % right) {
                trace!("Fractional step rejected: {} / {}", left, right);
                return Err(RuleViolation::Fractional { left, right }.into());
            }
            Ok(left / right)
        }
        Operator::UnaryPlus | Operator::UnaryMinus => Ok(apply_unary(op, right)),
    }
}

/// Evaluates a postfix token sequence with an operand stack.
///
/// Stops at the first step that breaks a rule, so a later operator can never
/// repair an earlier negative or fractional intermediate.
///
/// # Errors
///
/// - [`RuleViolation`] for a negative subtraction or an inexact division
/// - [`ExpressionError::DivisionByZero`]
/// - [`ExpressionError::OutOfRange`] for any value beyond 2^53 in magnitude
/// - [`MalformedInput`] when operands are missing or left over
pub fn evaluate_postfix(tokens: &[Token]) -> Result<f64, ExpressionError> {
    let mut stack: Vec<f64> = Vec::with_capacity(tokens.len());

    for token in tokens {
        match *token {
            Token::Number(n) => stack.push(check_exact(n)?),
            Token::Operator(op) if op.arity() == 1 => {
                let arg = stack.pop().ok_or(MalformedInput::MissingOperand)?;
                stack.push(apply_unary(op, arg));
            }
            Token::Operator(op) => {
                let right = stack.pop().ok_or(MalformedInput::MissingOperand)?;
                let left = stack.pop().ok_or(MalformedInput::MissingOperand)?;
                stack.push(check_exact(apply_binary(op, left, right)?)?);
            }
            // Postfix output never carries parentheses
            Token::Paren(_) => return Err(MalformedInput::UnmatchedOpeningParenthesis.into()),
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        [] => Err(MalformedInput::EmptyExpression.into()),
        rest => Err(MalformedInput::ExcessOperand { count: rest.len() }.into()),
    }
}

#[cfg(test)]
mod tests_inner_helpers {
    use super::{apply_binary, check_exact, is_zero};
    use crate::expression::errors::{ExpressionError, RuleViolation};
    use crate::expression::operators::Operator;

    #[test]
    fn test_is_zero() {
        assert!(is_zero(0.0));
        assert!(is_zero(-0.0));
        assert!(!is_zero(1.0));
    }

    #[test]
    fn test_check_exact() {
        assert_eq!(check_exact(2_f64.powi(53)), Ok(2_f64.powi(53)));
        assert_eq!(check_exact(-2_f64.powi(53)), Ok(-2_f64.powi(53)));
        assert_eq!(
            check_exact(2_f64.powi(64)),
            Err(ExpressionError::OutOfRange {
                value: 2_f64.powi(64)
            })
        );
    }

    #[test]
    fn test_apply_binary_rules() {
        assert_eq!(apply_binary(Operator::Sub, 8.0, 8.0), Ok(0.0));
        assert_eq!(
            apply_binary(Operator::Sub, 5.0, 8.0),
            Err(ExpressionError::RuleViolation(RuleViolation::Negative {
                left: 5.0,
                right: 8.0
            }))
        );
        assert_eq!(apply_binary(Operator::Div, 8.0, 4.0), Ok(2.0));
        assert_eq!(
            apply_binary(Operator::Div, 8.0, 0.0),
            Err(ExpressionError::DivisionByZero)
        );
        assert!(
            apply_binary(Operator::Div, 7.0, 2.0)
                .err()
                .is_some_and(|e| e.is_rule_violation())
        );
    }
}
