//! Digits Solver - find every arithmetic equation over a pool of numbers that
//! reaches a target
//!
//! Numbers are combined left to right with `+ - * /`, each pool entry used at
//! most once, in any order and any subset of two or more. No intermediate
//! subtraction may go negative and no intermediate division may be inexact.
//! Equations are rendered in infix, parsed to postfix with the shunting-yard
//! algorithm and evaluated step by step so the rules apply to every step.
//!
//! Parenthesized groupings are not searched; equations that need them are
//! never found.

pub mod expression;
pub mod iterator;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{ExpressionEngine, ExpressionError, MalformedInput, RuleViolation};
pub use solver::{DigitsSolver, SolveReport, SolverConfig, SolverError};
pub use utils::{UtilsError, parse_digit_pool, validate_digit_pool, validate_target};

/// Find every equation over `digits` that evaluates to `target`
///
/// This is a convenience function that runs a default, parallel solver.
///
/// # Arguments
///
/// * `digits` - The digit pool; each entry is used at most once per equation
/// * `target` - The value an equation must reach
///
/// # Errors
///
/// This function will return an error if:
/// * The digit pool is empty
/// * The digit pool has more than 64 numbers, the generator's limit
/// * A pool entry or the target is beyond 2^53 in magnitude
///
/// No smaller size cap is applied, but the search grows factorially:
/// pools past roughly eight numbers take a very long time. Use
/// [`DigitsSolver::with_config`] with [`SolverConfig::max_digits`] to
/// enforce a tighter limit.
///
/// # Examples
///
/// ```
/// use digits_solver::solve;
///
/// let solutions = solve(&[1, 2], 3).unwrap_or_default();
/// assert_eq!(solutions, vec!["1 + 2", "2 + 1"]);
/// ```
pub fn solve(digits: &[i64], target: i64) -> Result<Vec<String>, SolverError> {
    DigitsSolver::new().solve(digits, target)
}

/// Evaluate an infix expression, rejecting negative or fractional steps
///
/// Accepts `+ - * /`, parentheses, unary signs at the start of the
/// expression or after `(`, and `.` as the decimal separator.
///
/// # Errors
///
/// Returns an error for malformed input, division by zero, or any step that
/// goes negative or divides inexactly.
///
/// # Examples
///
/// ```
/// use digits_solver::evaluate;
///
/// assert_eq!(evaluate("8 * 15 + 20 - 11 + 4"), Ok(133.0));
/// assert!(evaluate("5 - 8 + 10").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<f64, ExpressionError> {
    ExpressionEngine::new().evaluate(expression)
}
