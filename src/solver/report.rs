use crate::expression::{ExpressionError, RuleViolation};

/// Why candidates were turned down, tallied per reason
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RejectionCounts {
    pub negative: u64,
    pub fractional: u64,
    pub division_by_zero: u64,
    pub malformed: u64,
    /// Some step left the exactly representable integer range
    pub out_of_range: u64,
    /// Evaluated cleanly but to a value other than the target
    pub wrong_value: u64,
}

impl RejectionCounts {
    pub fn total(&self) -> u64 {
        self.negative
            + self.fractional
            + self.division_by_zero
            + self.malformed
            + self.out_of_range
            + self.wrong_value
    }

    fn record(&mut self, error: &ExpressionError) {
        match error {
            ExpressionError::RuleViolation(RuleViolation::Negative { .. }) => self.negative += 1,
            ExpressionError::RuleViolation(RuleViolation::Fractional { .. }) => {
                self.fractional += 1
            }
            ExpressionError::DivisionByZero => self.division_by_zero += 1,
            ExpressionError::Malformed(_) => self.malformed += 1,
            ExpressionError::OutOfRange { .. } => self.out_of_range += 1,
        }
    }

    fn merge(&mut self, other: &RejectionCounts) {
        self.negative += other.negative;
        self.fractional += other.fractional;
        self.division_by_zero += other.division_by_zero;
        self.malformed += other.malformed;
        self.out_of_range += other.out_of_range;
        self.wrong_value += other.wrong_value;
    }
}

/// Outcome of a full search: accepted equations plus search statistics
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolveReport {
    pub solutions: Vec<String>,
    pub candidates: u64,
    pub rejections: RejectionCounts,
}

impl SolveReport {
    pub fn record_solution(&mut self, equation: String) {
        self.candidates += 1;
        self.solutions.push(equation);
    }

    pub fn record_wrong_value(&mut self) {
        self.candidates += 1;
        self.rejections.wrong_value += 1;
    }

    pub fn record_rejection(&mut self, error: &ExpressionError) {
        self.candidates += 1;
        self.rejections.record(error);
    }

    /// Append `other` after `self`, keeping solution order
    pub fn merge(mut self, other: SolveReport) -> SolveReport {
        self.candidates += other.candidates;
        self.solutions.extend(other.solutions);
        self.rejections.merge(&other.rejections);
        self
    }
}
