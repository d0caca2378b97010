use log::{debug, info, trace, warn};
use rayon::prelude::*;

use crate::expression::{ExpressionEngine, ExpressionError};
use crate::iterator::{OperatorSequence, OperatorSequences, Selection, candidates, selections};
use crate::solver::config::SolverConfig;
use crate::solver::constants::EPSILON;
use crate::solver::equation::Equation;
use crate::solver::errors::SolverError;
use crate::solver::report::SolveReport;
use crate::utils::{candidate_count, validate_digit_pool, validate_target};

/// Result of running one assembled equation through the engine
enum Verdict {
    Solution,
    WrongValue,
    Rejected(ExpressionError),
}

/// Main solver: enumerates every (selection, operator sequence) pair over a
/// digit pool and keeps the equations that reach the target.
pub struct DigitsSolver {
    config: SolverConfig,
    engine: ExpressionEngine,
}

impl DigitsSolver {
    pub fn new() -> Self {
        Self::with_config(SolverConfig::default())
    }

    pub fn with_config(config: SolverConfig) -> Self {
        let engine = ExpressionEngine::with_decimal_separator(config.decimal_separator);
        Self { config, engine }
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Every equation over `digits` that evaluates to `target` with no
    /// negative or fractional step.
    ///
    /// # Errors
    ///
    /// Returns an error if the digit pool is empty or larger than
    /// [`SolverConfig::max_digits`], or if the target or a pool entry is
    /// beyond 2^53 in magnitude. A pool of one number yields no equations.
    pub fn solve(&self, digits: &[i64], target: i64) -> Result<Vec<String>, SolverError> {
        Ok(self.solve_with_report(digits, target)?.solutions)
    }

    /// Like [`solve`](Self::solve), with candidate and rejection counts
    ///
    /// # Errors
    ///
    /// Same conditions as [`solve`](Self::solve).
    pub fn solve_with_report(
        &self,
        digits: &[i64],
        target: i64,
    ) -> Result<SolveReport, SolverError> {
        self.validate(digits, target)?;

        info!(
            "Searching {} candidate equations over {:?} for target {}",
            candidate_count(digits.len()),
            digits,
            target
        );

        let report = if self.config.parallel {
            self.search_parallel(digits, target)
        } else {
            self.search_sequential(digits, target)
        };

        info!(
            "Found {} solutions among {} candidates ({} rejected)",
            report.solutions.len(),
            report.candidates,
            report.rejections.total()
        );
        debug!("Rejections: {:?}", report.rejections);
        Ok(report)
    }

    /// Any single equation that reaches `target`, stopping early
    ///
    /// # Errors
    ///
    /// Same conditions as [`solve`](Self::solve).
    pub fn find_first(&self, digits: &[i64], target: i64) -> Result<Option<String>, SolverError> {
        self.validate(digits, target)?;

        let table = operator_table(digits.len());
        let first_in = |selection: &Selection| {
            sequences_for(&table, selection).iter().find_map(|operators| {
                let rendered = Equation::new(digits, selection, operators)?.to_string();
                matches!(self.check(&rendered, target), Verdict::Solution).then_some(rendered)
            })
        };

        let found = if self.config.parallel {
            let all: Vec<Selection> = selections(digits.len()).collect();
            all.par_iter().find_map_any(first_in)
        } else {
            selections(digits.len()).find_map(|selection| first_in(&selection))
        };

        match &found {
            Some(equation) => info!("Found solution: {}", equation),
            None => info!("No solution found"),
        }
        Ok(found)
    }

    fn validate(&self, digits: &[i64], target: i64) -> Result<(), SolverError> {
        validate_digit_pool(digits, self.config.effective_max_digits())?;
        validate_target(target)?;
        Ok(())
    }

    fn search_sequential(&self, digits: &[i64], target: i64) -> SolveReport {
        let mut report = SolveReport::default();

        for candidate in candidates(digits.len()) {
            match Equation::new(digits, &candidate.selection, &candidate.operators) {
                Some(equation) => self.record(&mut report, &equation, target),
                None => warn!("Skipping ill-formed candidate {:?}", candidate),
            }
        }

        report
    }

    fn search_parallel(&self, digits: &[i64], target: i64) -> SolveReport {
        let table = operator_table(digits.len());
        let all: Vec<Selection> = selections(digits.len()).collect();
        debug!("Distributing {} selections across threads", all.len());

        all.par_iter()
            .fold(SolveReport::default, |mut report, selection| {
                for operators in sequences_for(&table, selection) {
                    if let Some(equation) = Equation::new(digits, selection, operators) {
                        self.record(&mut report, &equation, target);
                    }
                }
                report
            })
            .reduce(SolveReport::default, SolveReport::merge)
    }

    fn record(&self, report: &mut SolveReport, equation: &Equation, target: i64) {
        let rendered = equation.to_string();
        match self.check(&rendered, target) {
            Verdict::Solution => {
                debug!("Solution: {}", rendered);
                report.record_solution(rendered);
            }
            Verdict::WrongValue => report.record_wrong_value(),
            // A negative pool entry after the first position renders as a
            // binary sign (`5 + -3`) and is rejected here as malformed
            Verdict::Rejected(e) => report.record_rejection(&e),
        }
    }

    fn check(&self, equation: &str, target: i64) -> Verdict {
        match self.engine.evaluate(equation) {
            Ok(value) if (value - target as f64).abs() < EPSILON => Verdict::Solution,
            Ok(value) => {
                trace!("'{}' = {} misses target {}", equation, value, target);
                Verdict::WrongValue
            }
            Err(e) => Verdict::Rejected(e),
        }
    }
}

impl Default for DigitsSolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Operator sequences per selection length; entry `k - 2` holds the
/// sequences of length `k - 1`.
fn operator_table(pool_size: usize) -> Vec<Vec<OperatorSequence>> {
    (2..=pool_size)
        .map(|length| OperatorSequences::collect_all(length - 1))
        .collect()
}

fn sequences_for<'t>(
    table: &'t [Vec<OperatorSequence>],
    selection: &Selection,
) -> &'t [OperatorSequence] {
    selection
        .len()
        .checked_sub(2)
        .and_then(|idx| table.get(idx))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}
