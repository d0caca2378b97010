use crate::expression::DEFAULT_DECIMAL_SEPARATOR;
use crate::iterator::constants::MAX_POOL_SIZE;

/// Configuration for the equation search
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Spread selections across the rayon thread pool
    pub parallel: bool,
    /// Upper bound on the digit pool size. `None` only applies the
    /// generator's own limit of 64 numbers.
    pub max_digits: Option<usize>,
    /// Separator the tokenizer accepts inside number literals
    pub decimal_separator: char,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            max_digits: None,
            decimal_separator: DEFAULT_DECIMAL_SEPARATOR,
        }
    }
}

impl SolverConfig {
    /// Pool size limit in force, never above the generator's bitmask width
    pub fn effective_max_digits(&self) -> usize {
        self.max_digits.map_or(MAX_POOL_SIZE, |max| max.min(MAX_POOL_SIZE))
    }
}
