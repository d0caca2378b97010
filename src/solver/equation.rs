use std::fmt;

use crate::expression::Operator;

/// A selection of pool numbers paired with the operators placed between
/// them. Renders as space-separated infix, e.g. `8 * 15 + 20`.
#[derive(Debug, Clone, Copy)]
pub struct Equation<'a> {
    pool: &'a [i64],
    selection: &'a [usize],
    operators: &'a [Operator],
}

impl<'a> Equation<'a> {
    /// Returns `None` unless every index is inside the pool and there is
    /// exactly one operator fewer than selected numbers.
    pub fn new(pool: &'a [i64], selection: &'a [usize], operators: &'a [Operator]) -> Option<Self> {
        if selection.is_empty()
            || operators.len() + 1 != selection.len()
            || selection.iter().any(|&index| index >= pool.len())
        {
            return None;
        }

        Some(Self {
            pool,
            selection,
            operators,
        })
    }

    /// The selected numbers in equation order
    pub fn numbers(&self) -> impl Iterator<Item = i64> + '_ {
        self.selection
            .iter()
            .filter_map(|&index| self.pool.get(index).copied())
    }
}

impl fmt::Display for Equation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut numbers = self.numbers();

        if let Some(first) = numbers.next() {
            write!(f, "{}", first)?;
        }
        for (op, number) in self.operators.iter().zip(numbers) {
            write!(f, " {} {}", op, number)?;
        }
        Ok(())
    }
}
