use crate::expression::Operator;

use super::constants::OPERATOR_ALPHABET_SIZE;
use super::types::OperatorSequence;

/// The Cartesian power of the binary operator alphabet: all
/// `4^length` sequences, each position independent.
///
/// Sequences are decoded from a base-4 counter with the last position
/// varying fastest, so `+ +`, `+ -`, `+ *`, `+ /`, `- +` and so on.
#[derive(Debug, Clone)]
pub struct OperatorSequences {
    length: usize,
    next: usize,
    total: usize,
}

impl OperatorSequences {
    pub fn new(length: usize) -> Self {
        Self {
            length,
            next: 0,
            total: sequence_count(length),
        }
    }

    /// Materialize all sequences for one length, shared across selections
    pub fn collect_all(length: usize) -> Vec<OperatorSequence> {
        Self::new(length).collect()
    }

    fn decode(&self, mut code: usize) -> OperatorSequence {
        let mut sequence = vec![Operator::Add; self.length];
        for slot in sequence.iter_mut().rev() {
            if let Some(&op) = Operator::BINARY.get(code % OPERATOR_ALPHABET_SIZE) {
                *slot = op;
            }
            code /= OPERATOR_ALPHABET_SIZE;
        }
        sequence
    }
}

impl Iterator for OperatorSequences {
    type Item = OperatorSequence;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total {
            return None;
        }
        let sequence = self.decode(self.next);
        self.next += 1;
        Some(sequence)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for OperatorSequences {}

/// `4^length`, saturating for lengths no real search reaches
pub fn sequence_count(length: usize) -> usize {
    u32::try_from(length)
        .ok()
        .and_then(|exp| OPERATOR_ALPHABET_SIZE.checked_pow(exp))
        .unwrap_or(usize::MAX)
}
