use log::debug;

use super::constants::MAX_POOL_SIZE;
use super::core::SelectionIterator;
use super::generator::OperatorSequences;
use super::types::{Candidate, OperatorSequence, Selection};

/// Sequential walk over every (selection, operator sequence) pair for a pool,
/// shortest selections first. Operator sequences are materialized once per
/// selection length and reused for every selection of that length.
#[derive(Debug, Clone)]
pub struct CandidateIterator {
    pool_size: usize,
    selections: SelectionIterator,
    sequences: Vec<OperatorSequence>,
    current: Option<Selection>,
    op_idx: usize,
    done: bool,
}

impl CandidateIterator {
    pub fn new(pool_size: usize) -> Self {
        Self {
            pool_size,
            selections: SelectionIterator::new(pool_size, 2),
            sequences: OperatorSequences::collect_all(1),
            current: None,
            op_idx: 0,
            done: pool_size < 2 || pool_size > MAX_POOL_SIZE,
        }
    }

    /// Move on to the next selection length, or finish
    fn advance_length(&mut self) {
        let next_length = self.selections.length() + 1;
        if next_length > self.pool_size {
            self.done = true;
            return;
        }

        debug!("Generating candidates with {} numbers", next_length);
        self.selections = SelectionIterator::new(self.pool_size, next_length);
        self.sequences = OperatorSequences::collect_all(next_length - 1);
        self.current = None;
        self.op_idx = 0;
    }
}

impl Iterator for CandidateIterator {
    type Item = Candidate;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            if let Some(selection) = &self.current
                && let Some(operators) = self.sequences.get(self.op_idx)
            {
                self.op_idx += 1;
                return Some(Candidate {
                    selection: selection.clone(),
                    operators: operators.clone(),
                });
            }

            match self.selections.next() {
                Some(selection) => {
                    self.current = Some(selection);
                    self.op_idx = 0;
                }
                None => self.advance_length(),
            }
        }

        None
    }
}

/// Convenience constructor mirroring [`selections`](super::selections)
pub fn candidates(pool_size: usize) -> CandidateIterator {
    CandidateIterator::new(pool_size)
}
