use log::debug;

use super::constants::MAX_POOL_SIZE;
use super::state::SelectionState;
use super::types::Selection;

/// Depth-first enumeration of every ordered, repetition-free selection of
/// exactly `length` indices out of `0..pool_size`.
///
/// Selections come out in lexicographic order, e.g. for a pool of 3 and
/// length 2: `[0, 1] [0, 2] [1, 0] [1, 2] [2, 0] [2, 1]`.
#[derive(Debug, Clone)]
pub struct SelectionIterator {
    pool_size: usize,
    length: usize,
    state: SelectionState,
}

impl SelectionIterator {
    pub fn new(pool_size: usize, length: usize) -> Self {
        let mut state = SelectionState::new(length);

        if length == 0 || length > pool_size || pool_size > MAX_POOL_SIZE {
            debug!(
                "No selections of length {} from a pool of {}",
                length, pool_size
            );
            state.mark_exhausted();
        }

        Self {
            pool_size,
            length,
            state,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Iterator for SelectionIterator {
    type Item = Selection;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.state.exhausted {
            let depth = self.state.depth();

            if depth == self.length {
                let selection = self.state.chosen.clone();
                self.state.backtrack();
                return Some(selection);
            }

            let cursor = self.state.cursors.get(depth).copied().unwrap_or(self.pool_size);
            match (cursor..self.pool_size).find(|&index| !self.state.is_used(index)) {
                Some(index) => self.state.push(index),
                None if depth == 0 => self.state.mark_exhausted(),
                None => self.state.backtrack(),
            }
        }

        None
    }
}

/// Every selection of length 2 through `pool_size`, shortest first.
/// Single-number selections carry no operator and are skipped.
pub fn selections(pool_size: usize) -> impl Iterator<Item = Selection> {
    (2..=pool_size).flat_map(move |length| SelectionIterator::new(pool_size, length))
}
