/// Backtracking state of one partial selection: the chosen indices, the
/// used-index bitmask and, per depth, the next index to try.
#[derive(Debug, Clone)]
pub struct SelectionState {
    pub(crate) chosen: Vec<usize>,
    pub(crate) used: u64,
    pub(crate) cursors: Vec<usize>,
    pub(crate) exhausted: bool,
}

impl SelectionState {
    pub fn new(length: usize) -> Self {
        Self {
            chosen: Vec::with_capacity(length),
            used: 0,
            cursors: vec![0; length],
            exhausted: false,
        }
    }

    pub fn depth(&self) -> usize {
        self.chosen.len()
    }

    pub fn is_used(&self, index: usize) -> bool {
        self.used & (1_u64 << index) != 0
    }

    /// Extend the partial selection with `index` and move the cursor past it
    pub fn push(&mut self, index: usize) {
        let depth = self.depth();
        if let Some(cursor) = self.cursors.get_mut(depth) {
            *cursor = index + 1;
        }
        if let Some(next) = self.cursors.get_mut(depth + 1) {
            *next = 0;
        }
        self.chosen.push(index);
        self.used |= 1_u64 << index;
    }

    /// Drop the last chosen index and release it for reuse
    pub fn backtrack(&mut self) {
        if let Some(index) = self.chosen.pop() {
            self.used &= !(1_u64 << index);
        }
    }

    pub fn mark_exhausted(&mut self) {
        self.exhausted = true;
    }
}
