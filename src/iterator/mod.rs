//! Combinatorial generator: ordered index selections and operator sequences

pub mod candidates;
pub mod constants;
pub mod core;
pub mod generator;
pub mod state;
pub mod types;

pub use candidates::{CandidateIterator, candidates};
pub use self::core::{SelectionIterator, selections};
pub use generator::{OperatorSequences, sequence_count};
pub use types::{Candidate, OperatorSequence, Selection};
