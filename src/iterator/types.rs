use crate::expression::Operator;

/// Ordered indices into the digit pool, no index repeated
pub type Selection = Vec<usize>;

/// Binary operators placed between consecutive selected numbers
pub type OperatorSequence = Vec<Operator>;

/// One (selection, operator sequence) pairing to be assembled and evaluated
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub selection: Selection,
    pub operators: OperatorSequence,
}
