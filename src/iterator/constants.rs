// Limits for the combinatorial generator
/// Width of the used-index bitmask carried by each partial selection
pub const MAX_POOL_SIZE: usize = 64;
/// Size of the operator alphabet assigned between consecutive numbers
pub const OPERATOR_ALPHABET_SIZE: usize = 4;
