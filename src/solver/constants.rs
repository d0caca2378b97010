/// Tolerance when comparing an evaluated value against the integer target
pub const EPSILON: f64 = 1e-9;
/// Pool size limit the command line applies; the search grows factorially
pub const DEFAULT_MAX_DIGITS: usize = 8;
