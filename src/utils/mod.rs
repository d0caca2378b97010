//! Digit pool parsing, validation and search-size arithmetic

mod counting;
mod digits;
mod errors;
mod validation;

pub use counting::{candidate_count, selection_count};
pub use digits::parse_digit_pool;
pub use errors::UtilsError;
pub use validation::{MAX_EXACT_INTEGER, validate_digit_pool, validate_target};
