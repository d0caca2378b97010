use thiserror::Error;

/// Errors raised while reading or validating a digit pool
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Digit pool cannot be empty")]
    EmptyDigitPool,
    #[error("Digit pool has {count} numbers, at most {max} are supported")]
    TooManyDigits { count: usize, max: usize },
    #[error("{0} is outside the exactly representable range of +/-2^53")]
    OutOfRange(i64),
    #[error("Not an integer: '{0}'")]
    InvalidNumber(String),
}
