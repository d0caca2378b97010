use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// Largest magnitude an `f64` still represents exactly as an integer
pub const MAX_EXACT_INTEGER: u64 = 1 << 53;

fn check_exact(value: i64) -> Result<(), UtilsError> {
    if value.unsigned_abs() > MAX_EXACT_INTEGER {
        warn!("{} cannot be evaluated exactly", value);
        return Err(UtilsError::OutOfRange(value));
    }
    Ok(())
}

/// # Errors
///
/// Returns an error if the pool is empty, has more than `max_digits`
/// entries, or holds a number beyond 2^53 in magnitude.
pub fn validate_digit_pool(digits: &[i64], max_digits: usize) -> Result<(), UtilsError> {
    debug!("Validating digit pool: {:?}", digits);

    if digits.is_empty() {
        warn!("Digit pool is empty");
        return Err(UtilsError::EmptyDigitPool);
    }

    if digits.len() > max_digits {
        warn!(
            "Digit pool has {} numbers, limit is {}",
            digits.len(),
            max_digits
        );
        return Err(UtilsError::TooManyDigits {
            count: digits.len(),
            max: max_digits,
        });
    }

    digits.iter().try_for_each(|&d| check_exact(d))?;

    debug!("Digit pool validation successful");
    Ok(())
}

/// # Errors
///
/// Returns an error if the target is beyond 2^53 in magnitude.
pub fn validate_target(target: i64) -> Result<(), UtilsError> {
    check_exact(target)
}
