use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// Parse a list of integers separated by commas and/or whitespace,
/// e.g. `"4, 8 5,11"`.
///
/// # Errors
///
/// Returns an error if any entry is not an integer or no entry is present.
pub fn parse_digit_pool(input: &str) -> Result<Vec<i64>, UtilsError> {
    debug!("Parsing digit pool from '{}'", input);

    let digits = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<i64>().map_err(|_| {
                warn!("Rejecting non-integer entry: '{}'", part);
                UtilsError::InvalidNumber(part.to_string())
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if digits.is_empty() {
        return Err(UtilsError::EmptyDigitPool);
    }

    debug!("Parsed digit pool {:?}", digits);
    Ok(digits)
}
