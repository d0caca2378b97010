use thiserror::Error;

use crate::utils::UtilsError;

/// Caller-visible failures. Per-candidate problems never surface here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Invalid digit pool: {0}")]
    InvalidDigitPool(#[from] UtilsError),
}
