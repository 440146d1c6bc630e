//! Fiscal calendar errors.

use compta_shared::AppError;
use thiserror::Error;

/// Quarter-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuarterError {
    /// Quarter number outside 1..=4.
    #[error("Quarter must be between 1 and 4, got {0}")]
    OutOfRange(u8),
}

impl From<QuarterError> for AppError {
    fn from(err: QuarterError) -> Self {
        Self::Validation(err.to_string())
    }
}
