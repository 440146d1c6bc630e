//! Service errors.

use compta_shared::AppError;
use thiserror::Error;

use crate::source::SourceError;
use crate::transaction::MilestoneError;

/// Errors from summary service operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The requested milestone transition is not allowed.
    #[error(transparent)]
    Milestone(#[from] MilestoneError),

    /// The record source failed.
    #[error(transparent)]
    Source(#[from] SourceError),
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Milestone(e) => e.into(),
            ServiceError::Source(e) => e.into(),
        }
    }
}
