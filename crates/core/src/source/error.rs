//! Record source errors.

use compta_shared::{AppError, TransactionId};
use thiserror::Error;

/// Errors raised while reading from or writing to the record source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Transport failure.
    #[error("HTTP error calling {endpoint}: {message}")]
    Http {
        /// Endpoint being called.
        endpoint: String,
        /// Underlying error.
        message: String,
    },

    /// Non-success response.
    #[error("{endpoint} returned {status}: {body}")]
    Api {
        /// Endpoint being called.
        endpoint: String,
        /// HTTP status.
        status: u16,
        /// Response body.
        body: String,
    },

    /// Response body did not match the expected shape.
    #[error("Failed to decode response from {endpoint}: {message}")]
    Deserialization {
        /// Endpoint being called.
        endpoint: String,
        /// Underlying error.
        message: String,
    },

    /// A record is missing a required field or holds an unparsable value.
    #[error("Invalid record {id}: {reason}")]
    InvalidRecord {
        /// Record id.
        id: String,
        /// What is wrong with it.
        reason: String,
    },

    /// No record with this id.
    #[error("Transaction not found: {0}")]
    NotFound(TransactionId),

    /// Client could not be built from its configuration.
    #[error("Record source configuration error: {0}")]
    Config(String),
}

impl From<SourceError> for AppError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::NotFound(_) => Self::NotFound(err.to_string()),
            SourceError::Config(_) => Self::Internal(err.to_string()),
            SourceError::Http { .. }
            | SourceError::Api { .. }
            | SourceError::Deserialization { .. }
            | SourceError::InvalidRecord { .. } => Self::ExternalService(err.to_string()),
        }
    }
}
