//! Milestone transition errors.

use chrono::NaiveDate;
use compta_shared::AppError;
use thiserror::Error;

use super::types::StatusKind;

/// Rejected milestone transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MilestoneError {
    /// The transaction is paid; its dates can no longer change.
    #[error("Transaction is already paid (on {paid_on}), cannot update any date")]
    AlreadySettled {
        /// Existing payment date.
        paid_on: NaiveDate,
    },

    /// The requested date is after today.
    #[error("Date {date} is in the future (today is {today})")]
    DateInFuture {
        /// Requested date.
        date: NaiveDate,
        /// Current date.
        today: NaiveDate,
    },

    /// The stored record no longer has the status the caller saw.
    #[error("Transaction is {actual}, not {expected} as requested; reload it and retry")]
    StatusChanged {
        /// Status the caller saw.
        expected: StatusKind,
        /// Status currently stored.
        actual: StatusKind,
    },

    /// Payment date precedes the invoice date.
    #[error("Payment date {paid_on} is before invoice date {invoiced_on}")]
    PaidBeforeInvoiced {
        /// Requested payment date.
        paid_on: NaiveDate,
        /// Existing invoice date.
        invoiced_on: NaiveDate,
    },
}

impl From<MilestoneError> for AppError {
    fn from(err: MilestoneError) -> Self {
        Self::BusinessRule(err.to_string())
    }
}
