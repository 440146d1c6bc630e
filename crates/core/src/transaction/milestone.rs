//! Milestone transitions: draft → waiting → done.
//!
//! The write to the record store is planned here, before any I/O, so a
//! rejected transition never reaches the store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::MilestoneError;
use super::types::TransactionStatus;

/// A single milestone date to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "date", rename_all = "snake_case")]
pub enum MilestoneUpdate {
    /// Set the invoice date.
    InvoicedOn(NaiveDate),
    /// Set the payment date.
    PaidOn(NaiveDate),
}

impl MilestoneUpdate {
    /// Returns the date being written.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        match self {
            Self::InvoicedOn(date) | Self::PaidOn(date) => *date,
        }
    }
}

/// Decides which milestone date a new date fills for a transaction in `current` status.
///
/// - Draft: the date becomes the invoice date.
/// - Waiting: the date becomes the payment date, and may not precede the invoice.
/// - Done: rejected, settled dates are immutable.
///
/// In every case the date may not be after `today`.
pub fn plan_milestone_update(
    current: &TransactionStatus,
    date: NaiveDate,
    today: NaiveDate,
) -> Result<MilestoneUpdate, MilestoneError> {
    match current {
        TransactionStatus::Done { paid_on } => {
            Err(MilestoneError::AlreadySettled { paid_on: *paid_on })
        }
        _ if date > today => Err(MilestoneError::DateInFuture { date, today }),
        TransactionStatus::Draft => Ok(MilestoneUpdate::InvoicedOn(date)),
        TransactionStatus::Waiting { invoiced_on } if date < *invoiced_on => {
            Err(MilestoneError::PaidBeforeInvoiced {
                paid_on: date,
                invoiced_on: *invoiced_on,
            })
        }
        TransactionStatus::Waiting { .. } => Ok(MilestoneUpdate::PaidOn(date)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_draft_sets_invoice_date() {
        let update =
            plan_milestone_update(&TransactionStatus::Draft, date(2024, 2, 10), date(2024, 6, 1))
                .unwrap();
        assert_eq!(update, MilestoneUpdate::InvoicedOn(date(2024, 2, 10)));
    }

    #[test]
    fn test_waiting_sets_payment_date() {
        let current = TransactionStatus::Waiting {
            invoiced_on: date(2024, 2, 10),
        };
        let update = plan_milestone_update(&current, date(2024, 5, 3), date(2024, 6, 1)).unwrap();
        assert_eq!(update, MilestoneUpdate::PaidOn(date(2024, 5, 3)));
        assert_eq!(update.date(), date(2024, 5, 3));
    }

    #[test]
    fn test_waiting_accepts_payment_on_invoice_day() {
        let current = TransactionStatus::Waiting {
            invoiced_on: date(2024, 2, 10),
        };
        let update = plan_milestone_update(&current, date(2024, 2, 10), date(2024, 6, 1)).unwrap();
        assert_eq!(update, MilestoneUpdate::PaidOn(date(2024, 2, 10)));
    }

    #[test]
    fn test_done_is_rejected() {
        let current = TransactionStatus::Done {
            paid_on: date(2024, 5, 3),
        };
        let result = plan_milestone_update(&current, date(2024, 5, 4), date(2024, 6, 1));
        assert_eq!(
            result,
            Err(MilestoneError::AlreadySettled {
                paid_on: date(2024, 5, 3)
            })
        );
    }

    #[test]
    fn test_done_is_rejected_even_with_future_date() {
        let current = TransactionStatus::Done {
            paid_on: date(2024, 5, 3),
        };
        let result = plan_milestone_update(&current, date(2030, 1, 1), date(2024, 6, 1));
        assert!(matches!(result, Err(MilestoneError::AlreadySettled { .. })));
    }

    #[test]
    fn test_future_date_is_rejected() {
        let result =
            plan_milestone_update(&TransactionStatus::Draft, date(2024, 6, 2), date(2024, 6, 1));
        assert!(matches!(result, Err(MilestoneError::DateInFuture { .. })));
    }

    #[test]
    fn test_payment_before_invoice_is_rejected() {
        let current = TransactionStatus::Waiting {
            invoiced_on: date(2024, 2, 10),
        };
        let result = plan_milestone_update(&current, date(2024, 2, 9), date(2024, 6, 1));
        assert!(matches!(
            result,
            Err(MilestoneError::PaidBeforeInvoiced { .. })
        ));
    }

    #[test]
    fn test_update_serializes_field_and_date() {
        let json = serde_json::to_value(MilestoneUpdate::PaidOn(date(2024, 5, 3))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "field": "paid_on", "date": "2024-05-03" })
        );
    }
}
