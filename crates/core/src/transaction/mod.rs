//! Transactions, their derived status, and milestone transitions.

pub mod error;
pub mod milestone;
pub mod types;

pub use error::MilestoneError;
pub use milestone::{MilestoneUpdate, plan_milestone_update};
pub use types::{StatusKind, Transaction, TransactionStatus, TransactionType};

/// Orders transactions draft first, then waiting, then done.
///
/// The sort is stable, so the source order is kept within each group.
#[must_use]
pub fn order_by_status(mut transactions: Vec<Transaction>) -> Vec<Transaction> {
    transactions.sort_by_key(|tx| match tx.status().kind() {
        StatusKind::Draft => 0u8,
        StatusKind::Waiting => 1,
        StatusKind::Done => 2,
    });
    transactions
}
