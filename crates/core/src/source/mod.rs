//! Record source: where transactions are read from and written to.
//!
//! The engine only sees this trait. The production implementation is the
//! Airtable client; `InMemorySource` backs tests and local runs.

pub mod error;
pub mod memory;

use async_trait::async_trait;
use compta_shared::TransactionId;
use serde::{Deserialize, Serialize};

use crate::transaction::{MilestoneUpdate, Transaction};

pub use error::SourceError;
pub use memory::InMemorySource;

/// Sortable transaction fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Payment date.
    PaidOn,
    /// Invoice date.
    InvoicedOn,
    /// Amount.
    Amount,
    /// Invoice reference.
    Reference,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first.
    Asc,
    /// Largest first.
    Desc,
}

impl SortDirection {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// One sort criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortField {
    /// Field to sort on.
    pub key: SortKey,
    /// Direction.
    pub direction: SortDirection,
}

impl SortField {
    /// Default display order: most recent payment, then most recent invoice.
    pub const DEFAULT_ORDER: [Self; 2] = [
        Self {
            key: SortKey::PaidOn,
            direction: SortDirection::Desc,
        },
        Self {
            key: SortKey::InvoicedOn,
            direction: SortDirection::Desc,
        },
    ];
}

/// Storage for transaction records.
///
/// Fetches return every record, drafts first, then waiting, then done; the
/// sort only orders records within those groups.
#[async_trait]
pub trait TransactionSource: Send + Sync {
    /// Fetches all transactions, sorted by `sort` or by
    /// [`SortField::DEFAULT_ORDER`] when `None`.
    async fn fetch_transactions(
        &self,
        sort: Option<&[SortField]>,
    ) -> Result<Vec<Transaction>, SourceError>;

    /// Fetches one transaction as currently stored.
    async fn fetch_transaction(&self, id: &TransactionId) -> Result<Transaction, SourceError>;

    /// Writes one milestone date and returns the updated record.
    async fn update_milestone(
        &self,
        id: &TransactionId,
        update: MilestoneUpdate,
    ) -> Result<Transaction, SourceError>;
}
