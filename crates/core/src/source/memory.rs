//! In-memory record source.

use std::cmp::Ordering;

use async_trait::async_trait;
use compta_shared::TransactionId;
use tokio::sync::RwLock;

use super::{SortDirection, SortField, SortKey, SourceError, TransactionSource};
use crate::transaction::{MilestoneUpdate, Transaction, order_by_status};

/// Record source holding transactions in memory.
#[derive(Debug, Default)]
pub struct InMemorySource {
    transactions: RwLock<Vec<Transaction>>,
}

impl InMemorySource {
    /// Creates a source seeded with `transactions`.
    #[must_use]
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions: RwLock::new(transactions),
        }
    }

    /// Returns a copy of the stored transactions, unsorted.
    pub async fn snapshot(&self) -> Vec<Transaction> {
        self.transactions.read().await.clone()
    }
}

fn compare(a: &Transaction, b: &Transaction, field: &SortField) -> Ordering {
    let ordering = match field.key {
        SortKey::PaidOn => a.paid_on.cmp(&b.paid_on),
        SortKey::InvoicedOn => a.invoiced_on.cmp(&b.invoiced_on),
        SortKey::Amount => a.amount.cmp(&b.amount),
        SortKey::Reference => a.reference.cmp(&b.reference),
    };
    match field.direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

#[async_trait]
impl TransactionSource for InMemorySource {
    async fn fetch_transactions(
        &self,
        sort: Option<&[SortField]>,
    ) -> Result<Vec<Transaction>, SourceError> {
        let sort = sort.unwrap_or(&SortField::DEFAULT_ORDER);
        let mut transactions = self.transactions.read().await.clone();
        transactions.sort_by(|a, b| {
            sort.iter()
                .map(|field| compare(a, b, field))
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal)
        });
        Ok(order_by_status(transactions))
    }

    async fn fetch_transaction(&self, id: &TransactionId) -> Result<Transaction, SourceError> {
        self.transactions
            .read()
            .await
            .iter()
            .find(|tx| &tx.id == id)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(id.clone()))
    }

    async fn update_milestone(
        &self,
        id: &TransactionId,
        update: MilestoneUpdate,
    ) -> Result<Transaction, SourceError> {
        let mut transactions = self.transactions.write().await;
        let transaction = transactions
            .iter_mut()
            .find(|tx| &tx.id == id)
            .ok_or_else(|| SourceError::NotFound(id.clone()))?;

        match update {
            MilestoneUpdate::InvoicedOn(date) => transaction.invoiced_on = Some(date),
            MilestoneUpdate::PaidOn(date) => transaction.paid_on = Some(date),
        }
        Ok(transaction.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::{StatusKind, TransactionType};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn seeded() -> InMemorySource {
        InMemorySource::new(vec![
            Transaction::new("old-paid", dec!(100), TransactionType::Development)
                .invoiced(date(2024, 1, 5))
                .paid(date(2024, 1, 20)),
            Transaction::new("new-paid", dec!(200), TransactionType::Development)
                .invoiced(date(2024, 3, 1))
                .paid(date(2024, 4, 2)),
            Transaction::new("waiting", dec!(300), TransactionType::Training)
                .invoiced(date(2024, 5, 1)),
            Transaction::new("draft", dec!(400), TransactionType::School),
        ])
    }

    fn ids(transactions: &[Transaction]) -> Vec<&str> {
        transactions.iter().map(|tx| tx.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_fetch_groups_by_status_then_default_order() {
        let fetched = seeded().fetch_transactions(None).await.unwrap();
        assert_eq!(ids(&fetched), vec!["draft", "waiting", "new-paid", "old-paid"]);
    }

    #[tokio::test]
    async fn test_fetch_with_explicit_sort() {
        let sort = [SortField {
            key: SortKey::Amount,
            direction: SortDirection::Asc,
        }];
        let fetched = seeded().fetch_transactions(Some(&sort)).await.unwrap();
        assert_eq!(ids(&fetched), vec!["draft", "waiting", "old-paid", "new-paid"]);
    }

    #[tokio::test]
    async fn test_fetch_one_transaction() {
        let source = seeded();
        let waiting = source
            .fetch_transaction(&TransactionId::new("waiting"))
            .await
            .unwrap();
        assert_eq!(waiting.invoiced_on, Some(date(2024, 5, 1)));

        let err = source
            .fetch_transaction(&TransactionId::new("missing"))
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_milestone_writes_single_field() {
        let source = seeded();
        let updated = source
            .update_milestone(
                &TransactionId::new("waiting"),
                MilestoneUpdate::PaidOn(date(2024, 6, 1)),
            )
            .await
            .unwrap();

        assert_eq!(updated.status().kind(), StatusKind::Done);
        assert_eq!(updated.invoiced_on, Some(date(2024, 5, 1)));
        assert_eq!(updated.paid_on, Some(date(2024, 6, 1)));

        let stored = source.snapshot().await;
        assert!(stored.iter().any(|tx| tx == &updated));
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let err = seeded()
            .update_milestone(
                &TransactionId::new("missing"),
                MilestoneUpdate::InvoicedOn(date(2024, 6, 1)),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::NotFound(id) if id.as_str() == "missing"));
    }
}
