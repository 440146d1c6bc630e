//! Summary service: ties the record source, the clock and the engine together.

pub mod error;

use std::sync::Arc;

use chrono::NaiveDate;
use compta_shared::TransactionId;
use tracing::{debug, info, warn};

use crate::clock::Clock;
use crate::fiscal::{is_selectable_year, years_to_fetch};
use crate::source::TransactionSource;
use crate::summary::{CotisationRates, YearSummary, summarize_year};
use crate::transaction::{MilestoneError, Transaction, TransactionStatus, plan_milestone_update};

pub use error::ServiceError;

/// Default first year offered by the dashboard.
pub const DEFAULT_START_YEAR: i32 = 2018;

/// Service answering dashboard queries.
///
/// Holds no mutable state; every call fetches a fresh snapshot.
pub struct SummaryService {
    source: Arc<dyn TransactionSource>,
    clock: Arc<dyn Clock>,
    rates: CotisationRates,
    start_year: i32,
}

impl SummaryService {
    /// Creates a service with the default rates and start year.
    #[must_use]
    pub fn new(source: Arc<dyn TransactionSource>, clock: Arc<dyn Clock>) -> Self {
        Self {
            source,
            clock,
            rates: CotisationRates::default(),
            start_year: DEFAULT_START_YEAR,
        }
    }

    /// Sets the contribution rates.
    #[must_use]
    pub fn with_rates(mut self, rates: CotisationRates) -> Self {
        self.rates = rates;
        self
    }

    /// Sets the first selectable year.
    #[must_use]
    pub fn with_start_year(mut self, start_year: i32) -> Self {
        self.start_year = start_year;
        self
    }

    /// Returns today's date.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Returns the current year.
    #[must_use]
    pub fn current_year(&self) -> i32 {
        self.clock.current_year()
    }

    /// Returns the selectable years, most recent first.
    #[must_use]
    pub fn years(&self) -> Vec<i32> {
        years_to_fetch(self.start_year, self.current_year())
    }

    /// Returns true if `year` can be summarized.
    #[must_use]
    pub fn is_selectable_year(&self, year: i32) -> bool {
        is_selectable_year(year, self.start_year, self.current_year())
    }

    /// Fetches every transaction and summarizes `year`.
    ///
    /// # Errors
    ///
    /// Returns an error if the record source fails.
    pub async fn summarize_year(&self, year: i32) -> Result<YearSummary, ServiceError> {
        let transactions = self.source.fetch_transactions(None).await?;
        let current_year = self.current_year();
        debug!(
            year,
            current_year,
            fetched = transactions.len(),
            "Summarizing year"
        );
        Ok(summarize_year(&transactions, year, current_year, &self.rates))
    }

    /// Records the next milestone date of a transaction.
    ///
    /// `current` is the status the caller last saw; it decides which date is
    /// written. The stored record must still have that status, so a stale
    /// caller cannot rewrite the dates of a settled transaction. Nothing is
    /// written if the transition is rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The transaction is already settled
    /// - The stored status differs from `current`
    /// - `date` is in the future
    /// - `date` precedes the invoice date of a waiting transaction
    /// - The record source fails
    pub async fn record_milestone(
        &self,
        id: &TransactionId,
        current: &TransactionStatus,
        date: NaiveDate,
    ) -> Result<Transaction, ServiceError> {
        let update = plan_milestone_update(current, date, self.today()).inspect_err(|e| {
            warn!(transaction_id = %id, error = %e, "Milestone update rejected");
        })?;

        let stored = self.source.fetch_transaction(id).await?.status();
        if stored != *current {
            let err = MilestoneError::StatusChanged {
                expected: current.kind(),
                actual: stored.kind(),
            };
            warn!(transaction_id = %id, error = %err, "Milestone update rejected");
            return Err(err.into());
        }

        let updated = self.source.update_milestone(id, update).await?;
        info!(
            transaction_id = %id,
            update = ?update,
            status = updated.status().kind().as_str(),
            "Milestone recorded"
        );
        Ok(updated)
    }
}

impl std::fmt::Debug for SummaryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SummaryService")
            .field("rates", &self.rates)
            .field("start_year", &self.start_year)
            .finish_non_exhaustive()
    }
}
