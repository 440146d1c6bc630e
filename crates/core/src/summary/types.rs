//! Summary types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::fiscal::Quarter;
use crate::transaction::Transaction;

/// Declaration figures for one quarter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuarterSummary {
    /// The quarter.
    pub quarter: Quarter,
    /// Revenue-bearing transactions settled in the quarter.
    pub transactions: Vec<Transaction>,
    /// Sum of the transactions' amounts.
    pub amount_to_declare: Decimal,
    /// Estimated contribution liability (≤ 0).
    pub planned_cotisation: Decimal,
}

/// A projected figure next to its realized counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectedRealized {
    /// Figure including unpaid transactions.
    pub projected: Decimal,
    /// Figure on paid transactions only.
    pub realized: Decimal,
}

/// All figures for one calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearSummary {
    /// The summarized year.
    pub year: i32,
    /// Every transaction attributed to the year.
    pub transactions: Vec<Transaction>,
    /// The four quarters, in calendar order.
    pub quarters: Vec<QuarterSummary>,
    /// Revenue ("chiffre d'affaires").
    pub revenue: ProjectedRealized,
    /// Net income after contributions.
    pub net_income: ProjectedRealized,
}

impl YearSummary {
    /// Returns the summary of one quarter.
    #[must_use]
    pub fn quarter(&self, quarter: Quarter) -> Option<&QuarterSummary> {
        self.quarters.iter().find(|q| q.quarter == quarter)
    }
}
