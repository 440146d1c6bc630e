//! Year and quarter summarization.
//!
//! Everything here is a pure function of the transaction snapshot, the
//! requested year and the current year.

use chrono::Datelike;
use rust_decimal::Decimal;

use super::cotisation::CotisationRates;
use super::types::{ProjectedRealized, QuarterSummary, YearSummary};
use crate::fiscal::{Quarter, is_in_quarter};
use crate::transaction::Transaction;

/// Returns true if a transaction is attributed to `year`.
///
/// - Paid: the payment year decides.
/// - Invoiced only: the invoice year decides.
/// - Neither: only the current year shows it, whatever year it was created in.
#[must_use]
pub fn belongs_to_year(transaction: &Transaction, year: i32, current_year: i32) -> bool {
    match (transaction.paid_on, transaction.invoiced_on) {
        (Some(paid_on), _) => paid_on.year() == year,
        (None, Some(invoiced_on)) => invoiced_on.year() == year,
        (None, None) => year == current_year,
    }
}

/// Sums the amounts of the given transactions.
pub fn sum_amounts<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Decimal {
    transactions.into_iter().map(|tx| tx.amount).sum()
}

/// Summarizes one quarter of `year`.
///
/// Keeps the revenue-bearing transactions paid within the quarter; the
/// amount to declare is their sum.
#[must_use]
pub fn summarize_quarter(
    transactions: &[Transaction],
    quarter: Quarter,
    year: i32,
    rates: &CotisationRates,
) -> QuarterSummary {
    let quarter_transactions: Vec<Transaction> = transactions
        .iter()
        .filter(|tx| tx.is_versement() && is_in_quarter(tx.paid_on, quarter, year))
        .cloned()
        .collect();

    let amount_to_declare = sum_amounts(&quarter_transactions);

    QuarterSummary {
        quarter,
        transactions: quarter_transactions,
        amount_to_declare,
        planned_cotisation: rates.planned(amount_to_declare),
    }
}

/// Summarizes `year` from the full transaction snapshot.
#[must_use]
pub fn summarize_year(
    transactions: &[Transaction],
    year: i32,
    current_year: i32,
    rates: &CotisationRates,
) -> YearSummary {
    let year_transactions: Vec<Transaction> = transactions
        .iter()
        .filter(|tx| belongs_to_year(tx, year, current_year))
        .cloned()
        .collect();

    let versements: Vec<Transaction> = year_transactions
        .iter()
        .filter(|tx| tx.is_versement())
        .cloned()
        .collect();

    let quarters = Quarter::ALL
        .into_iter()
        .map(|quarter| summarize_quarter(&versements, quarter, year, rates))
        .collect();

    let projected_revenue = sum_amounts(&versements);

    YearSummary {
        year,
        revenue: ProjectedRealized {
            projected: projected_revenue,
            realized: sum_amounts(versements.iter().filter(|tx| tx.is_paid())),
        },
        net_income: ProjectedRealized {
            projected: projected_revenue - rates.contribution(projected_revenue),
            realized: sum_amounts(year_transactions.iter().filter(|tx| tx.is_paid())),
        },
        quarters,
        transactions: year_transactions,
    }
}
