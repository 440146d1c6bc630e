//! Property-based tests for the summarization engine.

use chrono::{Datelike, Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::cotisation::CotisationRates;
use super::engine::{belongs_to_year, sum_amounts, summarize_quarter, summarize_year};
use crate::fiscal::Quarter;
use crate::transaction::{Transaction, TransactionType};

fn kind_strategy() -> impl Strategy<Value = TransactionType> {
    prop_oneof![
        Just(TransactionType::School),
        Just(TransactionType::Development),
        Just(TransactionType::Training),
        Just(TransactionType::Contribution),
        Just(TransactionType::Subsidy),
    ]
}

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (2022i32..=2025, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

/// Amounts in cents, between -5 000.00 and 20 000.00.
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (-500_000i64..2_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn transaction_strategy() -> impl Strategy<Value = Transaction> {
    (
        0u32..1_000_000,
        amount_strategy(),
        kind_strategy(),
        prop::option::of(date_strategy()),
        prop::option::of(0u64..120),
    )
        .prop_map(|(n, amount, kind, invoiced_on, delay)| {
            let mut tx = Transaction::new(format!("rec{n}").as_str(), amount, kind);
            tx.invoiced_on = invoiced_on;
            // Payment only ever follows an invoice.
            tx.paid_on = invoiced_on
                .zip(delay)
                .and_then(|(date, days)| date.checked_add_days(Days::new(days)));
            tx
        })
}

fn transactions_strategy() -> impl Strategy<Value = Vec<Transaction>> {
    prop::collection::vec(transaction_strategy(), 0..40)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Each quarter declares exactly the sum of its transactions.
    #[test]
    fn prop_quarter_amount_is_sum_of_transactions(
        transactions in transactions_strategy(),
        year in 2022i32..=2025,
    ) {
        let summary = summarize_year(&transactions, year, 2025, &CotisationRates::default());
        for quarter in &summary.quarters {
            prop_assert_eq!(sum_amounts(&quarter.transactions), quarter.amount_to_declare);
        }
    }

    /// The invariant holds for a single quarter over an unfiltered snapshot.
    #[test]
    fn prop_single_quarter_amount_is_sum_of_transactions(
        transactions in transactions_strategy(),
        quarter in prop::sample::select(Quarter::ALL.to_vec()),
        year in 2022i32..=2025,
    ) {
        let summary = summarize_quarter(&transactions, quarter, year, &CotisationRates::default());
        prop_assert_eq!(sum_amounts(&summary.transactions), summary.amount_to_declare);
        prop_assert!(summary.transactions.iter().all(Transaction::is_versement));
    }

    /// Planned contributions are never positive, and zero on nothing to declare.
    #[test]
    fn prop_planned_cotisation_non_positive(
        transactions in transactions_strategy(),
        year in 2022i32..=2025,
    ) {
        let summary = summarize_year(&transactions, year, 2025, &CotisationRates::default());
        for quarter in &summary.quarters {
            prop_assert!(quarter.planned_cotisation <= Decimal::ZERO);
            if quarter.amount_to_declare.is_zero() {
                prop_assert!(quarter.planned_cotisation.is_zero());
                prop_assert!(!quarter.planned_cotisation.is_sign_negative());
            }
        }
    }

    /// Summarizing the same snapshot twice gives the same result.
    #[test]
    fn prop_summary_is_pure(
        transactions in transactions_strategy(),
        year in 2022i32..=2025,
    ) {
        let rates = CotisationRates::default();
        let first = summarize_year(&transactions, year, 2025, &rates);
        let second = summarize_year(&transactions, year, 2025, &rates);
        prop_assert_eq!(first, second);
    }

    /// Quarters only hold paid, revenue-bearing transactions of the year.
    #[test]
    fn prop_quarters_hold_paid_versements_of_year(
        transactions in transactions_strategy(),
        year in 2022i32..=2025,
    ) {
        let summary = summarize_year(&transactions, year, 2025, &CotisationRates::default());
        for quarter in &summary.quarters {
            for tx in &quarter.transactions {
                prop_assert!(tx.is_versement());
                let paid_on = tx.paid_on.unwrap();
                prop_assert_eq!(paid_on.year(), year);
            }
        }
    }

    /// Paid revenue of the year is fully split across the four quarters.
    #[test]
    fn prop_realized_revenue_equals_quarter_total(
        transactions in transactions_strategy(),
        year in 2022i32..=2025,
    ) {
        let summary = summarize_year(&transactions, year, 2025, &CotisationRates::default());
        let declared: Decimal = summary.quarters.iter().map(|q| q.amount_to_declare).sum();
        prop_assert_eq!(declared, summary.revenue.realized);
    }

    /// Every dated transaction is attributed to exactly one year.
    #[test]
    fn prop_dated_transaction_in_one_year(tx in transaction_strategy()) {
        prop_assume!(tx.invoiced_on.is_some());
        let years: Vec<i32> = (2020..=2027)
            .filter(|year| belongs_to_year(&tx, *year, 2025))
            .collect();
        prop_assert_eq!(years.len(), 1);
    }
}
