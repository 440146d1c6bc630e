//! Date formatting for labels and record store payloads.

use chrono::{Datelike, NaiveDate};

const MONTH_NAMES: [&str; 12] = [
    "Janvier",
    "Février",
    "Mars",
    "Avril",
    "Mai",
    "Juin",
    "Juillet",
    "Août",
    "Septembre",
    "Octobre",
    "Novembre",
    "Décembre",
];

/// Returns the French name of a month (0-based, like `NaiveDate::month0`).
#[must_use]
pub fn month_name(month0: u32) -> &'static str {
    MONTH_NAMES
        .get(month0 as usize)
        .copied()
        .unwrap_or_default()
}

/// Formats a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_date_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Formats a date as `DD <Mois> YYYY`.
#[must_use]
pub fn format_date_fr(date: NaiveDate) -> String {
    format!(
        "{:02} {} {}",
        date.day(),
        month_name(date.month0()),
        date.year()
    )
}
