//! Euro amount display.
//!
//! CRITICAL: Never use floating-point for money calculations.

use rust_decimal::{Decimal, RoundingStrategy};

/// Digit group separator (narrow no-break space).
const GROUP_SEPARATOR: char = '\u{202f}';

/// Separator between the amount and the currency sign (no-break space).
const CURRENCY_SEPARATOR: char = '\u{a0}';

/// Formats an amount in euros the French way, e.g. `1 250,50 €`.
///
/// Always shows two decimals, rounded half away from zero.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let digits = format!("{:.2}", rounded.abs());
    let (units, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (i, digit) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped},{cents}{CURRENCY_SEPARATOR}€")
}
