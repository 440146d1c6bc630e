//! Social contribution ("cotisation") estimate.
//!
//! Two rate tiers apply to declarable revenue. Each tier is rounded to the
//! unit on its own before the two are added; rounding the combined rate once
//! can differ by one unit.

use compta_shared::CotisationConfig;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Contribution rates, as fractions of declarable revenue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CotisationRates {
    /// Main tier.
    pub main: Decimal,
    /// Secondary tier.
    pub secondary: Decimal,
}

impl Default for CotisationRates {
    fn default() -> Self {
        Self {
            main: Decimal::new(212, 3),
            secondary: Decimal::new(2, 3),
        }
    }
}

impl From<&CotisationConfig> for CotisationRates {
    fn from(config: &CotisationConfig) -> Self {
        Self {
            main: config.main_rate,
            secondary: config.secondary_rate,
        }
    }
}

impl CotisationRates {
    /// Returns the contribution owed on `amount`, as a positive magnitude.
    #[must_use]
    pub fn contribution(&self, amount: Decimal) -> Decimal {
        round_unit(amount * self.main) + round_unit(amount * self.secondary)
    }

    /// Returns the planned contribution on `amount` as a liability (≤ 0).
    ///
    /// A zero magnitude yields a plain zero, never a negative zero.
    #[must_use]
    pub fn planned(&self, amount: Decimal) -> Decimal {
        let contribution = self.contribution(amount);
        if contribution.is_zero() {
            Decimal::ZERO
        } else {
            -contribution
        }
    }
}

/// Rounds to the nearest unit, halves away from zero.
fn round_unit(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
