//! Quarterly revenue and contribution summaries.

pub mod cotisation;
pub mod engine;
pub mod types;

#[cfg(test)]
mod tests;

pub use cotisation::CotisationRates;
pub use engine::{belongs_to_year, sum_amounts, summarize_quarter, summarize_year};
pub use types::{ProjectedRealized, QuarterSummary, YearSummary};
