//! Year selector and year summary routes.

use axum::{Json, Router, extract::State, routing::get};
use compta_core::fiscal::Quarter;
use compta_core::search::filter_transactions;
use compta_core::summary::{ProjectedRealized, QuarterSummary};
use compta_shared::{AppError, format_amount};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::transactions::TransactionResponse;
use crate::{
    AppState,
    error::ApiError,
    extract::{Path, Query},
};

/// Creates the year routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/years", get(list_years))
        .route("/years/{year}/summary", get(year_summary))
}

/// Selectable years.
#[derive(Debug, Serialize)]
pub struct YearsResponse {
    /// Years from the current one back to the first configured year.
    pub years: Vec<i32>,
    /// The current year.
    pub current_year: i32,
}

/// Query parameters for the year summary.
#[derive(Debug, Default, Deserialize)]
pub struct SummaryQuery {
    /// Free-text search.
    pub q: Option<String>,
    /// Restricts `filtered_transactions` to one quarter (1-4).
    pub quarter: Option<u8>,
}

/// One quarter of the summary.
#[derive(Debug, Serialize)]
pub struct QuarterResponse {
    /// Quarter number.
    pub quarter: Quarter,
    /// Display label.
    pub label: &'static str,
    /// Revenue-bearing transactions settled in the quarter.
    pub transactions: Vec<TransactionResponse>,
    /// Revenue to declare.
    pub amount_to_declare: Decimal,
    /// Estimated contribution (≤ 0).
    pub planned_cotisation: Decimal,
    /// Display form of `amount_to_declare`.
    pub amount_to_declare_label: String,
    /// Display form of `planned_cotisation`.
    pub planned_cotisation_label: String,
}

impl From<QuarterSummary> for QuarterResponse {
    fn from(summary: QuarterSummary) -> Self {
        Self {
            quarter: summary.quarter,
            label: summary.quarter.label(),
            transactions: summary.transactions.into_iter().map(Into::into).collect(),
            amount_to_declare: summary.amount_to_declare,
            planned_cotisation: summary.planned_cotisation,
            amount_to_declare_label: format_amount(summary.amount_to_declare),
            planned_cotisation_label: format_amount(summary.planned_cotisation),
        }
    }
}

/// Year summary.
#[derive(Debug, Serialize)]
pub struct YearSummaryResponse {
    /// Summarized year.
    pub year: i32,
    /// The current year.
    pub current_year: i32,
    /// Every transaction of the year.
    pub transactions: Vec<TransactionResponse>,
    /// Transactions matching `q`, within `quarter` when given.
    pub filtered_transactions: Vec<TransactionResponse>,
    /// The four quarters.
    pub quarters: Vec<QuarterResponse>,
    /// Revenue.
    pub revenue: ProjectedRealized,
    /// Net income.
    pub net_income: ProjectedRealized,
}

/// GET `/years` - List selectable years.
async fn list_years(State(state): State<AppState>) -> Json<YearsResponse> {
    Json(YearsResponse {
        years: state.service.years(),
        current_year: state.service.current_year(),
    })
}

/// GET `/years/{year}/summary` - Summarize a year.
async fn year_summary(
    State(state): State<AppState>,
    Path(year): Path<i32>,
    Query(query): Query<SummaryQuery>,
) -> Result<Json<YearSummaryResponse>, ApiError> {
    if !state.service.is_selectable_year(year) {
        return Err(AppError::Validation(format!("Year {year} is not available")).into());
    }
    let quarter = query.quarter.map(Quarter::try_from).transpose()?;

    let summary = state.service.summarize_year(year).await?;

    let scope = match quarter {
        Some(quarter) => summary
            .quarter(quarter)
            .map(|q| q.transactions.as_slice())
            .unwrap_or_default(),
        None => summary.transactions.as_slice(),
    };
    let filtered_transactions: Vec<TransactionResponse> =
        filter_transactions(scope, query.q.as_deref().unwrap_or_default())
            .into_iter()
            .cloned()
            .map(Into::into)
            .collect();
    debug!(
        year,
        quarter = ?quarter,
        matched = filtered_transactions.len(),
        "Filtered year transactions"
    );

    Ok(Json(YearSummaryResponse {
        year: summary.year,
        current_year: state.service.current_year(),
        filtered_transactions,
        transactions: summary.transactions.into_iter().map(Into::into).collect(),
        quarters: summary.quarters.into_iter().map(Into::into).collect(),
        revenue: summary.revenue,
        net_income: summary.net_income,
    }))
}
