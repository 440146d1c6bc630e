//! Transaction routes.

use axum::{Json, Router, extract::State, routing::put};
use chrono::NaiveDate;
use compta_core::transaction::{Transaction, TransactionStatus};
use compta_shared::{AppError, TransactionId, format_amount};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    AppState,
    error::ApiError,
    extract::{Json as JsonBody, Path},
};

/// Creates the transaction routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/transactions/{id}/milestone", put(record_milestone))
}

/// A transaction with its derived status.
#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    /// Stored fields.
    #[serde(flatten)]
    pub transaction: Transaction,
    /// Display amount, e.g. "1 250,50 €".
    pub amount_label: String,
    /// Derived status with its milestone date.
    pub status: TransactionStatus,
    /// Display label, e.g. "Facturé le 10 Février 2024".
    pub status_label: String,
}

impl From<Transaction> for TransactionResponse {
    fn from(transaction: Transaction) -> Self {
        let status = transaction.status();
        let status_label = status.label(transaction.amount);
        Self {
            amount_label: format_amount(transaction.amount),
            transaction,
            status,
            status_label,
        }
    }
}

/// Request body for recording a milestone date.
#[derive(Debug, Deserialize)]
pub struct MilestoneRequest {
    /// Status the client last saw for this transaction.
    pub status: TransactionStatus,
    /// Date to record (YYYY-MM-DD).
    pub date: NaiveDate,
}

/// PUT `/transactions/{id}/milestone` - Invoice a draft or settle a waiting transaction.
async fn record_milestone(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<MilestoneRequest>,
) -> Result<Json<TransactionResponse>, ApiError> {
    let id: TransactionId = id
        .parse()
        .map_err(|_| AppError::Validation("Transaction id must not be empty".to_string()))?;

    let updated = state
        .service
        .record_milestone(&id, &payload.status, payload.date)
        .await?;

    info!(transaction_id = %id, date = %payload.date, "Milestone updated via API");
    Ok(Json(updated.into()))
}
