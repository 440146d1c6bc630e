//! Airtable wire types and their mapping to transactions.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate};
use compta_core::format::format_date_iso;
use compta_core::source::{SortKey, SourceError};
use compta_core::transaction::{MilestoneUpdate, Transaction, TransactionType};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payment date column.
pub const FIELD_PAID_ON: &str = "Date Paiement";
/// Invoice date column.
pub const FIELD_INVOICED_ON: &str = "Date Facturation";
/// Amount column.
pub const FIELD_AMOUNT: &str = "Total";
/// Invoice reference column.
pub const FIELD_REFERENCE: &str = "Ref";

/// Returns the column a sort key maps to.
#[must_use]
pub const fn sort_field_name(key: SortKey) -> &'static str {
    match key {
        SortKey::PaidOn => FIELD_PAID_ON,
        SortKey::InvoicedOn => FIELD_INVOICED_ON,
        SortKey::Amount => FIELD_AMOUNT,
        SortKey::Reference => FIELD_REFERENCE,
    }
}

/// One page of `GET /v0/{base}/{table}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListRecordsResponse {
    /// Records on this page.
    #[serde(default)]
    pub records: Vec<AirtableRecord>,
    /// Cursor for the next page; absent on the last page.
    #[serde(default)]
    pub offset: Option<String>,
}

/// A record as returned by Airtable.
#[derive(Debug, Clone, Deserialize)]
pub struct AirtableRecord {
    /// Record id (`recXXXXXXXXXXXXXX`).
    pub id: String,
    /// Column values. Empty cells are omitted by Airtable.
    #[serde(default)]
    pub fields: TransactionFields,
}

/// Columns of the transactions table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionFields {
    /// Payment date.
    #[serde(rename = "Date Paiement", default)]
    pub paid_on: Option<String>,
    /// Invoice date.
    #[serde(rename = "Date Facturation", default)]
    pub invoiced_on: Option<String>,
    /// Mission description.
    #[serde(rename = "Mission", default)]
    pub mission: Option<String>,
    /// Client name.
    #[serde(rename = "Client", default)]
    pub client: Option<String>,
    /// Signed amount.
    #[serde(rename = "Total", default)]
    pub total: Option<Decimal>,
    /// Invoice reference.
    #[serde(rename = "Ref", default)]
    pub reference: Option<String>,
    /// Category label.
    #[serde(rename = "Type", default)]
    pub kind: Option<String>,
    /// Free-text price breakdown.
    #[serde(rename = "Prix", default)]
    pub price: Option<String>,
}

/// Body of `PATCH /v0/{base}/{table}/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateRecordRequest {
    /// Columns to write.
    pub fields: MilestoneFields,
}

/// The milestone columns. Only the one being written is serialized.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MilestoneFields {
    /// Invoice date.
    #[serde(rename = "Date Facturation", skip_serializing_if = "Option::is_none")]
    pub invoiced_on: Option<String>,
    /// Payment date.
    #[serde(rename = "Date Paiement", skip_serializing_if = "Option::is_none")]
    pub paid_on: Option<String>,
}

impl From<MilestoneUpdate> for UpdateRecordRequest {
    fn from(update: MilestoneUpdate) -> Self {
        let fields = match update {
            MilestoneUpdate::InvoicedOn(date) => MilestoneFields {
                invoiced_on: Some(format_date_iso(date)),
                paid_on: None,
            },
            MilestoneUpdate::PaidOn(date) => MilestoneFields {
                invoiced_on: None,
                paid_on: Some(format_date_iso(date)),
            },
        };
        Self { fields }
    }
}

impl AirtableRecord {
    /// Converts the record into a transaction.
    ///
    /// `view_url` is the web view root used to link the record; an empty
    /// string leaves the link unset.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::InvalidRecord` if `Total` or `Type` is missing,
    /// the type is unknown, or a date cannot be parsed.
    pub fn into_transaction(self, view_url: &str) -> Result<Transaction, SourceError> {
        let Self { id, fields } = self;
        let invalid = |reason: String| SourceError::InvalidRecord {
            id: id.clone(),
            reason,
        };

        let amount = fields
            .total
            .ok_or_else(|| invalid(format!("missing {FIELD_AMOUNT}")))?;
        let kind = fields
            .kind
            .as_deref()
            .ok_or_else(|| invalid("missing Type".to_string()))
            .and_then(|label| {
                TransactionType::from_str(label)
                    .map_err(|_| invalid(format!("unknown Type {label:?}")))
            })?;
        let invoiced_on = fields
            .invoiced_on
            .as_deref()
            .map(parse_date)
            .transpose()
            .map_err(|value| invalid(format!("invalid {FIELD_INVOICED_ON} {value:?}")))?;
        let paid_on = fields
            .paid_on
            .as_deref()
            .map(parse_date)
            .transpose()
            .map_err(|value| invalid(format!("invalid {FIELD_PAID_ON} {value:?}")))?;

        let url = (!view_url.is_empty())
            .then(|| format!("{}/{id}", view_url.trim_end_matches('/')));

        let mut transaction = Transaction::new(id.as_str(), amount, kind);
        transaction.reference = fields.reference;
        transaction.mission = fields.mission;
        transaction.client = fields.client;
        transaction.price = fields.price;
        transaction.invoiced_on = invoiced_on;
        transaction.paid_on = paid_on;
        transaction.url = url;
        Ok(transaction)
    }
}

/// Parses an Airtable date cell: `YYYY-MM-DD`, or an RFC 3339 timestamp
/// whose date part is kept. Returns the raw value on failure.
fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.date_naive()))
        .map_err(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use compta_core::transaction::StatusKind;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn record(fields: serde_json::Value) -> AirtableRecord {
        serde_json::from_value(serde_json::json!({ "id": "recTEST", "fields": fields })).unwrap()
    }

    #[test]
    fn test_full_record_maps_every_field() {
        let tx = record(serde_json::json!({
            "Date Paiement": "2024-05-03",
            "Date Facturation": "2024-02-10",
            "Mission": "Audit",
            "Client": "ACME",
            "Total": 1250.5,
            "Ref": "F-2024-002",
            "Type": "Développement",
            "Prix": "5j x 250",
        }))
        .into_transaction("https://airtable.com/tblX/viwY")
        .unwrap();

        assert_eq!(tx.id.as_str(), "recTEST");
        assert_eq!(tx.amount, dec!(1250.5));
        assert_eq!(tx.kind, TransactionType::Development);
        assert_eq!(tx.invoiced_on, NaiveDate::from_ymd_opt(2024, 2, 10));
        assert_eq!(tx.paid_on, NaiveDate::from_ymd_opt(2024, 5, 3));
        assert_eq!(tx.status().kind(), StatusKind::Done);
        assert_eq!(tx.mission.as_deref(), Some("Audit"));
        assert_eq!(tx.client.as_deref(), Some("ACME"));
        assert_eq!(tx.reference.as_deref(), Some("F-2024-002"));
        assert_eq!(tx.price.as_deref(), Some("5j x 250"));
        assert_eq!(tx.url.as_deref(), Some("https://airtable.com/tblX/viwY/recTEST"));
    }

    #[test]
    fn test_sparse_record_is_draft_without_link() {
        let tx = record(serde_json::json!({ "Total": 300, "Type": "École" }))
            .into_transaction("")
            .unwrap();
        assert_eq!(tx.status().kind(), StatusKind::Draft);
        assert!(tx.url.is_none());
        assert!(tx.client.is_none());
    }

    #[test]
    fn test_timestamp_dates_keep_date_part() {
        let tx = record(serde_json::json!({
            "Total": -120,
            "Type": "Cotisation",
            "Date Paiement": "2024-04-01T00:00:00.000Z",
        }))
        .into_transaction("")
        .unwrap();
        assert_eq!(tx.paid_on, NaiveDate::from_ymd_opt(2024, 4, 1));
    }

    #[rstest]
    #[case(serde_json::json!({ "Type": "Formation" }), "missing Total")]
    #[case(serde_json::json!({ "Total": 10 }), "missing Type")]
    #[case(serde_json::json!({ "Total": 10, "Type": "Consulting" }), "unknown Type")]
    #[case(
        serde_json::json!({ "Total": 10, "Type": "Formation", "Date Facturation": "10/02/2024" }),
        "invalid Date Facturation"
    )]
    fn test_invalid_records(#[case] fields: serde_json::Value, #[case] expected: &str) {
        let err = record(fields).into_transaction("").unwrap_err();
        match err {
            SourceError::InvalidRecord { id, reason } => {
                assert_eq!(id, "recTEST");
                assert!(reason.starts_with(expected), "reason was {reason:?}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_update_body_holds_only_planned_field() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        let body = serde_json::to_value(UpdateRecordRequest::from(MilestoneUpdate::PaidOn(date)))
            .unwrap();
        assert_eq!(body, serde_json::json!({ "fields": { "Date Paiement": "2024-06-01" } }));

        let body =
            serde_json::to_value(UpdateRecordRequest::from(MilestoneUpdate::InvoicedOn(date)))
                .unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "fields": { "Date Facturation": "2024-06-01" } })
        );
    }
}
