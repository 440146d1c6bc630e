//! Airtable record source for Compta.
//!
//! Reads the transactions table page by page and writes milestone dates
//! back with single-field `PATCH` requests.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/v0/{base_id}/{table}` | List records, following `offset` |
//! | GET    | `/v0/{base_id}/{table}/{record_id}` | Read one record |
//! | PATCH  | `/v0/{base_id}/{table}/{record_id}` | Update one record |

pub mod records;

use std::time::Duration;

use async_trait::async_trait;
use compta_core::source::{SortField, SourceError, TransactionSource};
use compta_core::transaction::{MilestoneUpdate, Transaction, order_by_status};
use compta_shared::{AirtableConfig, TransactionId};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use tracing::{debug, info};
use url::Url;

use records::{AirtableRecord, ListRecordsResponse, UpdateRecordRequest, sort_field_name};

/// Client for one Airtable transactions table.
#[derive(Debug, Clone)]
pub struct AirtableClient {
    http: reqwest::Client,
    table_url: Url,
    view_url: String,
}

impl AirtableClient {
    /// Creates a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Config` if the API key is not a valid header
    /// value, the base URL cannot be parsed, or the HTTP client cannot be built.
    pub fn new(config: &AirtableConfig) -> Result<Self, SourceError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", config.api_key))
                .map_err(|_| SourceError::Config("invalid Airtable API key".into()))?,
        );

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| SourceError::Config(e.to_string()))?;

        let mut table_url = Url::parse(&config.base_url)
            .map_err(|e| SourceError::Config(format!("invalid Airtable base URL: {e}")))?;
        table_url
            .path_segments_mut()
            .map_err(|()| SourceError::Config("Airtable base URL cannot be a base".into()))?
            .pop_if_empty()
            .extend(["v0", config.base_id.as_str(), config.table.as_str()]);

        Ok(Self {
            http,
            table_url,
            view_url: config.view_url.clone(),
        })
    }

    fn record_url(&self, id: &TransactionId) -> Url {
        let mut url = self.table_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(id.as_str());
        }
        url
    }

    async fn fetch_page(
        &self,
        sort: &[SortField],
        offset: Option<&str>,
    ) -> Result<ListRecordsResponse, SourceError> {
        let endpoint = format!("GET {}", self.table_url.path());

        let mut query: Vec<(String, String)> = sort
            .iter()
            .enumerate()
            .flat_map(|(i, field)| {
                [
                    (
                        format!("sort[{i}][field]"),
                        sort_field_name(field.key).to_string(),
                    ),
                    (
                        format!("sort[{i}][direction]"),
                        field.direction.as_str().to_string(),
                    ),
                ]
            })
            .collect();
        if let Some(offset) = offset {
            query.push(("offset".to_string(), offset.to_string()));
        }

        let resp = self
            .http
            .get(self.table_url.clone())
            .query(&query)
            .send()
            .await
            .map_err(|e| SourceError::Http {
                endpoint: endpoint.clone(),
                message: e.to_string(),
            })?;

        decode(endpoint, resp).await
    }
}

/// Turns a non-success status into `SourceError::Api` and decodes the body.
async fn decode<T: serde::de::DeserializeOwned>(
    endpoint: String,
    resp: reqwest::Response,
) -> Result<T, SourceError> {
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        return Err(SourceError::Api {
            endpoint,
            status,
            body,
        });
    }

    resp.json().await.map_err(|e| SourceError::Deserialization {
        endpoint,
        message: e.to_string(),
    })
}

#[async_trait]
impl TransactionSource for AirtableClient {
    async fn fetch_transactions(
        &self,
        sort: Option<&[SortField]>,
    ) -> Result<Vec<Transaction>, SourceError> {
        let sort = sort.unwrap_or(&SortField::DEFAULT_ORDER);
        let mut transactions = Vec::new();
        let mut offset: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let page = self.fetch_page(sort, offset.as_deref()).await?;
            pages += 1;
            debug!(
                page = pages,
                records = page.records.len(),
                has_more = page.offset.is_some(),
                "Fetched Airtable page"
            );

            for record in page.records {
                transactions.push(record.into_transaction(&self.view_url)?);
            }

            match page.offset {
                Some(next) => offset = Some(next),
                None => break,
            }
        }

        info!(
            pages,
            transactions = transactions.len(),
            "Fetched transactions from Airtable"
        );
        Ok(order_by_status(transactions))
    }

    async fn fetch_transaction(&self, id: &TransactionId) -> Result<Transaction, SourceError> {
        let url = self.record_url(id);
        let endpoint = format!("GET {}", url.path());

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::Http {
                endpoint: endpoint.clone(),
                message: e.to_string(),
            })?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound(id.clone()));
        }

        let record: AirtableRecord = decode(endpoint, resp).await?;
        record.into_transaction(&self.view_url)
    }

    async fn update_milestone(
        &self,
        id: &TransactionId,
        update: MilestoneUpdate,
    ) -> Result<Transaction, SourceError> {
        let url = self.record_url(id);
        let endpoint = format!("PATCH {}", url.path());

        let resp = self
            .http
            .patch(url)
            .json(&UpdateRecordRequest::from(update))
            .send()
            .await
            .map_err(|e| SourceError::Http {
                endpoint: endpoint.clone(),
                message: e.to_string(),
            })?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound(id.clone()));
        }

        let record: AirtableRecord = decode(endpoint, resp).await?;
        debug!(transaction_id = %id, update = ?update, "Updated Airtable record");
        record.into_transaction(&self.view_url)
    }
}
