//! Helius Enhanced Transactions API client
//!
//! ## API Reference
//!
//! Endpoint: POST https://api.helius.xyz/v0/transactions?api-key={key}
//! Body: `{"transactions": ["<signature>"]}`
//! Returns: Array of enhanced transaction records, one per requested signature
//!
//! One request per lookup, no retries. Every failure becomes a [`FetchError`].

use {
    crate::{
        config::Config,
        error::{FetchError, SummaryError},
        raw::RawTransaction,
    },
    async_trait::async_trait,
    serde::Serialize,
};

/// Anything that can turn a transaction identifier into a raw record
#[async_trait]
pub trait TransactionSource: Send + Sync {
    async fn fetch(&self, transaction_id: &str) -> Result<RawTransaction, SummaryError>;
}

#[derive(Debug, Serialize)]
struct TransactionsRequest<'a> {
    transactions: [&'a str; 1],
}

pub struct HeliusFetcher {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl HeliusFetcher {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    async fn request(&self, transaction_id: &str) -> Result<RawTransaction, FetchError> {
        let response = self
            .client
            .post(&self.api_url)
            .query(&[("api-key", self.api_key.as_str())])
            .json(&TransactionsRequest {
                transactions: [transaction_id],
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::new(format!("Helius API error: {}", response.status())));
        }

        let body = response.bytes().await?;
        decode_response(&body)
    }
}

#[async_trait]
impl TransactionSource for HeliusFetcher {
    async fn fetch(&self, transaction_id: &str) -> Result<RawTransaction, SummaryError> {
        // Pasted signatures often carry stray whitespace; it is never part of a signature.
        let transaction_id = transaction_id.trim();
        if transaction_id.is_empty() {
            return Err(SummaryError::InvalidInput(
                "transaction id is empty".to_string(),
            ));
        }

        log::debug!("Requesting transaction {} from {}", transaction_id, self.api_url);

        self.request(transaction_id).await.map_err(|e| {
            log::warn!("Failed to fetch transaction {}: {}", transaction_id, e);
            SummaryError::Fetch(e)
        })
    }
}

/// Decode a response body into its first transaction record
///
/// The body must be a JSON array with at least one element, and that element
/// must carry every field of [`RawTransaction`]. Trailing elements are ignored.
pub fn decode_response(body: &[u8]) -> Result<RawTransaction, FetchError> {
    let records: Vec<serde_json::Value> = serde_json::from_slice(body)?;

    let first = records
        .into_iter()
        .next()
        .ok_or_else(|| FetchError::new("response contained no transactions"))?;

    if first.is_null() {
        return Err(FetchError::new("transaction not found"));
    }

    Ok(serde_json::from_value(first)?)
}
