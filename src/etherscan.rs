use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::config::Config;
use crate::models::TransactionHistory;

pub const START_BLOCK: &str = "0";
pub const END_BLOCK: &str = "99999999";

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("request to {url} timed out after {timeout:?}")]
    Timeout { url: Url, timeout: Duration },
    #[error("request to {url} failed")]
    Transport {
        url: Url,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Clone)]
pub struct EtherscanClient {
    client: reqwest::Client,
    api_url: Url,
    timeout: Duration,
}

#[derive(Deserialize)]
struct TxListEnvelope {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    result: Option<Value>,
}

impl EtherscanClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .context("failed to build reqwest client")?;
        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            timeout: config.request_timeout,
        })
    }

    /// Lists every transaction of `address`, newest first.
    ///
    /// Only transport failures are errors. A response without a `result` array, including
    /// explorer-side errors such as a rejected api key, yields an empty history.
    pub async fn fetch_transactions(
        &self,
        address: &str,
        api_key: &str,
    ) -> Result<TransactionHistory, FetchError> {
        tracing::debug!(
            url = %self.api_url,
            address,
            startblock = START_BLOCK,
            endblock = END_BLOCK,
            "requesting txlist"
        );

        let response = self
            .client
            .get(self.api_url.clone())
            .query(&[
                ("module", "account"),
                ("action", "txlist"),
                ("address", address),
                ("startblock", START_BLOCK),
                ("endblock", END_BLOCK),
                ("sort", "desc"),
                ("apikey", api_key),
            ])
            .send()
            .await
            .map_err(|e| self.fetch_error(e))?;

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) if e.is_timeout() => return Err(self.fetch_error(e)),
            Err(e) => {
                tracing::warn!("failed reading txlist body ({}): {}", status, e);
                return Ok(TransactionHistory::default());
            }
        };

        let history = parse_txlist_body(&body);
        tracing::debug!(%status, records = history.len(), "txlist received");
        Ok(history)
    }

    fn fetch_error(&self, source: reqwest::Error) -> FetchError {
        if source.is_timeout() {
            FetchError::Timeout {
                url: self.api_url.clone(),
                timeout: self.timeout,
            }
        } else {
            FetchError::Transport {
                url: self.api_url.clone(),
                source,
            }
        }
    }
}

/// Extracts the `result` array from a txlist response body, in the order received.
pub fn parse_txlist_body(body: &str) -> TransactionHistory {
    let envelope: TxListEnvelope = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(e) => {
            tracing::warn!("txlist response is not a JSON object: {}", e);
            return TransactionHistory::default();
        }
    };

    match envelope.result {
        Some(Value::Array(records)) => TransactionHistory::from(records),
        Some(other) => {
            tracing::warn!(
                explorer_message = envelope.message.as_deref().unwrap_or(""),
                "explorer returned no transaction list: {}",
                other
            );
            TransactionHistory::default()
        }
        None => {
            tracing::warn!(
                explorer_message = envelope.message.as_deref().unwrap_or(""),
                "txlist response has no result field"
            );
            TransactionHistory::default()
        }
    }
}
