//! Data sources for fetching token listings and pair details.
//!
//! All external IO goes through [`DexClient`]; the [`PairSource`] trait is the
//! seam that lets the evaluator and monitor run against scripted data in tests.

use crate::scout::error::ScoutError;
use crate::scout::types::{ScoutConfig, TokenDetails, TokenPair};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, instrument};

/// Source of the primary trading pair for a token address.
///
/// Returns `Ok(None)` when the token has no pairs, which callers treat as
/// "no data", not as a failure.
#[async_trait]
pub trait PairSource {
    async fn primary_pair(&self, address: &str) -> Result<Option<TokenPair>, ScoutError>;
}

/// HTTP client for the DexScreener public API.
#[derive(Debug, Clone)]
pub struct DexClient {
    http_client: Client,
    config: ScoutConfig,
}

impl DexClient {
    /// Create a new client over the given HTTP client and config.
    pub fn new(http_client: Client, config: ScoutConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Perform one GET and parse the body as JSON.
    ///
    /// A non-200 status is a [`ScoutError::Fetch`]; no retries.
    #[instrument(skip(self))]
    pub async fn fetch_json(&self, url: &str) -> Result<Value, ScoutError> {
        let response = self.http_client.get(url).send().await?;

        if response.status() != StatusCode::OK {
            return Err(ScoutError::Fetch(response.status().as_u16()));
        }

        let body = response.json::<Value>().await?;
        debug!("Fetched {}", url);
        Ok(body)
    }

    /// Fetch the raw boosts listing body.
    pub async fn latest_boosts(&self) -> Result<Value, ScoutError> {
        self.fetch_json(&self.config.listing_url).await
    }

    fn details_url(&self, address: &str) -> String {
        format!("{}/{}", self.config.details_url, address)
    }
}

#[async_trait]
impl PairSource for DexClient {
    #[instrument(skip(self), fields(address = %address))]
    async fn primary_pair(&self, address: &str) -> Result<Option<TokenPair>, ScoutError> {
        let body = self.fetch_json(&self.details_url(address)).await?;
        let details: TokenDetails = serde_json::from_value(body)
            .map_err(|e| ScoutError::Extraction(format!("details response: {e}")))?;

        Ok(details.pairs.and_then(|pairs| pairs.into_iter().next()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_details_url_appends_address() {
        let client = DexClient::new(Client::new(), ScoutConfig::default());
        assert_eq!(
            client.details_url("So11111111111111111111111111111111111111112"),
            "https://api.dexscreener.com/latest/dex/tokens/So11111111111111111111111111111111111111112"
        );
    }

    #[test]
    fn test_details_with_null_pairs_parses_to_none() {
        let details: TokenDetails =
            serde_json::from_value(json!({ "schemaVersion": "1.0.0", "pairs": null })).unwrap();
        assert!(details.pairs.is_none());
    }

    #[test]
    fn test_details_first_pair_is_primary() {
        let details: TokenDetails = serde_json::from_value(json!({
            "pairs": [
                { "baseToken": { "address": "a", "name": "First", "symbol": "ONE" } },
                { "baseToken": { "address": "b", "name": "Second", "symbol": "TWO" } }
            ]
        }))
        .unwrap();

        let first = details.pairs.unwrap().into_iter().next().unwrap();
        assert_eq!(first.base_token.symbol, "ONE");
    }
}
