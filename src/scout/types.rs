//! Configuration and market-data types for the scout pipeline.

use crate::scout::error::ScoutError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Fixed run parameters, built once at startup and passed into each component.
#[derive(Debug, Clone)]
pub struct ScoutConfig {
    /// Boosts listing endpoint
    pub listing_url: String,
    /// Base URL for per-token pair details; the address is appended
    pub details_url: String,
    /// Maximum number of candidates drawn from the listing
    pub sample_size: usize,
    /// Delay between monitor polls
    pub fetch_interval: Duration,
    /// Optional wall-clock bound on the monitor session. `None` polls until
    /// a sell condition fires or the feed errors out.
    pub monitor_duration: Option<Duration>,
    /// Starting cash balance in USD
    pub initial_balance: f64,
    /// Sell when price falls to this fraction of the entry price
    pub sell_drop_threshold: f64,
    /// Sell when price reaches this multiple of the entry price
    pub sell_gain_threshold: f64,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            listing_url: "https://api.dexscreener.com/token-boosts/latest/v1".to_string(),
            details_url: "https://api.dexscreener.com/latest/dex/tokens".to_string(),
            sample_size: 15,
            fetch_interval: Duration::from_secs(10),
            monitor_duration: None,
            initial_balance: 200.0,
            sell_drop_threshold: 0.95,
            sell_gain_threshold: 1.10,
        }
    }
}

/// Response body of the per-token details endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenDetails {
    pub pairs: Option<Vec<TokenPair>>,
}

/// One trading pair as returned by the details endpoint.
///
/// Every market field is optional on the wire; defaults are resolved in one
/// place by [`PairSnapshot::resolve`] so downstream scoring never deals with
/// absence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    #[serde(rename = "baseToken")]
    pub base_token: BaseToken,
    #[serde(rename = "priceUsd")]
    pub price_usd: Option<String>,
    pub txns: Option<Transactions>,
    pub volume: Option<Volume>,
    #[serde(rename = "priceChange")]
    pub price_change: Option<PriceChange>,
    pub liquidity: Option<Liquidity>,
    pub fdv: Option<f64>,
    #[serde(rename = "marketCap")]
    pub market_cap: Option<f64>,
}

/// The token being priced by a pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseToken {
    pub address: String,
    pub name: String,
    pub symbol: String,
}

/// Buy/sell transaction counts per window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transactions {
    pub h24: Option<TransactionCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionCount {
    pub buys: Option<f64>,
    pub sells: Option<f64>,
}

/// Traded volume per window, in USD.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Volume {
    pub h24: Option<f64>,
}

/// Price change percentage per window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceChange {
    pub h24: Option<f64>,
}

/// Pooled liquidity, in USD.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Liquidity {
    pub usd: Option<f64>,
}

/// Resolved view of one pair with all defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct PairSnapshot {
    pub symbol: String,
    pub liquidity_usd: f64,
    pub volume_24h_usd: f64,
    pub buys_24h: f64,
    pub sells_24h: f64,
    pub price_change_24h: f64,
    pub fdv: f64,
    pub market_cap_usd: f64,
    /// Raw price string, when the pair reports one. Scoring never reads it;
    /// the monitor parses it through [`PairSnapshot::price_usd`].
    price_usd: Option<String>,
}

impl PairSnapshot {
    /// Build a snapshot from a wire pair, resolving defaults:
    /// liquidity/volume/txns to 0, fdv to 1, market cap to fdv.
    pub fn resolve(pair: &TokenPair) -> Self {
        let txns_24h = pair.txns.as_ref().and_then(|t| t.h24.as_ref());
        let fdv = pair.fdv.unwrap_or(1.0);

        Self {
            symbol: pair.base_token.symbol.clone(),
            liquidity_usd: pair.liquidity.as_ref().and_then(|l| l.usd).unwrap_or(0.0),
            volume_24h_usd: pair.volume.as_ref().and_then(|v| v.h24).unwrap_or(0.0),
            buys_24h: txns_24h.and_then(|t| t.buys).unwrap_or(0.0),
            sells_24h: txns_24h.and_then(|t| t.sells).unwrap_or(0.0),
            price_change_24h: pair.price_change.as_ref().and_then(|c| c.h24).unwrap_or(0.0),
            fdv,
            market_cap_usd: pair.market_cap.unwrap_or(fdv),
            price_usd: pair.price_usd.clone(),
        }
    }

    /// Price in USD. `Ok(None)` when the pair reports no price; a present but
    /// non-numeric price is an extraction error.
    pub fn price_usd(&self) -> Result<Option<f64>, ScoutError> {
        match &self.price_usd {
            Some(raw) => raw.parse::<f64>().map(Some).map_err(|_| {
                ScoutError::Extraction(format!("priceUsd is not numeric: {raw:?}"))
            }),
            None => Ok(None),
        }
    }

    /// Buys over sells, with the denominator floored at 1.
    pub fn buy_sell_ratio(&self) -> f64 {
        self.buys_24h / self.sells_24h.max(1.0)
    }
}
