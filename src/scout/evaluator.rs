//! Token evaluation - composite scoring from one pair snapshot.

use crate::scout::data_sources::PairSource;
use crate::scout::error::ScoutError;
use crate::scout::types::PairSnapshot;
use crate::types::{EvaluatedToken, TokenCandidate};
use tracing::{debug, info, instrument, warn};

// Score weights, normalized by FDV
const LIQUIDITY_WEIGHT: f64 = 0.4;
const VOLUME_WEIGHT: f64 = 0.3;
const BUY_SELL_WEIGHT: f64 = 0.2;
const MOMENTUM_WEIGHT: f64 = 0.1;

/// Composite heuristic score of one pair snapshot.
///
/// Pure function of the snapshot: weighted sum of liquidity, 24h volume,
/// buy/sell ratio and 24h price change, normalized by FDV floored at 1.
pub fn score(snapshot: &PairSnapshot) -> f64 {
    (snapshot.liquidity_usd * LIQUIDITY_WEIGHT
        + snapshot.volume_24h_usd * VOLUME_WEIGHT
        + snapshot.buy_sell_ratio() * BUY_SELL_WEIGHT
        + snapshot.price_change_24h * MOMENTUM_WEIGHT)
        / snapshot.fdv.max(1.0)
}

/// Scores candidates from their primary trading pair.
pub struct TokenEvaluator<S> {
    feed: S,
}

impl<S: PairSource + Sync> TokenEvaluator<S> {
    pub fn new(feed: S) -> Self {
        Self { feed }
    }

    /// Evaluate one candidate.
    ///
    /// Returns `None` when the token has no pair data or any field fails to
    /// extract; evaluation failures are logged and never abort the batch.
    #[instrument(skip(self), fields(address = %candidate.token_address))]
    pub async fn evaluate(&self, candidate: &TokenCandidate) -> Option<EvaluatedToken> {
        match self.try_evaluate(candidate).await {
            Ok(evaluated) => evaluated,
            Err(e) => {
                warn!("Error evaluating token {}: {}", candidate.token_address, e);
                None
            }
        }
    }

    async fn try_evaluate(
        &self,
        candidate: &TokenCandidate,
    ) -> Result<Option<EvaluatedToken>, ScoutError> {
        let Some(pair) = self.feed.primary_pair(&candidate.token_address).await? else {
            info!("Token {} has no pairs data", candidate.token_address);
            return Ok(None);
        };

        let snapshot = PairSnapshot::resolve(&pair);
        debug!(
            "MCAP {} FDV {}",
            snapshot.market_cap_usd, snapshot.fdv
        );

        Ok(Some(EvaluatedToken {
            token_address: candidate.token_address.clone(),
            token_name: snapshot.symbol.clone(),
            score: score(&snapshot),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scout::types::TokenPair;
    use async_trait::async_trait;
    use serde_json::json;

    struct FixedFeed {
        pair: Option<TokenPair>,
    }

    #[async_trait]
    impl PairSource for FixedFeed {
        async fn primary_pair(&self, _address: &str) -> Result<Option<TokenPair>, ScoutError> {
            Ok(self.pair.clone())
        }
    }

    struct FailingFeed;

    #[async_trait]
    impl PairSource for FailingFeed {
        async fn primary_pair(&self, _address: &str) -> Result<Option<TokenPair>, ScoutError> {
            Err(ScoutError::Fetch(500))
        }
    }

    fn create_test_candidate() -> TokenCandidate {
        serde_json::from_value(json!({ "tokenAddress": "TestTokenAddress" })).unwrap()
    }

    fn create_test_pair(value: serde_json::Value) -> TokenPair {
        serde_json::from_value(value).unwrap()
    }

    fn snapshot_of(value: serde_json::Value) -> PairSnapshot {
        PairSnapshot::resolve(&create_test_pair(value))
    }

    #[test]
    fn test_score_matches_documented_formula() {
        let snapshot = snapshot_of(json!({
            "baseToken": { "address": "addr", "name": "Test", "symbol": "TST" },
            "liquidity": { "usd": 1000.0 },
            "volume": { "h24": 500.0 },
            "txns": { "h24": { "buys": 10.0, "sells": 5.0 } },
            "fdv": 2000.0,
            "priceChange": { "h24": 3.0 }
        }));

        // (1000*0.4 + 500*0.3 + 2*0.2 + 3*0.1) / 2000
        assert!((score(&snapshot) - 0.27535).abs() < 1e-12);
    }

    #[test]
    fn test_score_with_zero_sells_uses_unit_denominator() {
        let snapshot = snapshot_of(json!({
            "baseToken": { "address": "addr", "name": "Test", "symbol": "TST" },
            "txns": { "h24": { "buys": 10.0, "sells": 0.0 } },
            "fdv": 1.0
        }));

        assert_eq!(score(&snapshot), 10.0 * BUY_SELL_WEIGHT);
    }

    #[test]
    fn test_score_floors_fdv_at_one() {
        let snapshot = snapshot_of(json!({
            "baseToken": { "address": "addr", "name": "Test", "symbol": "TST" },
            "liquidity": { "usd": 10.0 },
            "fdv": 0.0
        }));

        assert_eq!(score(&snapshot), 10.0 * LIQUIDITY_WEIGHT);
    }

    #[tokio::test]
    async fn test_evaluate_produces_symbol_and_score() {
        let evaluator = TokenEvaluator::new(FixedFeed {
            pair: Some(create_test_pair(json!({
                "baseToken": { "address": "addr", "name": "Test", "symbol": "TST" },
                "liquidity": { "usd": 1000.0 },
                "volume": { "h24": 500.0 },
                "txns": { "h24": { "buys": 10.0, "sells": 5.0 } },
                "fdv": 2000.0,
                "priceChange": { "h24": 3.0 }
            }))),
        });

        let evaluated = evaluator.evaluate(&create_test_candidate()).await.unwrap();
        assert_eq!(evaluated.token_address, "TestTokenAddress");
        assert_eq!(evaluated.token_name, "TST");
        assert!((evaluated.score - 0.27535).abs() < 1e-12);
    }

    #[tokio::test]
    async fn test_evaluate_without_pairs_is_no_result() {
        let evaluator = TokenEvaluator::new(FixedFeed { pair: None });
        assert!(evaluator.evaluate(&create_test_candidate()).await.is_none());
    }

    #[tokio::test]
    async fn test_evaluate_swallows_fetch_errors() {
        let evaluator = TokenEvaluator::new(FailingFeed);
        assert!(evaluator.evaluate(&create_test_candidate()).await.is_none());
    }

    #[tokio::test]
    async fn test_evaluate_scores_despite_unparseable_price() {
        // scoring never reads the price; only the monitor needs it
        let evaluator = TokenEvaluator::new(FixedFeed {
            pair: Some(create_test_pair(json!({
                "baseToken": { "address": "addr", "name": "Test", "symbol": "TST" },
                "priceUsd": "garbage",
                "liquidity": { "usd": 1000.0 },
                "fdv": 2000.0
            }))),
        });

        let evaluated = evaluator.evaluate(&create_test_candidate()).await.unwrap();
        assert_eq!(evaluated.token_name, "TST");
        assert!(evaluated.score > 0.0);
    }
}
