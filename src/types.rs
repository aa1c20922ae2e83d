//! Core types shared across the dex-scout pipeline.

use serde::{Deserialize, Serialize};

/// A candidate token drawn from the boosts listing.
///
/// Only the address matters to the pipeline; the rest of the provider
/// metadata is carried along untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenCandidate {
    /// The on-chain address of the token
    #[serde(rename = "tokenAddress")]
    pub token_address: String,
    /// Remaining provider fields, kept verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A candidate that survived evaluation, with its composite score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluatedToken {
    /// The on-chain address of the token
    pub token_address: String,
    /// Symbol of the base token on its primary pair
    pub token_name: String,
    /// Composite heuristic score
    pub score: f64,
}
