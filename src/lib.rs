//! dex-scout - DexScreener momentum scout with simulated single-position trading.
//!
//! One run samples a handful of boosted tokens, scores each from its primary
//! trading pair, and paper-trades the highest-scoring one until a price
//! threshold closes the position.

pub mod scout;
pub mod types;

// Re-export main types for convenience
pub use types::{EvaluatedToken, TokenCandidate};
