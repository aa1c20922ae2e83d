//! Scout module - candidate sampling, pair scoring, and position monitoring.
//!
//! The pipeline is a single pass: sample candidates from the boosts listing,
//! evaluate each one from its primary trading pair, pick the best score, then
//! monitor that token's price until the position closes.

pub mod data_sources;
pub mod error;
pub mod evaluator;
pub mod monitor;
pub mod report;
pub mod sampler;
pub mod selector;
pub mod types;

// Re-export main types
pub use types::{PairSnapshot, ScoutConfig, TokenDetails, TokenPair};

// Re-export key components
pub use data_sources::{DexClient, PairSource};
pub use error::ScoutError;
pub use evaluator::TokenEvaluator;
pub use monitor::{MonitorState, Position, PositionMonitor};
pub use report::{ConsoleReporter, SellReport, SellReporter};
pub use sampler::sample_candidates;
pub use selector::select_best;
