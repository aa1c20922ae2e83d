//! Error taxonomy for the scout pipeline.

use thiserror::Error;

/// Errors raised while fetching or interpreting market data.
///
/// Per-token evaluation swallows these and skips the token; the monitor loop
/// treats any of them as a reason to close its session. Only a malformed
/// listing aborts the whole run.
#[derive(Debug, Error)]
pub enum ScoutError {
    /// The API answered with a non-200 status.
    #[error("request failed with status {0}")]
    Fetch(u16),

    /// The listing endpoint returned something other than an array.
    #[error("unexpected response format: {0}")]
    Format(&'static str),

    /// A pair field was missing, mistyped, or unparseable.
    #[error("malformed pair data: {0}")]
    Extraction(String),

    /// Transport-level failure from the HTTP client.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
