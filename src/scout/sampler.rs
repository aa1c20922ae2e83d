//! Random sampling of candidates from the boosts listing.

use crate::scout::error::ScoutError;
use crate::types::TokenCandidate;
use rand::seq::index;
use rand::Rng;
use serde_json::Value;
use tracing::warn;

/// Draw up to `sample_size` candidates from the listing body, uniformly at
/// random without replacement.
///
/// The body must be a JSON array; anything else aborts the run with
/// [`ScoutError::Format`]. Entries that do not carry a `tokenAddress` are
/// skipped with a warning and do not count against the sample.
pub fn sample_candidates<R: Rng + ?Sized>(
    listing: &Value,
    sample_size: usize,
    rng: &mut R,
) -> Result<Vec<TokenCandidate>, ScoutError> {
    let entries = listing
        .as_array()
        .ok_or(ScoutError::Format("listing response is not an array"))?;

    let count = entries.len().min(sample_size);
    let mut candidates = Vec::with_capacity(count);

    for idx in index::sample(rng, entries.len(), count) {
        match serde_json::from_value::<TokenCandidate>(entries[idx].clone()) {
            Ok(candidate) => candidates.push(candidate),
            Err(e) => warn!("Skipping malformed listing entry: {}", e),
        }
    }

    Ok(candidates)
}
