//! Selection of the best-scoring evaluated token.

use crate::types::EvaluatedToken;

/// Stable max by score: the first of equally scored tokens wins.
///
/// `None` on an empty slice; the caller treats that as "no candidate" and
/// ends the run without error.
pub fn select_best(tokens: &[EvaluatedToken]) -> Option<&EvaluatedToken> {
    let mut best: Option<&EvaluatedToken> = None;
    for token in tokens {
        match best {
            Some(current) if token.score <= current.score => {}
            _ => best = Some(token),
        }
    }
    best
}
