//! Main entry point for the dex-scout pipeline.
//!
//! One run: sample boosted tokens, score each from its primary pair, pick the
//! best, then paper-trade it until a price threshold closes the position.

use anyhow::Result;
use dex_scout::scout::{
    sample_candidates, select_best, ConsoleReporter, DexClient, PositionMonitor, ScoutConfig,
    TokenEvaluator,
};
use tracing::{info, Level};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("Starting dex-scout run");

    let config = ScoutConfig::default();
    let client = DexClient::new(reqwest::Client::new(), config.clone());

    // Fetch the boosts listing and draw the candidate sample
    let listing = client.latest_boosts().await?;
    let candidates = sample_candidates(&listing, config.sample_size, &mut rand::thread_rng())?;
    info!("Sampled {} candidates from the boosts listing", candidates.len());

    // Evaluate candidates one at a time; failures skip the token
    let evaluator = TokenEvaluator::new(client.clone());
    let mut evaluated = Vec::new();
    for candidate in &candidates {
        if let Some(token) = evaluator.evaluate(candidate).await {
            evaluated.push(token);
        }
    }

    if evaluated.is_empty() {
        info!("No valid tokens found.");
        return Ok(());
    }

    info!("Evaluated tokens:");
    for token in &evaluated {
        info!(
            "  Token Address: {} | Token Name: {} | Score: {:.4}",
            token.token_address, token.token_name, token.score
        );
    }

    let Some(best) = select_best(&evaluated) else {
        info!("No valid tokens found.");
        return Ok(());
    };
    info!(
        "Best token selected: {} ({})",
        best.token_name, best.token_address
    );

    // Monitor the selected token until the position closes
    let monitor = PositionMonitor::new(client, ConsoleReporter, config);
    if monitor.run(best).await.is_none() {
        info!("Monitor session ended without a sell");
    }

    Ok(())
}
