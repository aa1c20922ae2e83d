//! Position monitor - polls the selected token and closes the position once.
//!
//! The position is a small state machine: `AwaitingEntry` buys at the first
//! observed price, `Holding` waits for a threshold to fire, `Closed` is
//! terminal. Any feed error while open closes the session without a sell.

use crate::scout::data_sources::PairSource;
use crate::scout::error::ScoutError;
use crate::scout::report::{SellReport, SellReporter};
use crate::scout::types::{PairSnapshot, ScoutConfig};
use crate::types::EvaluatedToken;
use chrono::Utc;
use tokio::time::{sleep, Instant};
use tracing::{info, instrument, warn};

/// Lifecycle of the single simulated position.
#[derive(Debug, Clone, PartialEq)]
pub enum MonitorState {
    AwaitingEntry,
    Holding { bought_price: f64, units_held: f64 },
    Closed,
}

/// A closed sale, before it is stamped into a [`SellReport`].
#[derive(Debug, Clone, PartialEq)]
pub struct ClosedSale {
    pub bought_price: f64,
    pub sell_price: f64,
    pub profit: f64,
    pub cash_balance: f64,
}

/// Whether a price observation triggers the sell rule against the entry price.
pub fn should_sell(bought_price: f64, price: f64, config: &ScoutConfig) -> bool {
    price <= bought_price * config.sell_drop_threshold
        || price >= bought_price * config.sell_gain_threshold
}

/// Cash balance plus the buy-once/sell-once state machine.
#[derive(Debug, Clone)]
pub struct Position {
    state: MonitorState,
    cash_balance: f64,
}

impl Position {
    pub fn new(cash_balance: f64) -> Self {
        Self {
            state: MonitorState::AwaitingEntry,
            cash_balance,
        }
    }

    pub fn state(&self) -> &MonitorState {
        &self.state
    }

    pub fn cash_balance(&self) -> f64 {
        self.cash_balance
    }

    pub fn is_awaiting_entry(&self) -> bool {
        self.state == MonitorState::AwaitingEntry
    }

    /// Buy the full balance at the first observed price. Only transitions out
    /// of `AwaitingEntry`; later calls are no-ops.
    pub fn enter(&mut self, price: f64) {
        if self.state == MonitorState::AwaitingEntry {
            self.state = MonitorState::Holding {
                bought_price: price,
                units_held: self.cash_balance / price,
            };
        }
    }

    /// Close the position if the sell rule fires at this price.
    ///
    /// Realizes `(price - bought_price) * units_held` into the cash balance
    /// and moves to `Closed`. `None` while the rule does not fire or when the
    /// position is not held.
    pub fn try_close(&mut self, price: f64, config: &ScoutConfig) -> Option<ClosedSale> {
        let MonitorState::Holding {
            bought_price,
            units_held,
        } = self.state
        else {
            return None;
        };

        if !should_sell(bought_price, price, config) {
            return None;
        }

        let profit = (price - bought_price) * units_held;
        self.cash_balance += profit;
        self.state = MonitorState::Closed;

        Some(ClosedSale {
            bought_price,
            sell_price: price,
            profit,
            cash_balance: self.cash_balance,
        })
    }
}

/// Polls the pair feed for one token and drives a [`Position`] to completion.
pub struct PositionMonitor<S, R> {
    feed: S,
    reporter: R,
    config: ScoutConfig,
}

impl<S: PairSource + Sync, R: SellReporter> PositionMonitor<S, R> {
    pub fn new(feed: S, reporter: R, config: ScoutConfig) -> Self {
        Self {
            feed,
            reporter,
            config,
        }
    }

    /// Monitor the token until the position closes.
    ///
    /// Returns the sell report, or `None` when the session ended without a
    /// sell: a feed error, a vanished pair, a missing price, or the optional
    /// deadline from `config.monitor_duration`.
    #[instrument(skip(self), fields(address = %token.token_address))]
    pub async fn run(&self, token: &EvaluatedToken) -> Option<SellReport> {
        let deadline = self.config.monitor_duration.map(|d| Instant::now() + d);
        let mut position = Position::new(self.config.initial_balance);

        loop {
            let snapshot = match self.fetch_snapshot(&token.token_address).await {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    warn!("Error monitoring token {}: {}", token.token_address, e);
                    return None;
                }
            };

            let price = match snapshot.price_usd() {
                Ok(Some(price)) => price,
                Ok(None) => {
                    warn!("Pair for {} reports no price; closing session", snapshot.symbol);
                    return None;
                }
                Err(e) => {
                    warn!("Error monitoring token {}: {}", token.token_address, e);
                    return None;
                }
            };

            info!("Monitoring {}: current price ${:.10}", snapshot.symbol, price);

            if position.is_awaiting_entry() {
                // A position cannot open at a non-positive price: the balance
                // would buy infinite units and later sells would realize NaN
                if price <= 0.0 {
                    warn!(
                        "Pair for {} reports non-positive entry price {}; closing session",
                        snapshot.symbol, price
                    );
                    return None;
                }
                position.enter(price);
                info!("Bought {} at ${:.10}", snapshot.symbol, price);
            }

            if let Some(sale) = position.try_close(price, &self.config) {
                let report = SellReport {
                    token_name: snapshot.symbol,
                    bought_price: sale.bought_price,
                    sell_price: sale.sell_price,
                    profit: sale.profit,
                    cash_balance: sale.cash_balance,
                    executed_at: Utc::now(),
                };
                self.reporter.report_sell(&report);
                return Some(report);
            }

            if let Some(deadline) = deadline {
                if Instant::now() >= deadline {
                    info!(
                        "Monitor deadline reached for {}; position left open",
                        token.token_address
                    );
                    return None;
                }
            }

            sleep(self.config.fetch_interval).await;
        }
    }

    async fn fetch_snapshot(&self, address: &str) -> Result<PairSnapshot, ScoutError> {
        let pair = self
            .feed
            .primary_pair(address)
            .await?
            .ok_or_else(|| ScoutError::Extraction("token has no pairs data".to_string()))?;
        Ok(PairSnapshot::resolve(&pair))
    }
}
