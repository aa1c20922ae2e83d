//! Sell reporting - the presentation sink for closed positions.

use chrono::{DateTime, Utc};
use colored::Colorize;

/// Outcome of a closed position.
#[derive(Debug, Clone)]
pub struct SellReport {
    pub token_name: String,
    pub bought_price: f64,
    pub sell_price: f64,
    pub profit: f64,
    pub cash_balance: f64,
    pub executed_at: DateTime<Utc>,
}

/// Sink for sell events, decoupled from the monitor logic.
pub trait SellReporter: Send + Sync {
    fn report_sell(&self, report: &SellReport);
}

/// Prints the sell line to stdout, red for a loss and green for a gain.
pub struct ConsoleReporter;

impl SellReporter for ConsoleReporter {
    fn report_sell(&self, report: &SellReport) {
        let line = format!(
            "Sold {} at ${:.10}. Profit/Loss: ${:.4}",
            report.token_name, report.sell_price, report.profit
        );
        if report.profit < 0.0 {
            println!("{}", line.red());
        } else {
            println!("{}", line.green());
        }
    }
}
