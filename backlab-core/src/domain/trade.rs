//! Trade log entries and equity curve points.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Direction of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeAction {
    Buy,
    Sell,
}

/// One executed trade, appended to the log during simulation.
///
/// The log is build-once: the engine appends in bar order and never
/// mutates entries afterward. `cash_after` is the portfolio cash balance
/// immediately after the trade settled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub date: NaiveDate,
    pub action: TradeAction,
    pub shares: f64,
    pub price: f64,
    pub cash_after: f64,
}

impl Trade {
    /// Traded notional value (shares x price).
    pub fn notional(&self) -> f64 {
        self.shares * self.price
    }
}

/// Single point in the equity curve: mark-to-market wealth at a bar's close.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityPoint {
    pub date: NaiveDate,
    pub equity: f64,
}
