//! Performance metrics — pure functions from run outputs to statistics.
//!
//! Every metric is a pure function: equity curve and/or trade log in,
//! scalar out. Degenerate inputs (empty curve, zero trades, zero round
//! trips) produce documented fallback values, never panics or NaN.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::domain::{EquityPoint, Trade, TradeAction};

/// Trading days per year used for annualization.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Aggregate performance metrics for a single backtest run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    pub initial_cash: f64,
    pub final_equity: f64,
    pub total_return: f64,
    pub annualized_return: f64,
    pub max_drawdown: f64,
    pub num_trades: usize,
    pub win_rate: f64,
}

impl MetricsReport {
    /// Compute all metrics from a trade log and equity curve.
    ///
    /// An empty curve reports `final_equity = initial_cash` and zero for
    /// every ratio.
    pub fn compute(trades: &[Trade], equity_curve: &[EquityPoint], initial_cash: f64) -> Self {
        let final_equity = equity_curve
            .last()
            .map(|point| point.equity)
            .unwrap_or(initial_cash);
        let total = total_return(final_equity, initial_cash);
        Self {
            initial_cash,
            final_equity,
            total_return: total,
            annualized_return: annualized_return(total, equity_curve.len()),
            max_drawdown: max_drawdown(equity_curve),
            num_trades: trades.len(),
            win_rate: win_rate(trades),
        }
    }
}

/// Total return as a fraction: final / initial - 1.
pub fn total_return(final_equity: f64, initial_cash: f64) -> f64 {
    if initial_cash <= 0.0 {
        return 0.0;
    }
    final_equity / initial_cash - 1.0
}

/// Annualized return assuming 252 trading days per year.
///
/// With zero or one bars there is nothing to annualize; the total return
/// is reported as-is (0.0 for an empty curve).
pub fn annualized_return(total_return: f64, num_bars: usize) -> f64 {
    if num_bars <= 1 {
        return total_return;
    }
    (1.0 + total_return).powf(TRADING_DAYS_PER_YEAR / num_bars as f64) - 1.0
}

/// Maximum drawdown as a non-negative fraction of the running peak.
///
/// Single forward scan tracking the peak so far; 0.0 for a monotonically
/// non-decreasing curve or an empty one.
pub fn max_drawdown(equity_curve: &[EquityPoint]) -> f64 {
    let mut peak = f64::MIN;
    let mut max_dd = 0.0_f64;

    for point in equity_curve {
        if point.equity > peak {
            peak = point.equity;
        }
        if peak > 0.0 {
            let dd = (peak - point.equity) / peak;
            if dd > max_dd {
                max_dd = dd;
            }
        }
    }
    max_dd
}

/// A matched buy→sell pairing over some number of shares.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundTrip {
    pub shares: f64,
    pub buy_price: f64,
    pub sell_price: f64,
}

impl RoundTrip {
    pub fn is_winner(&self) -> bool {
        self.sell_price > self.buy_price
    }
}

/// Match buys to sells in FIFO order.
///
/// Each buy pushes a lot; each sell consumes lots front-first, producing
/// one round trip per (lot, sell) pairing. Unmatched buys (still-open
/// position at the end of the run) produce no round trip.
pub fn match_round_trips(trades: &[Trade]) -> Vec<RoundTrip> {
    let mut lots: VecDeque<(f64, f64)> = VecDeque::new(); // (shares, buy_price)
    let mut round_trips = Vec::new();

    for trade in trades {
        match trade.action {
            TradeAction::Buy => lots.push_back((trade.shares, trade.price)),
            TradeAction::Sell => {
                let mut remaining = trade.shares;
                while remaining > 1e-12 {
                    let Some(front) = lots.front_mut() else {
                        break;
                    };
                    let take = front.0.min(remaining);
                    round_trips.push(RoundTrip {
                        shares: take,
                        buy_price: front.1,
                        sell_price: trade.price,
                    });
                    front.0 -= take;
                    remaining -= take;
                    if front.0 <= 1e-12 {
                        lots.pop_front();
                    }
                }
            }
        }
    }
    round_trips
}

/// Fraction of completed round trips where the sell price beat the buy
/// price. Zero completed round trips → 0.0.
pub fn win_rate(trades: &[Trade]) -> f64 {
    let round_trips = match_round_trips(trades);
    if round_trips.is_empty() {
        return 0.0;
    }
    let winners = round_trips.iter().filter(|rt| rt.is_winner()).count();
    winners as f64 / round_trips.len() as f64
}
