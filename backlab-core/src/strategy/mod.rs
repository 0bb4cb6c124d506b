//! Strategy dispatch: a closed set of per-bar decision rules.
//!
//! A strategy sees the price series and the current bar index, nothing
//! else. It expresses an intent (`Buy` with a spend intent, `Sell`,
//! `Hold`); the engine owns cash and position state and clips the intent
//! to what is actually affordable. Keeping the portfolio out of the trait
//! signature makes lookahead and state leaks impossible by construction.

pub mod buy_and_hold;
pub mod dca;
pub mod ma_cross;

pub use buy_and_hold::BuyAndHold;
pub use dca::Dca;
pub use ma_cross::MaCross;

use crate::config::{StrategyConfig, StrategyKind};
use crate::domain::PriceSeries;
use crate::error::ConfigError;

/// How much cash a buy decision wants to deploy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpendIntent {
    /// Everything currently available.
    AllCash,
    /// A fixed dollar amount (clipped to available cash by the engine).
    Fixed(f64),
}

/// Per-bar decision produced by a strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decision {
    Buy(SpendIntent),
    Sell,
    Hold,
}

/// A bar-by-bar decision rule.
pub trait Strategy: std::fmt::Debug {
    fn name(&self) -> &'static str;

    /// Bars needed before the first decision can fire. A warmup longer
    /// than the series is not an error; the strategy simply never fires.
    fn warmup_bars(&self) -> usize;

    /// One-time hook before the bar loop, for precomputing derived series
    /// (e.g. moving averages). Default: nothing to precompute.
    fn prepare(&mut self, _series: &PriceSeries) {}

    /// Decide for the bar at `bar_index`, using only data through that bar.
    fn decide(&self, series: &PriceSeries, bar_index: usize) -> Decision;
}

/// Build a strategy from a validated configuration.
///
/// Validation runs first, so a schema violation surfaces before any
/// simulation state exists. The match is exhaustive: adding a variant to
/// `StrategyKind` without a constructor here is a compile error.
pub fn build_strategy(config: &StrategyConfig) -> Result<Box<dyn Strategy>, ConfigError> {
    config.validate()?;
    let strategy: Box<dyn Strategy> = match config.kind {
        StrategyKind::MaCross {
            short_window,
            long_window,
        } => Box::new(MaCross::new(short_window, long_window)),
        StrategyKind::Dca {
            interval_days,
            buy_amount,
        } => Box::new(Dca::new(interval_days, buy_amount)),
        StrategyKind::BuyAndHold { buy_fraction } => {
            Box::new(BuyAndHold::new(buy_fraction, config.initial_cash))
        }
    };
    Ok(strategy)
}
