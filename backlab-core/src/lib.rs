//! Backlab Core — domain types, strategies, bar-by-bar engine, metrics.
//!
//! This crate contains the heart of the backtester:
//! - Domain types (bars, validated price series, trades, portfolio state)
//! - Strategy trait with three closed variants (ma_cross, dca, buy_and_hold)
//! - Single-pass bar loop producing a trade log and equity curve
//! - Pure metric derivation (returns, drawdown, win rate)
//!
//! Everything here is synchronous, in-memory, and deterministic: a run
//! performs no I/O and two runs with the same inputs produce bit-identical
//! output. Data loading, config files, and reporting live in backlab-runner.

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod indicators;
pub mod metrics;
pub mod strategy;

pub use config::{StrategyConfig, StrategyKind};
pub use engine::{run_backtest, RunResult};
pub use error::{BacktestError, ConfigError, DataError};
pub use metrics::MetricsReport;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: all core types are Send + Sync.
    ///
    /// Independent runs must be safe to launch from separate threads, so no
    /// core type may smuggle in shared mutable state.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<domain::Bar>();
        require_sync::<domain::Bar>();
        require_send::<domain::PriceSeries>();
        require_sync::<domain::PriceSeries>();
        require_send::<domain::Trade>();
        require_sync::<domain::Trade>();
        require_send::<domain::EquityPoint>();
        require_sync::<domain::EquityPoint>();
        require_send::<StrategyConfig>();
        require_sync::<StrategyConfig>();
        require_send::<RunResult>();
        require_sync::<RunResult>();
        require_send::<MetricsReport>();
        require_sync::<MetricsReport>();
    }

    /// Architecture contract: the Strategy trait does NOT see the portfolio.
    ///
    /// `decide()` takes only the price series and a bar index. Cash and
    /// position constraints are the engine's job; a strategy expresses an
    /// intent and the engine clips it. If someone adds a portfolio parameter
    /// the trait changes and every implementation breaks loudly.
    #[test]
    fn strategy_trait_has_no_portfolio_parameter() {
        fn _check_trait_object_builds(
            strat: &dyn strategy::Strategy,
            series: &domain::PriceSeries,
        ) -> strategy::Decision {
            strat.decide(series, 0)
        }
    }
}
