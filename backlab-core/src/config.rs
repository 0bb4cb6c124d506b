//! Strategy configuration: a closed tagged variant plus schema validation.
//!
//! Upstream collaborators (config files, or an LLM translating free text
//! into a config) are untrusted: everything is re-validated here before a
//! simulation starts. The variant set is closed — an unknown `type` tag
//! fails at deserialization, never as a silent no-op.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Which strategy to run, with its tag-specific parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StrategyKind {
    /// Moving-average crossover: buy on golden cross, sell on death cross.
    MaCross {
        short_window: usize,
        long_window: usize,
    },
    /// Dollar-cost averaging: fixed-amount buy every `interval_days` bars.
    Dca { interval_days: usize, buy_amount: f64 },
    /// Buy once on the first bar with a fraction of initial cash, then hold.
    BuyAndHold { buy_fraction: f64 },
}

impl StrategyKind {
    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::MaCross { .. } => "ma_cross",
            StrategyKind::Dca { .. } => "dca",
            StrategyKind::BuyAndHold { .. } => "buy_and_hold",
        }
    }
}

/// Full configuration for a single backtest run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyConfig {
    pub initial_cash: f64,
    #[serde(flatten)]
    pub kind: StrategyKind,
}

impl StrategyConfig {
    /// Check every parameter against its schema.
    ///
    /// Called by the engine before any simulation state is created
    /// (fail fast, no partial runs).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.initial_cash.is_finite() && self.initial_cash > 0.0) {
            return Err(ConfigError::NonPositiveInitialCash(self.initial_cash));
        }
        match self.kind {
            StrategyKind::MaCross {
                short_window,
                long_window,
            } => {
                if short_window == 0 || long_window == 0 {
                    return Err(ConfigError::ZeroWindow {
                        short: short_window,
                        long: long_window,
                    });
                }
                if short_window >= long_window {
                    return Err(ConfigError::ShortWindowNotBelowLong {
                        short: short_window,
                        long: long_window,
                    });
                }
            }
            StrategyKind::Dca {
                interval_days,
                buy_amount,
            } => {
                if interval_days == 0 {
                    return Err(ConfigError::ZeroInterval);
                }
                if !(buy_amount.is_finite() && buy_amount > 0.0) {
                    return Err(ConfigError::NonPositiveBuyAmount(buy_amount));
                }
            }
            StrategyKind::BuyAndHold { buy_fraction } => {
                if !(buy_fraction.is_finite() && buy_fraction > 0.0 && buy_fraction <= 1.0) {
                    return Err(ConfigError::BuyFractionOutOfRange(buy_fraction));
                }
            }
        }
        Ok(())
    }
}
