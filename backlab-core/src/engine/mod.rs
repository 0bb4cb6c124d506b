//! Bar-by-bar simulation loop — the heart of the backtester.
//!
//! One pass over the series, in chronological order. Each bar:
//! 1. Ask the strategy for a decision
//! 2. Resolve a buy intent against available cash (clip, never margin)
//! 3. Resolve a sell by liquidating the full position
//! 4. Record the mark-to-market equity point, trade or no trade
//!
//! A bar acts at most once: buy OR sell, never both. No forced
//! liquidation at the end of the series — final equity marks any open
//! position at the last close.

use serde::Serialize;

use crate::config::StrategyConfig;
use crate::domain::{EquityPoint, PortfolioState, PriceSeries, Trade, TradeAction};
use crate::error::BacktestError;
use crate::strategy::{build_strategy, Decision, SpendIntent};

/// Output of a single backtest run: build-once, never mutated after.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResult {
    pub equity_curve: Vec<EquityPoint>,
    pub trades: Vec<Trade>,
    pub final_equity: f64,
    pub bar_count: usize,
}

/// Run a strategy over a validated price series.
///
/// The configuration is validated before any simulation state is created;
/// a schema violation fails the whole run with no partial output. A series
/// shorter than the strategy's warmup is not an error — the strategy never
/// fires and the curve stays flat at `initial_cash`.
pub fn run_backtest(
    series: &PriceSeries,
    config: &StrategyConfig,
) -> Result<RunResult, BacktestError> {
    let mut strategy = build_strategy(config)?;
    strategy.prepare(series);

    let mut state = PortfolioState::new(config.initial_cash);
    let mut trades: Vec<Trade> = Vec::new();
    let mut equity_curve: Vec<EquityPoint> = Vec::with_capacity(series.len());

    for (bar_index, bar) in series.bars().iter().enumerate() {
        match strategy.decide(series, bar_index) {
            Decision::Buy(intent) => {
                let desired = match intent {
                    SpendIntent::AllCash => state.cash,
                    SpendIntent::Fixed(amount) => amount,
                };
                // A clipped spend of zero buys zero shares: treated as hold.
                if let Some(shares) = state.buy(desired, bar.close) {
                    trades.push(Trade {
                        date: bar.date,
                        action: TradeAction::Buy,
                        shares,
                        price: bar.close,
                        cash_after: state.cash,
                    });
                }
            }
            Decision::Sell => {
                // Selling with no position is a no-op, not an error.
                if let Some(shares) = state.sell_all(bar.close) {
                    trades.push(Trade {
                        date: bar.date,
                        action: TradeAction::Sell,
                        shares,
                        price: bar.close,
                        cash_after: state.cash,
                    });
                }
            }
            Decision::Hold => {}
        }

        equity_curve.push(EquityPoint {
            date: bar.date,
            equity: state.equity(bar.close),
        });
    }

    let final_equity = equity_curve
        .last()
        .map(|point| point.equity)
        .unwrap_or(config.initial_cash);

    Ok(RunResult {
        equity_curve,
        trades,
        final_equity,
        bar_count: series.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StrategyKind;
    use crate::strategy::test_support::series_from_closes;

    fn dca_config(interval: usize, amount: f64, cash: f64) -> StrategyConfig {
        StrategyConfig {
            initial_cash: cash,
            kind: StrategyKind::Dca {
                interval_days: interval,
                buy_amount: amount,
            },
        }
    }

    #[test]
    fn equity_curve_length_matches_series() {
        let series = series_from_closes(&[10.0; 25]);
        let result = run_backtest(&series, &dca_config(5, 100.0, 1000.0)).unwrap();
        assert_eq!(result.equity_curve.len(), 25);
        assert_eq!(result.bar_count, 25);
    }

    #[test]
    fn invalid_config_fails_before_simulation() {
        let series = series_from_closes(&[10.0; 5]);
        let config = StrategyConfig {
            initial_cash: -1.0,
            kind: StrategyKind::BuyAndHold { buy_fraction: 1.0 },
        };
        assert!(run_backtest(&series, &config).is_err());
    }

    #[test]
    fn buy_records_cash_after() {
        let series = series_from_closes(&[10.0, 10.0]);
        let result = run_backtest(&series, &dca_config(1, 30.0, 100.0)).unwrap();
        assert_eq!(result.trades.len(), 2);
        assert!((result.trades[0].cash_after - 70.0).abs() < 1e-10);
        assert!((result.trades[1].cash_after - 40.0).abs() < 1e-10);
    }

    #[test]
    fn exhausted_cash_stops_recording_buys() {
        // 50 cash covers one 50-buy; later scheduled buys clip to zero and
        // are not recorded as trades.
        let series = series_from_closes(&[10.0; 4]);
        let result = run_backtest(&series, &dca_config(1, 50.0, 50.0)).unwrap();
        assert_eq!(result.trades.len(), 1);
        assert_eq!(result.equity_curve.len(), 4);
    }

    #[test]
    fn runs_are_deterministic() {
        let series = series_from_closes(&[10.0, 12.0, 9.0, 15.0, 14.0, 11.0, 16.0]);
        let config = StrategyConfig {
            initial_cash: 1000.0,
            kind: StrategyKind::MaCross {
                short_window: 2,
                long_window: 3,
            },
        };
        let first = run_backtest(&series, &config).unwrap();
        let second = run_backtest(&series, &config).unwrap();
        assert_eq!(first, second);
    }
}
