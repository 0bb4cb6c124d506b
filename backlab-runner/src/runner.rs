//! Single-run execution: load data, run the engine, derive metrics.

use thiserror::Error;

use backlab_core::{run_backtest, BacktestError, MetricsReport};

use crate::config::RunConfig;
use crate::data_loader::{load_series, LoadError};
use crate::report::{BacktestReport, SCHEMA_VERSION};

/// Errors from the runner.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("data error: {0}")]
    Data(#[from] LoadError),

    #[error("backtest error: {0}")]
    Backtest(#[from] BacktestError),
}

/// Execute a run end-to-end and assemble the report.
///
/// Fail-fast ordering: the series is loaded and validated first, then the
/// engine validates the strategy configuration before simulating. Any
/// failure leaves no partial artifacts.
pub fn execute(config: &RunConfig) -> Result<BacktestReport, RunnerError> {
    let series = load_series(&config.data)?;
    let result = run_backtest(&series, &config.strategy)?;
    let metrics = MetricsReport::compute(
        &result.trades,
        &result.equity_curve,
        config.strategy.initial_cash,
    );

    Ok(BacktestReport {
        schema_version: SCHEMA_VERSION,
        run_id: config.run_id(),
        config: config.clone(),
        metrics,
        equity_curve: result.equity_curve,
        trades: result.trades,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DataConfig;
    use backlab_core::{ConfigError, StrategyConfig, StrategyKind};

    fn synthetic_run(kind: StrategyKind) -> RunConfig {
        RunConfig {
            strategy: StrategyConfig {
                initial_cash: 10_000.0,
                kind,
            },
            data: DataConfig::Synthetic {
                bars: 300,
                seed: 42,
                start_price: 100.0,
                daily_drift: 0.0005,
                daily_vol: 0.02,
            },
        }
    }

    #[test]
    fn executes_synthetic_run() {
        let config = synthetic_run(StrategyKind::MaCross {
            short_window: 10,
            long_window: 30,
        });
        let report = execute(&config).unwrap();
        assert_eq!(report.run_id, config.run_id());
        assert_eq!(report.equity_curve.len(), 300);
        assert_eq!(report.metrics.num_trades, report.trades.len());
        assert!((report.metrics.initial_cash - 10_000.0).abs() < 1e-10);
    }

    #[test]
    fn executions_are_reproducible() {
        let config = synthetic_run(StrategyKind::Dca {
            interval_days: 5,
            buy_amount: 250.0,
        });
        let first = execute(&config).unwrap();
        let second = execute(&config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn bad_strategy_config_fails_before_simulation() {
        let config = synthetic_run(StrategyKind::MaCross {
            short_window: 30,
            long_window: 10,
        });
        let err = execute(&config).unwrap_err();
        assert!(matches!(
            err,
            RunnerError::Backtest(BacktestError::Config(
                ConfigError::ShortWindowNotBelowLong { .. }
            ))
        ));
    }

    #[test]
    fn missing_csv_fails_with_data_error() {
        let config = RunConfig {
            strategy: StrategyConfig {
                initial_cash: 1000.0,
                kind: StrategyKind::BuyAndHold { buy_fraction: 1.0 },
            },
            data: DataConfig::Csv {
                path: "/nonexistent/prices.csv".into(),
            },
        };
        assert!(matches!(
            execute(&config).unwrap_err(),
            RunnerError::Data(LoadError::Io { .. })
        ));
    }
}
