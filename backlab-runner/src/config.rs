//! Serializable run configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use backlab_core::StrategyConfig;

/// Unique identifier for a run (content-addressable hash).
pub type RunId = String;

/// Where the price series comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum DataConfig {
    /// A local CSV file with `date,close` columns.
    Csv { path: PathBuf },
    /// A deterministic random-walk series (debug/demo data).
    Synthetic {
        bars: usize,
        seed: u64,
        start_price: f64,
        #[serde(default)]
        daily_drift: f64,
        #[serde(default = "default_daily_vol")]
        daily_vol: f64,
    },
}

fn default_daily_vol() -> f64 {
    0.01
}

/// Everything needed to reproduce a backtest run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Strategy and initial cash.
    pub strategy: StrategyConfig,

    /// Price series source.
    pub data: DataConfig,
}

impl RunConfig {
    /// Deterministic hash ID for this configuration.
    ///
    /// Two runs with identical configs share a RunId, so artifacts can be
    /// looked up without re-running.
    pub fn run_id(&self) -> RunId {
        let json = serde_json::to_string(self).expect("RunConfig serialization failed");
        let hash = blake3::hash(json.as_bytes());
        hash.to_hex().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backlab_core::StrategyKind;

    fn sample() -> RunConfig {
        RunConfig {
            strategy: StrategyConfig {
                initial_cash: 10_000.0,
                kind: StrategyKind::MaCross {
                    short_window: 20,
                    long_window: 60,
                },
            },
            data: DataConfig::Synthetic {
                bars: 252,
                seed: 42,
                start_price: 100.0,
                daily_drift: 0.0002,
                daily_vol: 0.01,
            },
        }
    }

    #[test]
    fn run_id_is_stable() {
        assert_eq!(sample().run_id(), sample().run_id());
    }

    #[test]
    fn run_id_changes_with_config() {
        let mut other = sample();
        other.strategy.initial_cash = 20_000.0;
        assert_ne!(sample().run_id(), other.run_id());
    }

    #[test]
    fn toml_round_trip() {
        let toml_src = r#"
            [strategy]
            initial_cash = 10000.0
            type = "dca"
            interval_days = 7
            buy_amount = 500.0

            [data]
            source = "csv"
            path = "prices.csv"
        "#;
        let config: RunConfig = toml::from_str(toml_src).unwrap();
        assert_eq!(config.strategy.kind.name(), "dca");
        assert!(matches!(config.data, DataConfig::Csv { .. }));

        let back: RunConfig = toml::from_str(&toml::to_string(&config).unwrap()).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn unknown_strategy_tag_is_rejected_at_parse() {
        let toml_src = r#"
            [strategy]
            initial_cash = 10000.0
            type = "momentum"
            lookback = 12

            [data]
            source = "csv"
            path = "prices.csv"
        "#;
        assert!(toml::from_str::<RunConfig>(toml_src).is_err());
    }

    #[test]
    fn synthetic_defaults_apply() {
        let toml_src = r#"
            [strategy]
            initial_cash = 1000.0
            type = "buy_and_hold"
            buy_fraction = 1.0

            [data]
            source = "synthetic"
            bars = 100
            seed = 7
            start_price = 50.0
        "#;
        let config: RunConfig = toml::from_str(toml_src).unwrap();
        match config.data {
            DataConfig::Synthetic {
                daily_drift,
                daily_vol,
                ..
            } => {
                assert_eq!(daily_drift, 0.0);
                assert_eq!(daily_vol, 0.01);
            }
            _ => panic!("expected synthetic data config"),
        }
    }
}
