//! Backlab CLI — run backtests from TOML configs.
//!
//! Commands:
//! - `run` — execute a backtest from a TOML config file, print the metrics
//!   summary, and save a JSON report artifact
//! - `init-config` — write a commented example config to get started

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use backlab_runner::{execute, BacktestReport, RunConfig};

#[derive(Parser)]
#[command(name = "backlab", about = "Backlab CLI — daily-bar strategy backtester")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a backtest from a TOML config file.
    Run {
        /// Path to a TOML config file.
        #[arg(long)]
        config: PathBuf,

        /// Output directory for the result JSON.
        #[arg(long, default_value = "results")]
        output_dir: PathBuf,

        /// Print the summary but skip writing the JSON artifact.
        #[arg(long, default_value_t = false)]
        no_save: bool,
    },
    /// Write a commented example config file.
    InitConfig {
        /// Where to write the example config.
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            output_dir,
            no_save,
        } => run_cmd(&config, &output_dir, no_save),
        Commands::InitConfig { path } => init_config_cmd(&path),
    }
}

fn run_cmd(config_path: &PathBuf, output_dir: &PathBuf, no_save: bool) -> Result<()> {
    let toml_src = fs::read_to_string(config_path)
        .with_context(|| format!("failed to read config '{}'", config_path.display()))?;
    let config: RunConfig = toml::from_str(&toml_src)
        .with_context(|| format!("invalid config '{}'", config_path.display()))?;

    let report = execute(&config).context("backtest failed")?;
    print_summary(&report);

    if !no_save {
        let path = report
            .save(output_dir)
            .context("failed to save report artifact")?;
        println!("\nReport saved to {}", path.display());
    }
    Ok(())
}

fn print_summary(report: &BacktestReport) {
    let m = &report.metrics;
    println!("Run {}", report.run_id);
    println!("Strategy:          {}", report.config.strategy.kind.name());
    println!("Bars:              {}", report.equity_curve.len());
    println!("Initial cash:      {:>14.2}", m.initial_cash);
    println!("Final equity:      {:>14.2}", m.final_equity);
    println!("Total return:      {:>13.2}%", m.total_return * 100.0);
    println!("Annualized return: {:>13.2}%", m.annualized_return * 100.0);
    println!("Max drawdown:      {:>13.2}%", m.max_drawdown * 100.0);
    println!("Trades:            {}", m.num_trades);
    println!("Win rate:          {:>13.2}%", m.win_rate * 100.0);
}

const EXAMPLE_CONFIG: &str = r#"# Backlab run configuration.
#
# Strategy variants:
#   type = "ma_cross"      with short_window, long_window
#   type = "dca"           with interval_days, buy_amount
#   type = "buy_and_hold"  with buy_fraction (0 < f <= 1)

[strategy]
initial_cash = 10000.0
type = "ma_cross"
short_window = 20
long_window = 60

# Price data: a CSV file with date,close columns...
#
# [data]
# source = "csv"
# path = "prices.csv"

# ...or a deterministic synthetic random walk.
[data]
source = "synthetic"
bars = 504
seed = 42
start_price = 100.0
daily_drift = 0.0003
daily_vol = 0.02
"#;

fn init_config_cmd(path: &PathBuf) -> Result<()> {
    fs::write(path, EXAMPLE_CONFIG)
        .with_context(|| format!("failed to write '{}'", path.display()))?;
    println!("Example config written to {}", path.display());
    Ok(())
}
