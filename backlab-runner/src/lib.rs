//! Backlab Runner — orchestration around the pure core.
//!
//! This crate builds on `backlab-core` to provide:
//! - Serializable run configuration with content-addressed run IDs
//! - Price series loading from CSV files or a seeded synthetic generator
//! - Single-run execution: load, simulate, derive metrics
//! - JSON report artifacts

pub mod config;
pub mod data_loader;
pub mod report;
pub mod runner;

pub use config::{DataConfig, RunConfig, RunId};
pub use data_loader::{load_series, LoadError};
pub use report::{BacktestReport, ReportError, SCHEMA_VERSION};
pub use runner::{execute, RunnerError};
