//! Report assembly and JSON artifact export.
//!
//! Persisted artifacts carry a `schema_version` field; loading rejects
//! versions newer than this build understands.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use backlab_core::domain::{EquityPoint, Trade};
use backlab_core::MetricsReport;

use crate::config::{RunConfig, RunId};

/// Current schema version for persisted artifacts.
pub const SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

/// Complete, serializable result of a single backtest run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestReport {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    pub run_id: RunId,
    pub config: RunConfig,
    pub metrics: MetricsReport,
    pub equity_curve: Vec<EquityPoint>,
    pub trades: Vec<Trade>,
}

/// Errors from saving or loading report artifacts.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report to '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read report from '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("report serialization failed: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("unsupported schema version {found} (max supported: {max})")]
    UnsupportedSchema { found: u32, max: u32 },
}

impl BacktestReport {
    /// Write this report as pretty JSON to `<dir>/<run_id>.json`.
    ///
    /// Creates the directory if needed and returns the written path.
    pub fn save(&self, dir: &Path) -> Result<PathBuf, ReportError> {
        fs::create_dir_all(dir).map_err(|source| ReportError::Write {
            path: dir.display().to_string(),
            source,
        })?;
        let path = dir.join(format!("{}.json", self.run_id));
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json).map_err(|source| ReportError::Write {
            path: path.display().to_string(),
            source,
        })?;
        Ok(path)
    }

    /// Load a report from a JSON artifact, rejecting unknown schema versions.
    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let json = fs::read_to_string(path).map_err(|source| ReportError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let report: Self = serde_json::from_str(&json)?;
        if report.schema_version > SCHEMA_VERSION {
            return Err(ReportError::UnsupportedSchema {
                found: report.schema_version,
                max: SCHEMA_VERSION,
            });
        }
        Ok(report)
    }
}
