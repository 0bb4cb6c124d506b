//! Error taxonomy: fatal pre-run validation errors.
//!
//! Degenerate-but-valid conditions (too-short series, zero trades, zero
//! round trips) are never errors; they produce documented fallback values
//! in the engine and metrics instead.

use chrono::NaiveDate;
use thiserror::Error;

/// A strategy configuration that violates its parameter schema.
///
/// Raised before any simulation starts; no partial state is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("initial_cash must be positive and finite, got {0}")]
    NonPositiveInitialCash(f64),

    #[error("ma_cross windows must be >= 1, got short={short}, long={long}")]
    ZeroWindow { short: usize, long: usize },

    #[error("ma_cross requires short_window < long_window, got short={short}, long={long}")]
    ShortWindowNotBelowLong { short: usize, long: usize },

    #[error("dca interval_days must be >= 1")]
    ZeroInterval,

    #[error("dca buy_amount must be positive and finite, got {0}")]
    NonPositiveBuyAmount(f64),

    #[error("buy_and_hold buy_fraction must be in (0, 1], got {0}")]
    BuyFractionOutOfRange(f64),
}

/// A price series that fails basic validation.
///
/// The series is an input precondition (spec: non-empty, strictly
/// date-ordered, positive closes); violations are rejected at
/// `PriceSeries::new` rather than silently miscomputed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    #[error("price series is empty")]
    Empty,

    #[error("price series dates not strictly increasing at index {index}")]
    UnsortedDates { index: usize },

    #[error("duplicate date {date} in price series")]
    DuplicateDate { date: NaiveDate },

    #[error("non-positive close {close} on {date}")]
    NonPositiveClose { date: NaiveDate, close: f64 },
}

/// Top-level engine error.
///
/// Input data errors never reach the engine: `PriceSeries` is validated at
/// construction, so the only way a run can fail is a bad configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BacktestError {
    #[error("invalid strategy configuration: {0}")]
    Config(#[from] ConfigError),
}
