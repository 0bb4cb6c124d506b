//! Price series loading for the runner.
//!
//! Two sources:
//! 1. CSV files with `date,close` columns (extra columns are ignored)
//! 2. A seeded synthetic random walk for demos and debugging
//!
//! Either way the result passes through `PriceSeries::new`, so the engine
//! only ever sees a validated series.

use std::path::Path;

use chrono::{Datelike, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use thiserror::Error;

use backlab_core::domain::{Bar, PriceSeries};
use backlab_core::DataError;

use crate::config::DataConfig;

/// Errors from the data loading layer.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV record {record} in '{path}': {source}")]
    Csv {
        path: String,
        record: usize,
        #[source]
        source: csv::Error,
    },

    #[error("invalid price series: {0}")]
    Validation(#[from] DataError),
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    date: NaiveDate,
    close: f64,
}

/// Load a price series from the configured source.
pub fn load_series(data: &DataConfig) -> Result<PriceSeries, LoadError> {
    match data {
        DataConfig::Csv { path } => load_csv(path),
        DataConfig::Synthetic {
            bars,
            seed,
            start_price,
            daily_drift,
            daily_vol,
        } => {
            let bars = synthetic_series(*bars, *seed, *start_price, *daily_drift, *daily_vol);
            Ok(PriceSeries::new(bars)?)
        }
    }
}

/// Read `date,close` rows from a CSV file and validate them as a series.
pub fn load_csv(path: &Path) -> Result<PriceSeries, LoadError> {
    let display = path.display().to_string();
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: display.clone(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let mut bars = Vec::new();
    for (record, row) in reader.deserialize::<CsvRow>().enumerate() {
        let row = row.map_err(|source| LoadError::Csv {
            path: display.clone(),
            // +1 for the header line
            record: record + 1,
            source,
        })?;
        bars.push(Bar {
            date: row.date,
            close: row.close,
        });
    }

    Ok(PriceSeries::new(bars)?)
}

/// Generate a deterministic random-walk close series over consecutive
/// weekdays (weekends skipped, matching real daily data).
pub fn synthetic_series(
    num_bars: usize,
    seed: u64,
    start_price: f64,
    daily_drift: f64,
    daily_vol: f64,
) -> Vec<Bar> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut date = NaiveDate::from_ymd_opt(2020, 1, 2).expect("valid base date");
    let mut price = start_price;
    let mut bars = Vec::with_capacity(num_bars);

    for _ in 0..num_bars {
        bars.push(Bar { date, close: price });

        let shock: f64 = rng.gen_range(-daily_vol..=daily_vol);
        price = (price * (1.0 + daily_drift + shock)).max(0.01);

        date = next_weekday(date);
    }
    bars
}

fn next_weekday(date: NaiveDate) -> NaiveDate {
    let mut next = date + chrono::Duration::days(1);
    while matches!(next.weekday(), Weekday::Sat | Weekday::Sun) {
        next = next + chrono::Duration::days(1);
    }
    next
}
