//! Bar — the fundamental market data unit — and the validated series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// Daily closing-price observation for a single symbol.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub close: f64,
}

impl Bar {
    /// Basic sanity check: close is finite and strictly positive.
    pub fn is_sane(&self) -> bool {
        self.close.is_finite() && self.close > 0.0
    }
}

/// A validated daily price series.
///
/// Construction enforces the input contract the engine relies on:
/// non-empty, strictly increasing dates, positive finite closes. Once
/// built, the series is read-only — the engine never mutates it, and
/// independent runs can share a reference freely.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    bars: Vec<Bar>,
}

impl PriceSeries {
    /// Validate and wrap a sequence of bars.
    pub fn new(bars: Vec<Bar>) -> Result<Self, DataError> {
        if bars.is_empty() {
            return Err(DataError::Empty);
        }
        for (i, bar) in bars.iter().enumerate() {
            if !bar.is_sane() {
                return Err(DataError::NonPositiveClose {
                    date: bar.date,
                    close: bar.close,
                });
            }
            if i > 0 {
                let prev = &bars[i - 1];
                if bar.date == prev.date {
                    return Err(DataError::DuplicateDate { date: bar.date });
                }
                if bar.date < prev.date {
                    return Err(DataError::UnsortedDates { index: i });
                }
            }
        }
        Ok(Self { bars })
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Close prices in bar order.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }
}
