//! Simple Moving Average (SMA).
//!
//! Rolling mean of close prices over a lookback window.
//! Lookback: period - 1 (first valid value at index period-1).

use crate::domain::PriceSeries;

#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "SMA period must be >= 1");
        Self { period }
    }

    pub fn lookback(&self) -> usize {
        self.period.saturating_sub(1)
    }

    /// Compute the SMA for every bar; entries before the first full window
    /// are NaN. A period longer than the series yields an all-NaN vector.
    pub fn compute(&self, series: &PriceSeries) -> Vec<f64> {
        let bars = series.bars();
        let n = bars.len();
        let mut result = vec![f64::NAN; n];

        if n < self.period {
            return result;
        }

        // Initial window sum, then roll forward. Closes are validated
        // positive at series construction, so no NaN handling is needed.
        let mut sum: f64 = bars.iter().take(self.period).map(|b| b.close).sum();
        result[self.period - 1] = sum / self.period as f64;

        for i in self.period..n {
            sum += bars[i].close - bars[i - self.period].close;
            result[i] = sum / self.period as f64;
        }

        result
    }
}
