//! Moving average crossover — golden cross buys, death cross sells.
//!
//! Crossing is defined on the transition between consecutive bars, not the
//! raw comparison: short MA was <= long MA on the prior bar and is > long
//! MA on the current bar. This prevents repeated buy signals while the
//! short MA merely stays above the long MA.

use crate::domain::PriceSeries;
use crate::indicators::Sma;

use super::{Decision, SpendIntent, Strategy};

#[derive(Debug, Clone)]
pub struct MaCross {
    short_window: usize,
    long_window: usize,
    ma_short: Vec<f64>,
    ma_long: Vec<f64>,
}

impl MaCross {
    /// Window bounds are enforced by `StrategyConfig::validate` before the
    /// factory constructs this; the asserts document the contract.
    pub fn new(short_window: usize, long_window: usize) -> Self {
        assert!(short_window >= 1, "short_window must be >= 1");
        assert!(
            long_window > short_window,
            "long_window must be > short_window"
        );
        Self {
            short_window,
            long_window,
            ma_short: Vec::new(),
            ma_long: Vec::new(),
        }
    }
}

impl Strategy for MaCross {
    fn name(&self) -> &'static str {
        "ma_cross"
    }

    fn warmup_bars(&self) -> usize {
        self.long_window
    }

    fn prepare(&mut self, series: &PriceSeries) {
        self.ma_short = Sma::new(self.short_window).compute(series);
        self.ma_long = Sma::new(self.long_window).compute(series);
    }

    fn decide(&self, _series: &PriceSeries, bar_index: usize) -> Decision {
        // A crossing needs the prior bar's MAs too.
        if bar_index == 0 || bar_index >= self.ma_long.len() {
            return Decision::Hold;
        }

        let short_cur = self.ma_short[bar_index];
        let long_cur = self.ma_long[bar_index];
        let short_prev = self.ma_short[bar_index - 1];
        let long_prev = self.ma_long[bar_index - 1];

        // Bars inside the warmup window have NaN MAs and always hold.
        if short_cur.is_nan() || long_cur.is_nan() || short_prev.is_nan() || long_prev.is_nan() {
            return Decision::Hold;
        }

        if short_prev <= long_prev && short_cur > long_cur {
            return Decision::Buy(SpendIntent::AllCash);
        }
        if short_prev >= long_prev && short_cur < long_cur {
            return Decision::Sell;
        }

        Decision::Hold
    }
}
