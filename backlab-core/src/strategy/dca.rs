//! Dollar-cost averaging — fixed-amount buy on a fixed bar schedule.
//!
//! The schedule runs on bar index (`bar_index % interval_days == 0`),
//! using the bar index as a proxy for elapsed trading days: only trading
//! days are present in the series. Never sells.

use crate::domain::PriceSeries;

use super::{Decision, SpendIntent, Strategy};

#[derive(Debug, Clone)]
pub struct Dca {
    interval_days: usize,
    buy_amount: f64,
}

impl Dca {
    pub fn new(interval_days: usize, buy_amount: f64) -> Self {
        assert!(interval_days >= 1, "interval_days must be >= 1");
        assert!(buy_amount > 0.0, "buy_amount must be positive");
        Self {
            interval_days,
            buy_amount,
        }
    }
}

impl Strategy for Dca {
    fn name(&self) -> &'static str {
        "dca"
    }

    fn warmup_bars(&self) -> usize {
        0
    }

    fn decide(&self, _series: &PriceSeries, bar_index: usize) -> Decision {
        if bar_index % self.interval_days == 0 {
            Decision::Buy(SpendIntent::Fixed(self.buy_amount))
        } else {
            Decision::Hold
        }
    }
}
