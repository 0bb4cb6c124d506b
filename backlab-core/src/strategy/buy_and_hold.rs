//! Buy & hold — one buy on the first bar, then nothing.
//!
//! The spend is `buy_fraction * initial_cash`, fixed at construction so
//! the decision itself stays portfolio-blind. No sell ever fires; final
//! equity marks the open position at the last close.

use crate::domain::PriceSeries;

use super::{Decision, SpendIntent, Strategy};

#[derive(Debug, Clone)]
pub struct BuyAndHold {
    spend: f64,
}

impl BuyAndHold {
    pub fn new(buy_fraction: f64, initial_cash: f64) -> Self {
        assert!(
            buy_fraction > 0.0 && buy_fraction <= 1.0,
            "buy_fraction must be in (0, 1]"
        );
        Self {
            spend: buy_fraction * initial_cash,
        }
    }
}

impl Strategy for BuyAndHold {
    fn name(&self) -> &'static str {
        "buy_and_hold"
    }

    fn warmup_bars(&self) -> usize {
        0
    }

    fn decide(&self, _series: &PriceSeries, bar_index: usize) -> Decision {
        if bar_index == 0 {
            Decision::Buy(SpendIntent::Fixed(self.spend))
        } else {
            Decision::Hold
        }
    }
}
