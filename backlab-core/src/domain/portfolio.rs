//! Portfolio state mutated only by the engine during a run.

/// Cash and position for a single-asset run.
///
/// Invariants maintained by the two mutators:
/// - `cash >= 0` (a buy is clipped to available cash, no margin)
/// - `shares_held >= 0` (a sell liquidates at most what is held, no shorts)
///
/// Created fresh for every run and dropped when the run completes, so
/// independent runs never share state.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioState {
    pub cash: f64,
    pub shares_held: f64,
}

impl PortfolioState {
    pub fn new(initial_cash: f64) -> Self {
        Self {
            cash: initial_cash,
            shares_held: 0.0,
        }
    }

    /// Spend up to `desired` cash on shares at `price`.
    ///
    /// Returns the shares actually bought, or `None` when the clipped spend
    /// is zero (nothing to record). Fractional shares are allowed.
    pub fn buy(&mut self, desired: f64, price: f64) -> Option<f64> {
        let spend = desired.min(self.cash);
        if spend <= 0.0 {
            return None;
        }
        let shares = spend / price;
        self.cash -= spend;
        self.shares_held += shares;
        Some(shares)
    }

    /// Liquidate the full position at `price`.
    ///
    /// Returns the shares sold, or `None` when there is no position.
    pub fn sell_all(&mut self, price: f64) -> Option<f64> {
        if self.shares_held <= 0.0 {
            return None;
        }
        let shares = self.shares_held;
        self.cash += shares * price;
        self.shares_held = 0.0;
        Some(shares)
    }

    /// Mark-to-market equity at the given price.
    pub fn equity(&self, price: f64) -> f64 {
        self.cash + self.shares_held * price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buy_converts_cash_to_shares() {
        let mut state = PortfolioState::new(1000.0);
        let shares = state.buy(500.0, 50.0).unwrap();
        assert!((shares - 10.0).abs() < 1e-10);
        assert!((state.cash - 500.0).abs() < 1e-10);
        assert!((state.shares_held - 10.0).abs() < 1e-10);
    }

    #[test]
    fn buy_clips_to_available_cash() {
        let mut state = PortfolioState::new(100.0);
        let shares = state.buy(250.0, 10.0).unwrap();
        assert!((shares - 10.0).abs() < 1e-10);
        assert_eq!(state.cash, 0.0);
    }

    #[test]
    fn buy_with_no_cash_is_noop() {
        let mut state = PortfolioState::new(0.0);
        assert!(state.buy(100.0, 10.0).is_none());
        assert_eq!(state.shares_held, 0.0);
    }

    #[test]
    fn sell_all_liquidates() {
        let mut state = PortfolioState::new(0.0);
        state.shares_held = 5.0;
        let shares = state.sell_all(20.0).unwrap();
        assert!((shares - 5.0).abs() < 1e-10);
        assert!((state.cash - 100.0).abs() < 1e-10);
        assert_eq!(state.shares_held, 0.0);
    }

    #[test]
    fn sell_with_no_position_is_noop() {
        let mut state = PortfolioState::new(100.0);
        assert!(state.sell_all(20.0).is_none());
        assert_eq!(state.cash, 100.0);
    }

    #[test]
    fn equity_is_cash_plus_marked_position() {
        let mut state = PortfolioState::new(1000.0);
        state.buy(600.0, 30.0);
        assert!((state.equity(40.0) - (400.0 + 20.0 * 40.0)).abs() < 1e-10);
    }
}
