//! Domain types: bars, validated price series, trades, portfolio state.

pub mod bar;
pub mod portfolio;
pub mod trade;

pub use bar::{Bar, PriceSeries};
pub use portfolio::PortfolioState;
pub use trade::{EquityPoint, Trade, TradeAction};
