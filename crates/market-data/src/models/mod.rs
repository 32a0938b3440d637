//! Data models for the market data crate.

mod forecast;
mod quote;
mod types;

pub use forecast::{Forecast, Trend};
pub use quote::{PricePoint, TickerQuote};
pub use types::AssetKind;
