//! Market data provider trait definitions.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::errors::MarketDataError;
use crate::models::PricePoint;

/// Snapshot of the data a live source exposes for one symbol.
///
/// Only the current price is mandatory; the fetcher fills sensible defaults
/// for everything else.
#[derive(Clone, Debug)]
pub struct LiveQuote {
    /// Current market price
    pub price: Decimal,

    /// Previous close, when the source reports one
    pub previous_close: Option<Decimal>,

    /// Display name, when the source reports one
    pub name: Option<String>,

    /// Market capitalisation, when the source reports one
    pub market_cap: Option<Decimal>,

    /// Trading volume, when the source reports one
    pub volume: Option<Decimal>,

    /// Quote currency, when the source reports one
    pub currency: Option<String>,
}

/// Trait for live market data sources.
///
/// The fetcher treats every error from these methods as one failed attempt in
/// its bounded retry loop; implementations never need their own retries.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and error messages.
    fn id(&self) -> &'static str;

    /// Fetch the latest quote snapshot for a symbol.
    async fn latest(&self, symbol: &str) -> Result<LiveQuote, MarketDataError>;

    /// Fetch a daily close series for the date range, oldest first.
    async fn history(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<PricePoint>, MarketDataError>;
}
