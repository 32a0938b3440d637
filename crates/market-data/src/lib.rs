//! StonkGaze Market Data Crate
//!
//! This crate answers one question for the rest of the application: given a
//! ticker symbol that may or may not exist, produce a fully populated quote
//! with a trailing price series, no matter what the live data source is doing.
//!
//! # Overview
//!
//! The market data crate supports:
//! - Live quotes for equities and `<BASE>-USD` crypto pairs via Yahoo Finance
//! - Bounded retries with linear backoff when the live source misbehaves
//! - A static fallback catalogue of well-known symbols
//! - Deterministic symbol-seeded pricing for symbols nobody has heard of
//! - Synthetic random-walk series shaped by an upstream forecast hint
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |   QuoteFetcher   |  (bounded retry state machine)
//! +------------------+
//!        |       \
//!        v        v  (on exhaustion)
//! +------------+  +---------------------+
//! |  Provider  |  |  Fallback catalogue |
//! |  (Yahoo)   |  |  + seeded pricing   |
//! +------------+  +---------------------+
//!        |                 |
//!        v                 v
//! +--------------------------------+
//! |  TickerQuote (+ synthetic      |
//! |  series when history is thin)  |
//! +--------------------------------+
//! ```
//!
//! # Core Types
//!
//! - [`QuoteFetcher`] - the infallible entry point; always returns a quote
//! - [`TickerQuote`] - symbol, prices, percent change, series, provenance flags
//! - [`Forecast`] - trend/volatility hint biasing synthetic series shape
//! - [`QuoteProvider`] - trait implemented by live data sources

pub mod errors;
pub mod fallback;
pub mod fetcher;
pub mod models;
pub mod provider;
pub mod synthetic;

// Re-export all public types from models
pub use models::{AssetKind, Forecast, PricePoint, TickerQuote, Trend};

// Re-export fetcher types
pub use fetcher::QuoteFetcher;

// Re-export provider types
pub use provider::yahoo::YahooProvider;
pub use provider::{LiveQuote, QuoteProvider};

// Re-export fallback types
pub use fallback::{catalogue_entry, seeded_reference_price, FallbackEntry};

// Re-export the series generator
pub use synthetic::generate_series;
