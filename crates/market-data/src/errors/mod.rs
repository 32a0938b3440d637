//! Error types for the market data crate.
//!
//! Every variant here is absorbed by [`crate::fetcher::QuoteFetcher`]: from
//! the caller's point of view a quote fetch cannot fail, it can only degrade
//! to synthetic output. The variants exist so the retry loop and the logs can
//! say what actually went wrong.

use thiserror::Error;

/// Errors that can occur while talking to a live market data source.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The provider has no listing for the symbol.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The provider answered but the current price was missing, zero, or
    /// negative. Treated the same as any other failed attempt.
    #[error("No usable price for {symbol}")]
    NoUsablePrice {
        /// The symbol the price was requested for
        symbol: String,
    },

    /// The symbol exists but has no quotes in the requested period.
    #[error("No data for date range")]
    NoDataForRange,

    /// A provider-specific error occurred.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = MarketDataError::SymbolNotFound("ZZZQ".to_string());
        assert_eq!(format!("{}", error), "Symbol not found: ZZZQ");

        let error = MarketDataError::NoUsablePrice {
            symbol: "AAPL".to_string(),
        };
        assert_eq!(format!("{}", error), "No usable price for AAPL");

        let error = MarketDataError::ProviderError {
            provider: "YAHOO".to_string(),
            message: "Internal server error".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Provider error: YAHOO - Internal server error"
        );
    }
}
