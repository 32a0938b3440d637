//! Yahoo Finance market data provider.
//!
//! This provider uses the Yahoo Finance API to fetch market data for:
//! - Equities/ETFs (e.g., AAPL, GME)
//! - Cryptocurrencies (e.g., BTC-USD)

mod models;

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use lazy_static::lazy_static;
use rust_decimal::Decimal;
use reqwest::header;
use time::OffsetDateTime;
use tracing::{debug, warn};
use urlencoding::encode;
use yahoo_finance_api as yahoo;

use crate::errors::MarketDataError;
use crate::models::PricePoint;
use crate::provider::{LiveQuote, QuoteProvider};

use models::YahooQuoteSummaryResponse;

// ============================================================================
// Crumb/Cookie Authentication
// ============================================================================

/// Cached Yahoo authentication data
#[derive(Debug, Clone)]
struct CrumbData {
    cookie: String,
    crumb: String,
}

lazy_static! {
    /// Global cache for Yahoo authentication crumb
    static ref YAHOO_CRUMB: RwLock<Option<CrumbData>> = RwLock::default();
}

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

// ============================================================================
// Yahoo Provider
// ============================================================================

/// Yahoo Finance market data provider.
///
/// The quoteSummary endpoint (crumb-authenticated) supplies the current
/// price, previous close, display name, market cap and volume in one call;
/// the chart endpoint supplies daily history.
pub struct YahooProvider {
    connector: yahoo::YahooConnector,
}

impl YahooProvider {
    /// Create a new Yahoo Finance provider.
    pub fn new() -> Result<Self, MarketDataError> {
        let connector =
            yahoo::YahooConnector::new().map_err(|e| MarketDataError::ProviderError {
                provider: "YAHOO".to_string(),
                message: format!("Failed to initialize Yahoo connector: {}", e),
            })?;
        Ok(Self { connector })
    }

    // ========================================================================
    // Crumb/Cookie Authentication
    // ========================================================================

    /// Ensure we have a valid Yahoo authentication crumb.
    async fn ensure_crumb(&self) -> Result<CrumbData, MarketDataError> {
        {
            let guard = YAHOO_CRUMB.read().unwrap();
            if let Some(crumb) = guard.as_ref() {
                return Ok(crumb.clone());
            }
        }

        self.fetch_crumb().await
    }

    /// Fetch a new Yahoo authentication crumb.
    async fn fetch_crumb(&self) -> Result<CrumbData, MarketDataError> {
        let client = reqwest::Client::new();

        // Step 1: Get cookie from fc.yahoo.com
        let response = client
            .get("https://fc.yahoo.com")
            .send()
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: "YAHOO".to_string(),
                message: format!("Failed to get cookie: {}", e),
            })?;

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.split_once(';').map(|(v, _)| v.to_string()))
            .ok_or_else(|| MarketDataError::ProviderError {
                provider: "YAHOO".to_string(),
                message: "Failed to parse Yahoo cookie".to_string(),
            })?;

        // Step 2: Get crumb using cookie
        let crumb = client
            .get("https://query1.finance.yahoo.com/v1/test/getcrumb")
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::COOKIE, &cookie)
            .send()
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: "YAHOO".to_string(),
                message: format!("Failed to get crumb: {}", e),
            })?
            .text()
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: "YAHOO".to_string(),
                message: format!("Failed to read crumb: {}", e),
            })?;

        let crumb_data = CrumbData { cookie, crumb };

        let mut guard = YAHOO_CRUMB.write().unwrap();
        *guard = Some(crumb_data.clone());

        Ok(crumb_data)
    }

    /// Clear the cached crumb (used when authentication fails)
    fn clear_crumb(&self) {
        let mut guard = YAHOO_CRUMB.write().unwrap();
        *guard = None;
    }

    // ========================================================================
    // Quote Fetching
    // ========================================================================

    /// Convert chrono DateTime<Utc> to time::OffsetDateTime for the Yahoo API.
    fn chrono_to_offset_datetime(dt: DateTime<Utc>) -> OffsetDateTime {
        OffsetDateTime::from_unix_timestamp(dt.timestamp())
            .unwrap_or_else(|_| OffsetDateTime::now_utc())
    }

    /// Fetch the full quote snapshot via the quoteSummary API.
    async fn fetch_latest_primary(&self, symbol: &str) -> Result<LiveQuote, MarketDataError> {
        let crumb = self.ensure_crumb().await?;

        let url = format!(
            "https://query1.finance.yahoo.com/v10/finance/quoteSummary/{}?modules=price,summaryDetail&crumb={}",
            encode(symbol),
            encode(&crumb.crumb)
        );

        let client = reqwest::Client::new();
        let response = client
            .get(&url)
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::COOKIE, &crumb.cookie)
            .send()
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: "YAHOO".to_string(),
                message: format!("Quote request failed: {}", e),
            })?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            self.clear_crumb();
            return Err(MarketDataError::ProviderError {
                provider: "YAHOO".to_string(),
                message: "Yahoo authentication expired".to_string(),
            });
        }

        let data: YahooQuoteSummaryResponse =
            response
                .json()
                .await
                .map_err(|e| MarketDataError::ProviderError {
                    provider: "YAHOO".to_string(),
                    message: format!("Failed to parse quote response: {}", e),
                })?;

        let result = data
            .quote_summary
            .result
            .into_iter()
            .next()
            .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))?;

        let price = result
            .price
            .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))?;
        let detail = result.summary_detail;

        let current = price
            .regular_market_price
            .as_ref()
            .and_then(|p| p.raw)
            .and_then(Decimal::from_f64_retain)
            .ok_or_else(|| MarketDataError::NoUsablePrice {
                symbol: symbol.to_string(),
            })?;

        let previous_close = price
            .regular_market_previous_close
            .as_ref()
            .and_then(|p| p.raw)
            .or_else(|| {
                detail
                    .as_ref()
                    .and_then(|d| d.previous_close.as_ref())
                    .and_then(|p| p.raw)
            })
            .and_then(Decimal::from_f64_retain);

        let market_cap = price
            .market_cap
            .as_ref()
            .and_then(|p| p.raw)
            .or_else(|| {
                detail
                    .as_ref()
                    .and_then(|d| d.market_cap.as_ref())
                    .and_then(|p| p.raw)
            })
            .and_then(Decimal::from_f64_retain);

        let volume = price
            .regular_market_volume
            .as_ref()
            .and_then(|p| p.raw)
            .or_else(|| {
                detail
                    .as_ref()
                    .and_then(|d| d.volume.as_ref())
                    .and_then(|p| p.raw)
            })
            .and_then(Decimal::from_f64_retain);

        Ok(LiveQuote {
            price: current,
            previous_close,
            name: price.long_name.or(price.short_name),
            market_cap,
            volume,
            currency: price.currency,
        })
    }

    /// Fetch a bare price via the chart API (backup when quoteSummary fails).
    async fn fetch_latest_backup(&self, symbol: &str) -> Result<LiveQuote, MarketDataError> {
        let response = self
            .connector
            .get_latest_quotes(symbol, "1d")
            .await
            .map_err(|e| {
                if matches!(e, yahoo::YahooError::NoQuotes | yahoo::YahooError::NoResult) {
                    MarketDataError::SymbolNotFound(symbol.to_string())
                } else {
                    MarketDataError::ProviderError {
                        provider: "YAHOO".to_string(),
                        message: e.to_string(),
                    }
                }
            })?;

        let quote = response.last_quote().map_err(|e| {
            warn!("No quotes returned for {}: {}", symbol, e);
            MarketDataError::SymbolNotFound(symbol.to_string())
        })?;

        let price = Decimal::from_f64_retain(quote.close).ok_or_else(|| {
            MarketDataError::NoUsablePrice {
                symbol: symbol.to_string(),
            }
        })?;

        Ok(LiveQuote {
            price,
            previous_close: None,
            name: None,
            market_cap: None,
            volume: Decimal::from_f64_retain(quote.volume as f64),
            currency: None,
        })
    }
}

// ============================================================================
// QuoteProvider Implementation
// ============================================================================

#[async_trait]
impl QuoteProvider for YahooProvider {
    fn id(&self) -> &'static str {
        "YAHOO"
    }

    async fn latest(&self, symbol: &str) -> Result<LiveQuote, MarketDataError> {
        debug!("Fetching latest quote for {} from Yahoo", symbol);

        match self.fetch_latest_primary(symbol).await {
            Ok(quote) => return Ok(quote),
            Err(e) => {
                debug!(
                    "Primary quote fetch failed for {}: {}, trying backup",
                    symbol, e
                );
            }
        }

        self.fetch_latest_backup(symbol).await
    }

    async fn history(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<PricePoint>, MarketDataError> {
        debug!(
            "Fetching history for {} from {} to {} from Yahoo",
            symbol, start, end
        );

        let response = self
            .connector
            .get_quote_history(
                symbol,
                Self::chrono_to_offset_datetime(start),
                Self::chrono_to_offset_datetime(end),
            )
            .await
            .map_err(|e| match e {
                yahoo::YahooError::NoQuotes => MarketDataError::NoDataForRange,
                yahoo::YahooError::NoResult => MarketDataError::SymbolNotFound(symbol.to_string()),
                _ => MarketDataError::ProviderError {
                    provider: "YAHOO".to_string(),
                    message: e.to_string(),
                },
            })?;

        let quotes = response
            .quotes()
            .map_err(|_| MarketDataError::NoDataForRange)?;

        let mut points: Vec<PricePoint> = quotes
            .into_iter()
            .filter_map(|q| {
                let timestamp = Utc.timestamp_opt(q.timestamp as i64, 0).single()?;
                let price = Decimal::from_f64_retain(q.close)?.round_dp(2);
                Some(PricePoint { timestamp, price })
            })
            .collect();
        points.sort_by_key(|p| p.timestamp);

        Ok(points)
    }
}
