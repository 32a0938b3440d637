//! Resilient quote fetching with bounded retries and synthetic fallback.
//!
//! The fetcher is the crate's entry point and the one place where live data,
//! the fallback catalogue and the synthetic generator meet. Its contract is
//! total: `fetch_quote` has no error channel. A dead provider, an unknown
//! symbol or a garbage price all degrade to a synthetic quote, and callers
//! inspect the provenance flags to learn which figures are real.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Duration as TimeDelta, Utc};
use log::{debug, info, warn};
use rand::Rng;
use rust_decimal::Decimal;

use crate::errors::MarketDataError;
use crate::fallback::{catalogue_entry, seeded_reference_price};
use crate::models::{AssetKind, Forecast, PricePoint, TickerQuote};
use crate::provider::QuoteProvider;
use crate::synthetic::generate_series;

/// Days of trailing history attached to every quote.
const HISTORY_DAYS: i64 = 7;

/// Relative jitter applied to a fallback reference price for display.
const FALLBACK_JITTER: f64 = 0.02;

/// Bound of the random percent change reported on the fallback path.
const FALLBACK_CHANGE_BOUND: f64 = 3.0;

/// States of the bounded retry loop.
///
/// Modelled explicitly rather than as nested error handling so the exhaustion
/// transition, and the one-time fallback computation it triggers, is
/// unambiguous and testable.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum FetchState {
    /// Live attempt `n` (1-based) is next.
    Attempting(u32),
    /// All live attempts are exhausted; compute the fallback quote.
    Fallback,
}

/// Resilient quote fetcher.
pub struct QuoteFetcher {
    provider: Arc<dyn QuoteProvider>,
    max_retries: u32,
    backoff_unit: Duration,
}

impl QuoteFetcher {
    /// Create a fetcher with the default retry budget (2 retries, 500ms
    /// backoff unit).
    pub fn new(provider: Arc<dyn QuoteProvider>) -> Self {
        Self::with_config(provider, 2, Duration::from_millis(500))
    }

    /// Create a fetcher with an explicit retry budget.
    ///
    /// `backoff_unit` is the base sleep; the sleep after failed attempt `n`
    /// is `backoff_unit * n`, so the total added latency is bounded by
    /// `backoff_unit * max_retries * (max_retries + 1) / 2`.
    pub fn with_config(
        provider: Arc<dyn QuoteProvider>,
        max_retries: u32,
        backoff_unit: Duration,
    ) -> Self {
        Self {
            provider,
            max_retries,
            backoff_unit,
        }
    }

    /// Fetch a quote for `symbol`.
    ///
    /// Never fails: when the live provider cannot produce a usable price
    /// within the retry budget, the result degrades to a synthetic quote
    /// with `synthetic = true`.
    pub async fn fetch_quote(
        &self,
        symbol: &str,
        asset_kind: AssetKind,
        forecast: Option<Forecast>,
    ) -> TickerQuote {
        let original = symbol.trim().to_uppercase();
        let normalized = asset_kind.normalize_symbol(&original);
        let forecast = forecast.unwrap_or_default();

        let mut state = FetchState::Attempting(1);
        loop {
            match state {
                FetchState::Attempting(attempt) => {
                    match self.try_live(&normalized, forecast).await {
                        Ok(quote) => {
                            info!(
                                "Live quote for {} on attempt {} via {}",
                                normalized,
                                attempt,
                                self.provider.id()
                            );
                            return quote;
                        }
                        Err(e) => {
                            warn!(
                                "Live lookup {}/{} for {} failed: {}",
                                attempt,
                                self.max_retries + 1,
                                normalized,
                                e
                            );
                            if attempt > self.max_retries {
                                state = FetchState::Fallback;
                            } else {
                                tokio::time::sleep(self.backoff_unit * attempt).await;
                                state = FetchState::Attempting(attempt + 1);
                            }
                        }
                    }
                }
                FetchState::Fallback => {
                    info!("Serving synthetic quote for {}", normalized);
                    return self.fallback_quote(&original, &normalized, forecast);
                }
            }
        }
    }

    /// Cheap existence check: catalogue first (raw and crypto-suffixed
    /// form), then a single live probe. Errors map to `false`; this path has
    /// no retry and no fallback-to-true.
    pub async fn validate_symbol(&self, symbol: &str) -> bool {
        let symbol = symbol.trim().to_uppercase();
        if catalogue_entry(&symbol).is_some()
            || catalogue_entry(&format!("{symbol}-USD")).is_some()
        {
            return true;
        }

        match self.provider.latest(&symbol).await {
            Ok(live) => live.price > Decimal::ZERO,
            Err(e) => {
                debug!("Validation probe for {} failed: {}", symbol, e);
                false
            }
        }
    }

    /// One live attempt: snapshot plus trailing history.
    async fn try_live(
        &self,
        symbol: &str,
        forecast: Forecast,
    ) -> Result<TickerQuote, MarketDataError> {
        let live = self.provider.latest(symbol).await?;
        if live.price <= Decimal::ZERO {
            return Err(MarketDataError::NoUsablePrice {
                symbol: symbol.to_string(),
            });
        }

        let previous = live.previous_close.unwrap_or(Decimal::ZERO);
        let change = TickerQuote::change_percent(live.price, previous);

        let end = Utc::now();
        let start = end - TimeDelta::days(HISTORY_DAYS);
        let (history, history_synthetic) = match self.provider.history(symbol, start, end).await {
            Ok(points) if !points.is_empty() => (points, false),
            Ok(_) => {
                debug!("Empty history for {}, substituting synthetic series", symbol);
                (self.synthetic_history(live.price, forecast), true)
            }
            Err(e) => {
                debug!(
                    "History fetch for {} failed ({}), substituting synthetic series",
                    symbol, e
                );
                (self.synthetic_history(live.price, forecast), true)
            }
        };

        Ok(TickerQuote {
            ticker: symbol.to_string(),
            name: live.name.unwrap_or_else(|| symbol.to_string()),
            current_price: live.price.round_dp(2),
            previous_close: previous.round_dp(2),
            change_24h_percent: change,
            market_cap: live.market_cap,
            volume: live.volume,
            currency: live.currency.unwrap_or_else(|| "USD".to_string()),
            price_history: history,
            synthetic: false,
            history_synthetic,
        })
    }

    /// Build the synthetic quote served once live attempts are exhausted.
    ///
    /// The reference price comes from the catalogue (normalized form first,
    /// then the original symbol) or, failing that, from the symbol-seeded
    /// generator; only the displayed price and percent change are jittered.
    fn fallback_quote(&self, original: &str, normalized: &str, forecast: Forecast) -> TickerQuote {
        let entry = catalogue_entry(normalized).or_else(|| catalogue_entry(original));
        let (name, reference) = match entry {
            Some(entry) => (entry.name.to_string(), entry.price),
            None => (original.to_string(), seeded_reference_price(original)),
        };

        let mut rng = rand::thread_rng();
        let jitter = rng.gen_range(-FALLBACK_JITTER..=FALLBACK_JITTER);
        let current = (reference
            * Decimal::from_f64_retain(1.0 + jitter).unwrap_or(Decimal::ONE))
        .round_dp(2);
        let change = Decimal::from_f64_retain(
            rng.gen_range(-FALLBACK_CHANGE_BOUND..=FALLBACK_CHANGE_BOUND),
        )
        .unwrap_or(Decimal::ZERO)
        .round_dp(2);

        let history = generate_series(
            reference,
            HISTORY_DAYS,
            forecast.trend,
            forecast.volatility,
            &mut rng,
        );

        TickerQuote {
            ticker: normalized.to_string(),
            name,
            current_price: current,
            previous_close: reference,
            change_24h_percent: change,
            market_cap: None,
            volume: None,
            currency: "USD".to_string(),
            price_history: history,
            synthetic: true,
            history_synthetic: true,
        }
    }

    /// Synthetic series stand-in for a failed or empty history fetch.
    fn synthetic_history(&self, base_price: Decimal, forecast: Forecast) -> Vec<PricePoint> {
        generate_series(
            base_price,
            HISTORY_DAYS,
            forecast.trend,
            forecast.volatility,
            &mut rand::thread_rng(),
        )
    }
}
