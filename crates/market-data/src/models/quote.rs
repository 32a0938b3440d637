use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single point in a price series.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Timestamp of the observation
    pub timestamp: DateTime<Utc>,

    /// Closing price, rounded to 2 decimal places
    pub price: Decimal,
}

/// A fully populated quote, the unit of output of this crate.
///
/// Constructed fresh on every request and never mutated afterwards. The two
/// provenance flags are independent: `synthetic` covers the price, name and
/// market-cap fields, while `history_synthetic` marks a substituted series,
/// so a quote can carry a real live price together with a fabricated history.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TickerQuote {
    /// Normalized symbol the data was resolved for
    pub ticker: String,

    /// Display name (falls back to the symbol itself)
    pub name: String,

    /// Current price, rounded to 2 decimal places
    pub current_price: Decimal,

    /// Previous reference price (previous close on the live path, the
    /// catalogue/seeded reference price on the fallback path)
    pub previous_close: Decimal,

    /// Percent change against the previous reference price
    pub change_24h_percent: Decimal,

    /// Market capitalisation, when the provider reports one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<Decimal>,

    /// Trading volume, when the provider reports one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<Decimal>,

    /// Quote currency
    pub currency: String,

    /// Trailing price series, oldest first
    pub price_history: Vec<PricePoint>,

    /// True when price/name/market-cap were fabricated rather than fetched
    pub synthetic: bool,

    /// True when the price series was fabricated rather than fetched
    pub history_synthetic: bool,
}

impl TickerQuote {
    /// Percent change between a current and a previous price.
    ///
    /// Returns exactly zero when the previous price is zero or negative, so a
    /// missing previous close never faults the pipeline.
    pub fn change_percent(current: Decimal, previous: Decimal) -> Decimal {
        if previous > Decimal::ZERO {
            ((current - previous) / previous * Decimal::ONE_HUNDRED).round_dp(2)
        } else {
            Decimal::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_change_percent_exact() {
        assert_eq!(
            TickerQuote::change_percent(dec!(110), dec!(100)),
            dec!(10.00)
        );
    }

    #[test]
    fn test_change_percent_negative() {
        assert_eq!(
            TickerQuote::change_percent(dec!(95), dec!(100)),
            dec!(-5.00)
        );
    }

    #[test]
    fn test_change_percent_zero_previous() {
        assert_eq!(
            TickerQuote::change_percent(dec!(110), Decimal::ZERO),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_change_percent_negative_previous() {
        assert_eq!(
            TickerQuote::change_percent(dec!(110), dec!(-1)),
            Decimal::ZERO
        );
    }
}
