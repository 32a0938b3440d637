//! Yahoo Finance API response models.
//!
//! These models parse the quoteSummary API responses, which carry the name,
//! previous close and market-cap data the chart endpoints omit.

use serde::Deserialize;

/// Main response wrapper for quoteSummary API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteSummaryResponse {
    pub quote_summary: YahooQuoteSummary,
}

/// Quote summary container
#[derive(Debug, Deserialize)]
pub struct YahooQuoteSummary {
    pub result: Vec<YahooQuoteSummaryResult>,
    // Note: error field exists in API but we handle errors via HTTP status/empty results
}

/// Individual result from quoteSummary API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteSummaryResult {
    pub price: Option<YahooPriceData>,
    pub summary_detail: Option<YahooSummaryDetail>,
}

/// Price data from quoteSummary API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooPriceData {
    pub currency: Option<String>,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub regular_market_price: Option<YahooPriceDetail>,
    pub regular_market_previous_close: Option<YahooPriceDetail>,
    pub regular_market_volume: Option<YahooPriceDetail>,
    pub market_cap: Option<YahooPriceDetail>,
}

/// Price detail with raw and formatted values
#[derive(Debug, Deserialize, Clone)]
pub struct YahooPriceDetail {
    pub raw: Option<f64>,
    // Note: fmt field exists but we only use raw values
}

/// Summary detail data (financial metrics)
/// Yahoo returns these as nested objects like {"raw": 123.45, "fmt": "123.45"}
/// or empty objects {} when no data is available.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooSummaryDetail {
    pub market_cap: Option<YahooPriceDetail>,
    pub previous_close: Option<YahooPriceDetail>,
    pub volume: Option<YahooPriceDetail>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_price_detail() {
        let json = r#"{"raw": 150.25, "fmt": "150.25"}"#;
        let detail: YahooPriceDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.raw, Some(150.25));
    }

    #[test]
    fn test_deserialize_price_detail_empty_object() {
        // Yahoo returns {} for fields with no data
        let json = r#"{}"#;
        let detail: YahooPriceDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.raw, None);
    }

    #[test]
    fn test_deserialize_price_data() {
        let json = r#"{
            "currency": "USD",
            "shortName": "Apple Inc.",
            "regularMarketPrice": {"raw": 178.55, "fmt": "178.55"},
            "regularMarketPreviousClose": {"raw": 176.10, "fmt": "176.10"},
            "regularMarketVolume": {"raw": 51230000, "fmt": "51.23M"},
            "marketCap": {"raw": 2800000000000, "fmt": "2.8T"}
        }"#;
        let price: YahooPriceData = serde_json::from_str(json).unwrap();
        assert_eq!(price.currency.as_deref(), Some("USD"));
        assert_eq!(price.short_name.as_deref(), Some("Apple Inc."));
        assert_eq!(
            price.regular_market_price.as_ref().and_then(|p| p.raw),
            Some(178.55)
        );
        assert_eq!(
            price
                .regular_market_previous_close
                .as_ref()
                .and_then(|p| p.raw),
            Some(176.10)
        );
        assert_eq!(
            price.market_cap.as_ref().and_then(|p| p.raw),
            Some(2_800_000_000_000.0)
        );
    }

    #[test]
    fn test_deserialize_summary_detail() {
        let json = r#"{
            "marketCap": {"raw": 2800000000000, "fmt": "2.8T"},
            "previousClose": {"raw": 176.10, "fmt": "176.10"},
            "volume": {}
        }"#;
        let detail: YahooSummaryDetail = serde_json::from_str(json).unwrap();
        assert_eq!(
            detail.market_cap.as_ref().and_then(|d| d.raw),
            Some(2_800_000_000_000.0)
        );
        assert_eq!(
            detail.previous_close.as_ref().and_then(|d| d.raw),
            Some(176.10)
        );
        assert_eq!(detail.volume.as_ref().and_then(|d| d.raw), None);
    }
}
