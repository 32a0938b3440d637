//! Recommendation models.

use serde::{Deserialize, Serialize};
use stonkgaze_market_data::{AssetKind, Forecast};

/// Structured recommendation parsed from the completion service's reply.
///
/// Only the ticker is mandatory; the completion service is an external
/// collaborator and everything else is accepted on a best-effort basis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    /// Ticker symbol the analysis landed on
    pub ticker: String,

    /// Stock or crypto
    #[serde(default)]
    pub asset_type: AssetKind,

    /// Suggested action (BUY/SELL/HOLD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    /// Confidence on a 0-100 scale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<u8>,

    /// One-line causal chain from content to ticker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_insight: Option<String>,

    /// Longer-form reasoning
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,

    /// Mood tag (e.g. MOONING)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vibe: Option<String>,

    /// Caption-sized summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meme_caption: Option<String>,

    /// Shape hint handed through to synthetic series generation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forecast: Option<Forecast>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use stonkgaze_market_data::Trend;

    #[test]
    fn test_full_recommendation_parses() {
        let json = r#"{
            "ticker": "UBER",
            "asset_type": "stock",
            "action": "BUY",
            "confidence": 85,
            "key_insight": "Rain means more ride bookings",
            "reasoning": "Bad weather, more rides.",
            "vibe": "MOONING",
            "meme_caption": "Weather plays are underrated",
            "forecast": {"trend": "UP", "volatility": 65}
        }"#;
        let rec: Recommendation = serde_json::from_str(json).unwrap();
        assert_eq!(rec.ticker, "UBER");
        assert_eq!(rec.asset_type, AssetKind::Stock);
        assert_eq!(rec.confidence, Some(85));
        let forecast = rec.forecast.unwrap();
        assert_eq!(forecast.trend, Trend::Up);
        assert_eq!(forecast.volatility, 65);
    }

    #[test]
    fn test_minimal_recommendation_parses() {
        let rec: Recommendation = serde_json::from_str(r#"{"ticker": "BTC"}"#).unwrap();
        assert_eq!(rec.ticker, "BTC");
        assert_eq!(rec.asset_type, AssetKind::Stock);
        assert!(rec.forecast.is_none());
    }

    #[test]
    fn test_missing_ticker_is_an_error() {
        assert!(serde_json::from_str::<Recommendation>(r#"{"asset_type": "crypto"}"#).is_err());
    }
}
