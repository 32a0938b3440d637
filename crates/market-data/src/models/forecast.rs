use serde::{Deserialize, Serialize};

/// Direction bias for a synthetic price series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Flat,
}

impl Trend {
    /// Total drift applied across the whole simulated window.
    pub(crate) fn total_drift(&self) -> f64 {
        match self {
            Trend::Up => 0.05,
            Trend::Down => -0.05,
            Trend::Flat => 0.01,
        }
    }
}

/// Shape hint supplied by the upstream analysis step.
///
/// Only ever biases synthetic series generation; real provider data is never
/// adjusted by a forecast.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Forecast {
    #[serde(default)]
    pub trend: Trend,
    /// 0-100 dial scaling the per-step noise amplitude.
    #[serde(default = "default_volatility")]
    pub volatility: u8,
}

fn default_volatility() -> u8 {
    50
}

impl Default for Forecast {
    fn default() -> Self {
        Self {
            trend: Trend::Flat,
            volatility: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_serde_uses_upper_case() {
        assert_eq!(serde_json::to_string(&Trend::Up).unwrap(), "\"UP\"");
        let trend: Trend = serde_json::from_str("\"DOWN\"").unwrap();
        assert_eq!(trend, Trend::Down);
    }

    #[test]
    fn test_forecast_defaults() {
        let forecast = Forecast::default();
        assert_eq!(forecast.trend, Trend::Flat);
        assert_eq!(forecast.volatility, 50);
    }

    #[test]
    fn test_forecast_deserializes_with_missing_fields() {
        let forecast: Forecast = serde_json::from_str("{\"trend\": \"UP\"}").unwrap();
        assert_eq!(forecast.trend, Trend::Up);
        assert_eq!(forecast.volatility, 50);
    }
}
