//! HTTP client for the remote paper-trading ledger.
//!
//! The ledger is an opaque action-keyed request/response service (in
//! practice a spreadsheet-backed web app). This crate never interprets its
//! payloads: requests carry an `action` field plus parameters, an optional
//! shared-secret token is merged in, and responses come back as raw JSON for
//! the HTTP layer to pass through.

use std::time::Duration;

use log::debug;
use serde_json::{json, Value};
use thiserror::Error;

/// Default timeout for ledger requests.
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Errors from the ledger proxy.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// No ledger URL configured.
    #[error("Ledger URL is not configured")]
    NotConfigured,

    /// Transport-level failure.
    #[error("Ledger request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The ledger answered with a non-success status.
    #[error("Ledger returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Which side of a paper trade is being recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    fn as_str(&self) -> &'static str {
        match self {
            TradeSide::Buy => "buy",
            TradeSide::Sell => "sell",
        }
    }
}

/// HTTP client for the remote ledger service.
#[derive(Debug, Clone)]
pub struct LedgerClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl LedgerClient {
    /// Create a new ledger client.
    ///
    /// `token` is the optional shared secret the ledger expects in every
    /// request.
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Result<Self, LedgerError> {
        let base_url = base_url.into();
        if base_url.trim().is_empty() {
            return Err(LedgerError::NotConfigured);
        }
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    /// Register a user with the ledger.
    pub async fn init_user(&self, user_id: &str, username: &str) -> Result<Value, LedgerError> {
        self.post(json!({
            "action": "user/init",
            "user_id": user_id,
            "username": username,
        }))
        .await
    }

    /// Fetch a user's portfolio.
    pub async fn portfolio(&self, user_id: &str) -> Result<Value, LedgerError> {
        self.get(&[("action", "portfolio"), ("user_id", user_id)])
            .await
    }

    /// Record a paper trade.
    pub async fn trade(
        &self,
        user_id: &str,
        ticker: &str,
        side: TradeSide,
        qty: f64,
        price: f64,
    ) -> Result<Value, LedgerError> {
        self.post(json!({
            "action": "trade",
            "user_id": user_id,
            "ticker": ticker,
            "side": side.as_str(),
            "qty": qty,
            "price": price,
        }))
        .await
    }

    /// Fetch the leaderboard.
    pub async fn leaderboard(&self, limit: u32) -> Result<Value, LedgerError> {
        let limit = limit.to_string();
        self.get(&[("action", "leaderboard"), ("limit", &limit)])
            .await
    }

    async fn post(&self, mut payload: Value) -> Result<Value, LedgerError> {
        if let (Some(token), Some(map)) = (&self.token, payload.as_object_mut()) {
            map.insert("token".to_string(), Value::String(token.clone()));
        }
        debug!("Ledger POST action={:?}", payload.get("action"));

        let response = self
            .client
            .post(&self.base_url)
            .json(&payload)
            .send()
            .await?;
        Self::into_json(response).await
    }

    async fn get(&self, params: &[(&str, &str)]) -> Result<Value, LedgerError> {
        let mut query: Vec<(&str, &str)> = params.to_vec();
        if let Some(token) = &self.token {
            query.push(("token", token));
        }
        debug!("Ledger GET {:?}", params.first());

        let response = self
            .client
            .get(&self.base_url)
            .query(&query)
            .send()
            .await?;
        Self::into_json(response).await
    }

    async fn into_json(response: reqwest::Response) -> Result<Value, LedgerError> {
        let status = response.status();
        if !status.is_success() {
            return Err(LedgerError::Status(status));
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_url_is_not_configured() {
        assert!(matches!(
            LedgerClient::new("", None),
            Err(LedgerError::NotConfigured)
        ));
        assert!(matches!(
            LedgerClient::new("   ", Some("secret".to_string())),
            Err(LedgerError::NotConfigured)
        ));
    }

    #[test]
    fn test_trade_side_wire_values() {
        assert_eq!(TradeSide::Buy.as_str(), "buy");
        assert_eq!(TradeSide::Sell.as_str(), "sell");
    }
}
