use std::{net::SocketAddr, time::Duration};

use stonkgaze_analysis::DEFAULT_API_BASE;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub openai_api_base: String,
    pub openai_api_key: String,
    pub openai_model: String,
    pub ledger_url: Option<String>,
    pub ledger_token: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("SG_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8000".to_string())
            .parse()
            .expect("Invalid SG_LISTEN_ADDR");
        let cors_allow = std::env::var("SG_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("SG_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let openai_api_base =
            std::env::var("SG_OPENAI_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let openai_api_key = std::env::var("OPENAI_API_KEY").unwrap_or_default();
        let openai_model =
            std::env::var("SG_OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".into());
        let ledger_url = std::env::var("SG_LEDGER_URL")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let ledger_token = std::env::var("SG_LEDGER_TOKEN")
            .ok()
            .filter(|s| !s.trim().is_empty());
        Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            openai_api_base,
            openai_api_key,
            openai_model,
            ledger_url,
            ledger_token,
        }
    }
}
