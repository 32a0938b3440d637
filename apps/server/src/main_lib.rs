use std::sync::Arc;

use crate::config::Config;
use stonkgaze_analysis::{AnalysisEngine, OpenAiChatEngine, OpenAiConfig};
use stonkgaze_ledger::LedgerClient;
use stonkgaze_market_data::{QuoteFetcher, YahooProvider};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    /// Quote fetching is always available; its fallback path needs nothing
    /// from the environment.
    pub quote_fetcher: Arc<QuoteFetcher>,
    /// None when no completion API key is configured.
    pub analysis_engine: Option<Arc<dyn AnalysisEngine>>,
    /// None when no ledger URL is configured.
    pub ledger: Option<LedgerClient>,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let provider = Arc::new(YahooProvider::new()?);
    let quote_fetcher = Arc::new(QuoteFetcher::new(provider));

    let analysis_engine: Option<Arc<dyn AnalysisEngine>> =
        if config.openai_api_key.trim().is_empty() {
            tracing::warn!("No completion API key configured; /analyze endpoints are disabled");
            None
        } else {
            let engine = OpenAiChatEngine::new(OpenAiConfig::new(
                config.openai_api_base.clone(),
                config.openai_api_key.clone(),
                config.openai_model.clone(),
            ))?;
            Some(Arc::new(engine))
        };

    let ledger = match &config.ledger_url {
        Some(url) => Some(LedgerClient::new(url.clone(), config.ledger_token.clone())?),
        None => {
            tracing::warn!("No ledger URL configured; /paper endpoints are disabled");
            None
        }
    };

    Ok(Arc::new(AppState {
        quote_fetcher,
        analysis_engine,
        ledger,
    }))
}
