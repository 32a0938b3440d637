use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use stonkgaze_market_data::{AssetKind, TickerQuote};

use crate::main_lib::AppState;

#[derive(Deserialize)]
struct TickerQuery {
    #[serde(default)]
    asset_type: AssetKind,
}

/// Direct quote lookup. Infallible by design: unknown or dead symbols come
/// back as synthetic quotes, flagged as such.
async fn get_ticker(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
    Query(query): Query<TickerQuery>,
) -> Json<TickerQuote> {
    let quote = state
        .quote_fetcher
        .fetch_quote(&symbol, query.asset_type, None)
        .await;
    Json(quote)
}

#[derive(Serialize)]
struct ValidationResponse {
    ticker: String,
    valid: bool,
}

/// Existence check: catalogue first, then a single live probe.
async fn validate_ticker(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> Json<ValidationResponse> {
    let ticker = symbol.trim().to_uppercase();
    let valid = state.quote_fetcher.validate_symbol(&ticker).await;
    Json(ValidationResponse { ticker, valid })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ticker/{symbol}", get(get_ticker))
        .route("/ticker/{symbol}/validate", get(validate_ticker))
}
