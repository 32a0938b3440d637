//! Passthrough routes for the remote paper-trading ledger.
//!
//! The ledger owns all state; these handlers marshal requests into the
//! action-keyed client and hand its JSON back untouched.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;
use stonkgaze_ledger::{LedgerClient, TradeSide};

use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

fn ledger(state: &AppState) -> ApiResult<&LedgerClient> {
    state.ledger.as_ref().ok_or_else(|| {
        ApiError::ServiceUnavailable("Paper-trading ledger is not configured".to_string())
    })
}

#[derive(Deserialize)]
struct InitRequest {
    user_id: String,
    username: String,
}

async fn init_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<InitRequest>,
) -> ApiResult<Json<Value>> {
    let result = ledger(&state)?
        .init_user(&body.user_id, &body.username)
        .await?;
    Ok(Json(result))
}

#[derive(Deserialize)]
struct PortfolioQuery {
    user_id: String,
}

async fn get_portfolio(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PortfolioQuery>,
) -> ApiResult<Json<Value>> {
    let result = ledger(&state)?.portfolio(&query.user_id).await?;
    Ok(Json(result))
}

#[derive(Deserialize)]
struct TradeRequest {
    user_id: String,
    ticker: String,
    side: String,
    qty: f64,
    price: f64,
}

async fn trade(
    State(state): State<Arc<AppState>>,
    Json(body): Json<TradeRequest>,
) -> ApiResult<Json<Value>> {
    let side = match body.side.to_lowercase().as_str() {
        "buy" => TradeSide::Buy,
        "sell" => TradeSide::Sell,
        other => {
            return Err(ApiError::BadRequest(format!(
                "Unknown trade side: {}",
                other
            )))
        }
    };
    let result = ledger(&state)?
        .trade(&body.user_id, &body.ticker, side, body.qty, body.price)
        .await?;
    Ok(Json(result))
}

#[derive(Deserialize)]
struct LeaderboardQuery {
    #[serde(default = "default_limit")]
    limit: u32,
}

fn default_limit() -> u32 {
    10
}

async fn leaderboard(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LeaderboardQuery>,
) -> ApiResult<Json<Value>> {
    let result = ledger(&state)?.leaderboard(query.limit).await?;
    Ok(Json(result))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/paper/init", post(init_user))
        .route("/paper/portfolio", get(get_portfolio))
        .route("/paper/trade", post(trade))
        .route("/paper/leaderboard", get(leaderboard))
}
