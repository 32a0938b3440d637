use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::main_lib::AppState;

/// Liveness payload for the root route.
async fn root() -> Json<Value> {
    Json(json!({
        "status": "vibing",
        "message": "StonkGaze API is running",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Detailed health check, reporting which collaborators are configured.
async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let ready = |configured: bool| if configured { "ready" } else { "disabled" };
    Json(json!({
        "status": "healthy",
        "ai_engine": ready(state.analysis_engine.is_some()),
        "market_connector": "ready",
        "ledger": ready(state.ledger.is_some()),
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}
