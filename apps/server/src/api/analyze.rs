use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use stonkgaze_analysis::Recommendation;
use stonkgaze_market_data::TickerQuote;

use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

/// Minimum content length worth analyzing.
const MIN_CONTENT_CHARS: usize = 50;

/// Default persona dial when the client does not send one.
const DEFAULT_TROLL_LEVEL: u8 = 50;

/// Hardcoded sample input for the demo endpoint.
const SAMPLE_WEBPAGE_TEXT: &str = "\
Breaking News: Massive Rainfall Expected Across Singapore This Weekend

The Meteorological Service Singapore (MSS) has issued a weather advisory warning residents \
of heavy thunderstorms and potential flash floods. The wet weather is expected to persist \
through Sunday, with some areas receiving up to 100mm of rainfall.

Commuters are advised to plan their journeys carefully and consider alternative transportation. \
Several outdoor events have been cancelled or postponed due to the weather conditions.

Local umbrella retailers report a 300% surge in sales as Singaporeans rush to prepare for \
the incoming storms. Food delivery services are also seeing increased demand as people \
prefer to stay indoors.";

#[derive(Deserialize)]
struct AnalysisRequest {
    webpage_text: String,
    /// Accepted for parity with the extension payload; not used server-side.
    #[serde(default)]
    #[allow(dead_code)]
    url: Option<String>,
    #[serde(default)]
    troll_level: Option<u8>,
}

#[derive(Serialize)]
struct AnalysisResponse {
    analysis: Recommendation,
    market_data: TickerQuote,
}

/// Run the full pipeline: analysis, then a quote for whatever ticker the
/// analysis landed on. The quote side cannot fail; an analysis failure maps
/// to 502 via `ApiError`.
async fn analyze_content(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AnalysisRequest>,
) -> ApiResult<Json<AnalysisResponse>> {
    if body.webpage_text.trim().chars().count() < MIN_CONTENT_CHARS {
        return Err(ApiError::BadRequest(format!(
            "Webpage text too short. Need at least {} characters of content.",
            MIN_CONTENT_CHARS
        )));
    }

    let troll_level = body.troll_level.unwrap_or(DEFAULT_TROLL_LEVEL);
    run_pipeline(&state, &body.webpage_text, troll_level).await
}

/// Demo endpoint running the pipeline over a hardcoded sample, for testing
/// without the browser extension.
async fn demo_analysis(State(state): State<Arc<AppState>>) -> ApiResult<Json<AnalysisResponse>> {
    run_pipeline(&state, SAMPLE_WEBPAGE_TEXT, DEFAULT_TROLL_LEVEL).await
}

async fn run_pipeline(
    state: &Arc<AppState>,
    text: &str,
    troll_level: u8,
) -> ApiResult<Json<AnalysisResponse>> {
    let engine = state.analysis_engine.as_ref().ok_or_else(|| {
        ApiError::ServiceUnavailable("Analysis engine is not configured".to_string())
    })?;

    let analysis = engine.analyze(text, troll_level).await?;
    let market_data = state
        .quote_fetcher
        .fetch_quote(&analysis.ticker, analysis.asset_type, analysis.forecast)
        .await;

    Ok(Json(AnalysisResponse {
        analysis,
        market_data,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/analyze", post(analyze_content))
        .route("/analyze/demo", get(demo_analysis))
}
