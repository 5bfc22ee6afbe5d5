use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::{error::AppResult, models::SearchOutput};

use super::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    /// Per-call override of the configured result-size limit
    pub max_results: Option<u32>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Video search endpoint
///
/// The body is the raw JSON query document; the query parser owns its
/// decoding, so a malformed document answers 400 with the parser's error
/// rather than the framework's.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
    body: String,
) -> AppResult<Json<SearchOutput>> {
    let output = state.video_search.run(&body, params.max_results).await?;
    Ok(Json(output))
}
