//! Review analysis route.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/analyze", post(analyze))
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Raw review text. A missing field is treated as blank.
    #[serde(default)]
    pub review: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub keywords: Vec<String>,
}

/// POST /analyze — extract keywords from a review.
///
/// Blank (or missing) review text short-circuits to an empty keyword list
/// without touching the models.
async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyzeRequest>,
) -> Json<AnalyzeResponse> {
    if request.review.trim().is_empty() {
        return Json(AnalyzeResponse { keywords: Vec::new() });
    }

    let keywords = state.extractor.extract(&request.review);
    Json(AnalyzeResponse { keywords })
}
