//! HTTP route handlers.

pub mod analyze;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::state::AppState;

/// Build the Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .merge(analyze::routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// GET / — plain-text liveness check.
async fn index() -> &'static str {
    "hanpick alive"
}
