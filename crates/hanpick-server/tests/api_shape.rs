//! Wire-contract tests — the response shapes the reference clients expect,
//! exercised against the real router with noop backends (no model files
//! needed).

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use hanpick_core::HanpickConfig;
use hanpick_infer::NoopEmbedder;
use hanpick_nlp::NoopTagger;
use hanpick_pipeline::{ExtractorConfig, KeywordExtractor};
use hanpick_server::routes::build_router;
use hanpick_server::state::AppState;

fn test_router() -> Router {
    let config = HanpickConfig::with_model_dir("models");
    let extractor = KeywordExtractor::new(
        Arc::new(NoopEmbedder::new(512)),
        Arc::new(NoopTagger),
        ExtractorConfig::default(),
    );
    build_router(Arc::new(AppState::new(config, extractor)))
}

fn analyze_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

#[tokio::test]
async fn test_index_liveness() {
    let response = test_router()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(std::str::from_utf8(&body).unwrap(), "hanpick alive");
}

#[tokio::test]
async fn test_blank_review_returns_empty_keywords() {
    let response = test_router()
        .oneshot(analyze_request(r#"{"review": "   "}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, serde_json::json!({ "keywords": [] }));
}

#[tokio::test]
async fn test_missing_review_field_returns_empty_keywords() {
    let response = test_router()
        .oneshot(analyze_request("{}"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["keywords"], serde_json::json!([]));
}

#[tokio::test]
async fn test_noop_backends_still_answer() {
    // Without model files the service keeps running; extraction degrades to
    // an empty list instead of an error.
    let response = test_router()
        .oneshot(analyze_request(
            r#"{"review": "정말 재밌고 반전이 있는 영화였다"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(json["keywords"].is_array());
}

#[tokio::test]
async fn test_malformed_json_is_client_error() {
    let response = test_router()
        .oneshot(analyze_request(r#"{"review": "#))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

/// Response shape matches what callers of the original service parse:
/// `{ "keywords": ["<string>", ...] }`.
#[test]
fn test_analyze_response_shape() {
    let response = serde_json::json!({
        "keywords": ["반전", "스릴러", "줄거리"],
    });

    assert!(response["keywords"].is_array());
    for keyword in response["keywords"].as_array().unwrap() {
        assert!(keyword.is_string());
    }
}
