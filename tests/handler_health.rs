mod common;

use axum::http::StatusCode;
use catalog::state::AppState;
use std::sync::Arc;

#[tokio::test]
async fn test_liveness_endpoint() {
    let (state, _repo) = common::create_test_state(Vec::new());
    let server = common::make_server(state);

    let response = server.get("/health/live").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert!(json.get("version").is_some());
    assert!(json.get("checks").is_none());
}

#[tokio::test]
async fn test_readiness_endpoint_success() {
    let (state, _repo) = common::create_test_state(Vec::new());
    let server = common::make_server(state);

    let response = server.get("/health/ready").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["repository"]["status"], "ok");
}

#[tokio::test]
async fn test_readiness_endpoint_degraded() {
    let state = AppState::new(Arc::new(common::FailingRepository));
    let server = common::make_server(state);

    let response = server.get("/health/ready").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["repository"]["status"], "error");
    assert!(json["checks"]["repository"]["message"].is_string());
}

#[tokio::test]
async fn test_liveness_ignores_repository_failure() {
    let state = AppState::new(Arc::new(common::FailingRepository));
    let server = common::make_server(state);

    server.get("/health/live").await.assert_status_ok();
}
