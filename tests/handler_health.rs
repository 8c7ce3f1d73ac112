mod common;

use std::sync::Arc;

use axum::{ServiceExt, extract::Request};
use axum_test::TestServer;
use linkhop::routes::app_router;
use linkhop::state::AppState;
use serde_json::Value;

#[tokio::test]
async fn test_health_reports_healthy_store() {
    let (state, _repo) = common::create_test_state();
    let app = app_router(state);
    let server = TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["store"]["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_reports_degraded_store() {
    let state = AppState::new(Arc::new(common::FailingLinkRepository));
    let app = app_router(state);
    let server = TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 503);
    let body: Value = response.json();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["store"]["status"], "error");
}
