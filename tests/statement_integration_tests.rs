mod common;

use axum::http::{Method, StatusCode};
use bank_ledger_server::handlers::health::HealthResponse;
use chrono::{TimeZone, Utc};
use common::{TOKEN, TestApp};

#[tokio::test]
async fn test_statements_list_with_labels() {
    let harness = TestApp::new();
    let user = harness.store.add_user("owner@example.com", TOKEN);
    let sep = Utc.with_ymd_and_hms(2026, 9, 30, 0, 0, 0).unwrap();
    let oct = Utc.with_ymd_and_hms(2026, 10, 1, 0, 0, 0).unwrap();
    harness
        .store
        .add_statement(user.id, Some(sep), "statements/2026-09.pdf");
    harness
        .store
        .add_statement(user.id, Some(oct), "statements/2026-10.pdf");

    let (status, body) = harness.get("/api/v1/statements").await;

    assert_eq!(status, StatusCode::OK);
    let statements = body.as_array().unwrap();
    assert_eq!(statements.len(), 2);
    assert_eq!(statements[0]["label"], "Oct, 2026");
    assert_eq!(statements[1]["label"], "Sep, 2026");
    assert_eq!(statements[1]["document_path"], "statements/2026-09.pdf");
}

#[tokio::test]
async fn test_statements_require_token() {
    let harness = TestApp::new();

    let (status, _) = harness
        .request(Method::GET, "/api/v1/statements", None, None)
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_is_public() {
    let harness = TestApp::new();

    let (status, body) = harness.request(Method::GET, "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    let health: HealthResponse = serde_json::from_value(body).unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.database, "connected");
}
