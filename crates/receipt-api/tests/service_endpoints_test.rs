//! Health, docs, CORS and routing tests

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use receipt_api::config::ServiceConfig;
use receipt_api::create_app;
use receipt_api::error::ApiErrorResponse;
use receipt_api::types::HealthResponse;
use serde_json::Value;

fn server_with(config: &ServiceConfig) -> TestServer {
    let app = create_app(config).expect("Failed to create app");
    TestServer::new(app).expect("Failed to create test server")
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = server_with(&ServiceConfig::default());

    let response = server.get("/health").await;

    response.assert_status_ok();
    let health: HealthResponse = response.json();
    assert_eq!(health.status, "up");
    assert!(health.uptime.ends_with('s'), "unexpected uptime {}", health.uptime);

    let raw: Value = response.json();
    let keys: Vec<_> = raw.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys.len(), 2);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let server = server_with(&ServiceConfig::default());

    let response = server.get("/api-docs/openapi.json").await;

    response.assert_status_ok();
    let doc: Value = response.json();
    let paths = doc["paths"].as_object().expect("paths");
    assert!(paths.contains_key("/receipts/process"));
    assert!(paths.contains_key("/receipts/{id}/points"));
    assert!(paths.contains_key("/health"));

    server.get("/docs").await.assert_status_ok();
}

#[tokio::test]
async fn test_docs_can_be_disabled() {
    let mut config = ServiceConfig::default();
    config.docs.enabled = false;
    let server = server_with(&config);

    server.get("/api-docs/openapi.json").await.assert_status(StatusCode::NOT_FOUND);
    server.get("/docs").await.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let server = server_with(&ServiceConfig::default());

    let response = server.get("/receipts").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<ApiErrorResponse>().code, "NOT_FOUND");
}

#[tokio::test]
async fn test_cors_allows_any_origin_by_default() {
    let server = server_with(&ServiceConfig::default());

    let response = server
        .get("/health")
        .add_header(HeaderName::from_static("origin"), HeaderValue::from_static("http://example.test"))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.headers().get("access-control-allow-origin"),
        Some(&HeaderValue::from_static("*"))
    );
}

#[tokio::test]
async fn test_cors_restricted_origins() {
    let mut config = ServiceConfig::default();
    config.cors.allowed_origins = vec!["http://allowed.test".to_string()];
    let server = server_with(&config);

    let allowed = server
        .get("/health")
        .add_header(HeaderName::from_static("origin"), HeaderValue::from_static("http://allowed.test"))
        .await;
    assert_eq!(
        allowed.headers().get("access-control-allow-origin"),
        Some(&HeaderValue::from_static("http://allowed.test"))
    );

    let denied = server
        .get("/health")
        .add_header(HeaderName::from_static("origin"), HeaderValue::from_static("http://other.test"))
        .await;
    assert!(denied.headers().get("access-control-allow-origin").is_none());
}

#[test]
fn test_invalid_cors_origin_fails_app_construction() {
    let mut config = ServiceConfig::default();
    config.cors.allowed_origins = vec!["bad\norigin".to_string()];
    assert!(create_app(&config).is_err());
}
