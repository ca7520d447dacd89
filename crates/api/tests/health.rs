//! HTTP-level tests for the root health endpoint and the shared
//! middleware stack (request id, CORS).

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{body_json, build_test_app, get};
use sqlx::SqlitePool;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Test: GET /health reports service and database status
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_health_endpoint(pool: SqlitePool) {
    let app = build_test_app(pool);
    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["dbHealthy"], true);
    assert!(json["version"].is_string(), "version should be present");
}

// ---------------------------------------------------------------------------
// Test: unknown routes return 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_route_returns_404(pool: SqlitePool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/no-such-resource").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: every response carries a UUID x-request-id
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_request_id_header_present(pool: SqlitePool) {
    let app = build_test_app(pool);
    let response = get(app, "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("x-request-id header should be set");
    assert_eq!(
        request_id.to_str().unwrap().len(),
        36,
        "request id should be a UUID"
    );
}

// ---------------------------------------------------------------------------
// Test: CORS preflight from the configured origin succeeds
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cors_preflight(pool: SqlitePool) {
    let app = build_test_app(pool);
    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/projects")
                .header("Origin", "http://localhost:5173")
                .header("Access-Control-Request-Method", "GET")
                .header("Access-Control-Request-Headers", "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let allow_origin = response
        .headers()
        .get("access-control-allow-origin")
        .expect("allow-origin header should be set");
    assert_eq!(allow_origin, "http://localhost:5173");

    let allow_methods = response
        .headers()
        .get("access-control-allow-methods")
        .expect("allow-methods header should be set");
    assert!(allow_methods.to_str().unwrap().contains("GET"));
}
