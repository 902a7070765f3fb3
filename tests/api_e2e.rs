//! End-to-end tests for the HTTP surface that need no database
//!
//! The router runs over a lazily-connected pool aimed at a closed port.

mod common;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use tower::util::ServiceExt;

use common::{json_body, offline_router, ErrorResponse};

// ============================================================================
// Fallback - unmatched routes
// ============================================================================

#[tokio::test]
async fn test_unknown_route_returns_route_not_found() {
    let response = offline_router()
        .oneshot(
            Request::builder()
                .uri("/products/unknown")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: ErrorResponse = json_body(response).await;
    assert_eq!(body.error.code, "ROUTE_NOT_FOUND");
    assert_eq!(body.error.message, "route not found");
}

#[tokio::test]
async fn test_unknown_method_on_unknown_route_returns_route_not_found() {
    let response = offline_router()
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri("/orders/42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ============================================================================
// Request ID middleware
// ============================================================================

#[tokio::test]
async fn test_request_id_is_echoed() {
    let response = offline_router()
        .oneshot(
            Request::builder()
                .uri("/missing")
                .header("x-request-id", "req-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()["x-request-id"], "req-42");
}

#[tokio::test]
async fn test_request_id_is_generated_when_absent() {
    let response = offline_router()
        .oneshot(Request::builder().uri("/missing").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let request_id = response.headers()["x-request-id"].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(request_id).is_ok());
}

// ============================================================================
// GET /health - database unreachable
// ============================================================================

#[tokio::test]
async fn test_health_reports_unavailable_database() {
    let response = offline_router()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body: ErrorResponse = json_body(response).await;
    assert_eq!(body.error.code, "DATABASE_UNAVAILABLE");
}
