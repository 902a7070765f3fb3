//! REST API Module
//!
//! Health check, the unmatched-route fallback, and request middleware.

pub mod handlers;
pub mod middleware;

use axum::routing::get;
use axum::Router;
use sqlx::PgPool;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

/// Build the application router
///
/// Requests that match no route are answered with the route-not-found
/// catalog error.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .fallback(handlers::fallback::route_not_found)
        .layer(axum::middleware::from_fn(middleware::request_id::request_id_middleware))
        .with_state(state)
}
