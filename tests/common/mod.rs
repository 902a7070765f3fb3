//! Common test utilities for e2e tests
//!
//! Builds routers over either a lazily-connected pool (no database needed)
//! or a PostgreSQL container started with testcontainers.

#![allow(dead_code)]

use std::time::Duration;

use axum::body::Body;
use axum::http::Response;
use axum::Router;
use serde::Deserialize;
use sqlx::postgres::PgPoolOptions;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;

use seahat_backend::infrastructure::driven_adapters::config::AppConfig;
use seahat_backend::infrastructure::driven_adapters::database::{connect_options, open_database};
use seahat_backend::infrastructure::driving_adapters::api_rest::{router, AppState};

/// Create a test configuration pointing at the given database
pub fn create_test_config(host: &str, port: u16, password: &str) -> AppConfig {
    let config_str = format!(
        r#"
[server]
host = "127.0.0.1"
port = 0

[database]
host = "{host}"
user = "postgres"
password = "{password}"
name = "postgres"
port = {port}
"#
    );

    AppConfig::from_toml_str(&config_str).expect("Failed to build test config")
}

/// Router backed by a pool that never connects until used
///
/// Points at a closed local port, so anything touching the database fails fast.
pub fn offline_router() -> Router {
    let config = create_test_config("127.0.0.1", 1, "postgres");
    let pool = PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(2))
        .connect_lazy_with(connect_options(&config.database.descriptor()));

    router(AppState { pool })
}

/// Test application backed by a real PostgreSQL database
pub struct TestApp {
    pub router: Router,
    pub config: AppConfig,
    _container: ContainerAsync<Postgres>,
}

impl TestApp {
    /// Start a fresh PostgreSQL container and connect to it
    pub async fn new() -> Self {
        let container = Postgres::default()
            .with_tag("16-alpine")
            .start()
            .await
            .expect("Failed to start PostgreSQL container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let config = create_test_config(&host.to_string(), port, "postgres");

        let pool = open_database(&config.database)
            .await
            .expect("Failed to connect to test database");

        let router = router(AppState { pool });

        Self {
            router,
            config,
            _container: container,
        }
    }
}

/// Read a response body as JSON
pub async fn json_body<T: for<'de> Deserialize<'de>>(response: Response<Body>) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Error response structure for deserialization
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// Health response structure for deserialization
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}
