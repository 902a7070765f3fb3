//! Database Connection Management
//!
//! Opens a database handle from configuration and verifies it is live.

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgConnection, PgPoolOptions, PgSslMode};
use sqlx::{Connection, PgPool};

use super::config::DatabaseConfig;
use crate::domain::gateways::DatabaseDriver;
use crate::domain::models::connection::ConnectionDescriptor;

/// Open a handle with `driver` and probe it before handing it out
///
/// Driver errors are returned unmodified. When the probe fails the handle is
/// closed before the probe error is returned.
///
/// # Errors
///
/// Returns the driver's error if opening or probing fails.
pub async fn connect<D: DatabaseDriver>(
    driver: &D,
    config: &DatabaseConfig,
) -> Result<D::Handle, D::Error> {
    let descriptor = config.descriptor();
    tracing::debug!(
        host = %descriptor.host,
        port = descriptor.port,
        dbname = %descriptor.dbname,
        "Opening database connection"
    );

    let handle = driver.open(&descriptor).await?;

    if let Err(err) = driver.ping(&handle).await {
        tracing::warn!(error = %err, host = %descriptor.host, "Database liveness probe failed");
        driver.close(handle).await;
        return Err(err);
    }

    tracing::info!(host = %descriptor.host, dbname = %descriptor.dbname, "Database connection established");
    Ok(handle)
}

/// Open a verified PostgreSQL pool from configuration
///
/// # Errors
///
/// Returns the `sqlx` error if the database cannot be reached, rejects the
/// credentials or fails the liveness probe.
pub async fn open_database(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    connect(&PostgresDriver, config).await
}

/// Connect options equivalent to the descriptor
#[must_use]
pub fn connect_options(descriptor: &ConnectionDescriptor) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&descriptor.host)
        .username(&descriptor.user)
        .password(&descriptor.password)
        .database(&descriptor.dbname)
        .port(descriptor.port)
        .ssl_mode(PgSslMode::Disable)
}

/// PostgreSQL driver backed by an `sqlx` pool
///
/// Opening is lazy and performs no I/O. The probe dials a dedicated
/// connection outside the pool, so connect failures surface as the driver's
/// own error instead of going through the pool's acquire retries.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresDriver;

#[async_trait]
impl DatabaseDriver for PostgresDriver {
    type Handle = PgPool;
    type Error = sqlx::Error;

    async fn open(&self, descriptor: &ConnectionDescriptor) -> Result<PgPool, sqlx::Error> {
        Ok(PgPoolOptions::new().connect_lazy_with(connect_options(descriptor)))
    }

    async fn ping(&self, handle: &PgPool) -> Result<(), sqlx::Error> {
        let options = handle.connect_options();
        let mut conn = PgConnection::connect_with(&options).await?;
        conn.ping().await?;
        conn.close().await
    }

    async fn close(&self, handle: PgPool) {
        handle.close().await;
    }
}
