//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Configuration
//! - Database connections

pub mod config;
pub mod database;

pub use config::AppConfig;
pub use database::{open_database, PostgresDriver};
