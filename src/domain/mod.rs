//! Domain Layer
//!
//! Error kinds, connection parameters and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod errors;
pub mod gateways;
pub mod models;

pub use errors::DomainError;
pub use gateways::database_driver::DatabaseDriver;
pub use models::connection::ConnectionDescriptor;
