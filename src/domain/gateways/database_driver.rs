//! Database Driver Gateway
//!
//! Abstract trait for opening and probing a database handle.

use async_trait::async_trait;

use crate::domain::models::connection::ConnectionDescriptor;

/// Driver able to open, probe and release database handles
#[async_trait]
pub trait DatabaseDriver: Send + Sync {
    /// Live handle returned to callers
    type Handle: Send + Sync;

    /// Driver error, surfaced to callers unmodified
    type Error: std::error::Error + Send + Sync + 'static;

    /// Open a handle against the descriptor
    async fn open(&self, descriptor: &ConnectionDescriptor) -> Result<Self::Handle, Self::Error>;

    /// Round trip to the database confirming the handle is usable
    async fn ping(&self, handle: &Self::Handle) -> Result<(), Self::Error>;

    /// Release the handle and any connections it holds
    async fn close(&self, handle: Self::Handle);
}
