//! Domain Models
//!
//! Plain value types shared across layers.

pub mod connection;
