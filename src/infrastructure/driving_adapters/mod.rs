//! Driving Adapters
//!
//! Entry points that drive the application:
//! - HTTP REST API handlers and middleware

pub mod api_rest;
