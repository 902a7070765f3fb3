//! Seahat Backend
//!
//! Application error catalog and database bootstrap for the Seahat
//! healthcare e-commerce API, laid out along Clean/Hexagonal Architecture
//! lines.

pub mod domain;
pub mod infrastructure;
pub mod shared;
