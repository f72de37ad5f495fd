//! # Domain Layer
//!
//! Conversation models, wire payloads and the error type.
//! This layer is independent of HTTP clients, servers and terminals.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
