//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - HTTP chat transport and reply selectors for the client
//! - Completion providers, history storage and the keyword writer for the backend
//! - The backend HTTP server and the CLI controllers

pub mod adapter;
pub mod api;
pub mod server;

pub use adapter::*;
