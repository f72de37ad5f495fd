//! # Application Layer
//!
//! Interfaces to the outside world and the use cases that orchestrate them:
//! the chat client with its offline fallback, and the backend's answer flow.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
