use async_trait::async_trait;

use crate::domain::{ChatRequest, DomainError};

/// Delivers one chat message to the remote endpoint and returns the reply text.
///
/// Implementations must classify failures: [`DomainError::Transport`] when the
/// server could not be reached at all, [`DomainError::Response`] when it
/// answered with a non-success status or an unreadable body. The client
/// decides whether to show the offline notice from that distinction.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send(&self, request: &ChatRequest) -> Result<String, DomainError>;
}
