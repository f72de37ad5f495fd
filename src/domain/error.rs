use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    /// The request never reached the server, or the connection broke before a
    /// response arrived.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered, but with a non-success status or a body that could
    /// not be read as a chat reply.
    #[error("Response error: {0}")]
    Response(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DomainError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn response(msg: impl Into<String>) -> Self {
        Self::Response(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub fn is_response(&self) -> bool {
        matches!(self, Self::Response(_))
    }
}
