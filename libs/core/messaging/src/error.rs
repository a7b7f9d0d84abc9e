//! Error types for notification publishing.

use thiserror::Error;

/// Errors raised while handing a notification to the transport.
///
/// Callers of a fire-and-forget publish are expected to log these, not propagate them.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Payload could not be serialized
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Transport rejected the message
    #[error("publish error: {0}")]
    Publish(String),

    /// Could not establish a connection to the broker
    #[error("connection error: {0}")]
    Connection(String),

    /// Publish did not complete before the caller's deadline
    #[error("publish timed out")]
    Timeout,
}

impl NotifyError {
    pub fn publish(message: impl Into<String>) -> Self {
        Self::Publish(message.into())
    }

    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }
}
