//! In-process notifier that records every publish.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::{Notifier, NotifyError};

/// A message accepted by [`InMemoryNotifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedMessage {
    pub subject: String,
    pub payload: Vec<u8>,
}

impl PublishedMessage {
    /// Decode the payload as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, NotifyError> {
        Ok(serde_json::from_slice(&self.payload)?)
    }
}

/// Records published messages; optionally rejects every publish.
///
/// Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNotifier {
    messages: Arc<Mutex<Vec<PublishedMessage>>>,
    reject_with: Option<String>,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier whose publishes always fail with `NotifyError::Publish(reason)`.
    pub fn rejecting(reason: impl Into<String>) -> Self {
        Self {
            reject_with: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Messages accepted so far, in publish order.
    pub async fn published(&self) -> Vec<PublishedMessage> {
        self.messages.lock().await.clone()
    }
}

#[async_trait]
impl Notifier for InMemoryNotifier {
    async fn publish(&self, subject: &str, payload: Vec<u8>) -> Result<(), NotifyError> {
        if let Some(reason) = &self.reject_with {
            return Err(NotifyError::publish(reason.clone()));
        }

        self.messages.lock().await.push(PublishedMessage {
            subject: subject.to_string(),
            payload,
        });
        Ok(())
    }
}
