//! Notification publishing for domain events.
//!
//! Publishing is at-most-once and fire-and-forget: callers hand over a subject and
//! a payload and do not wait for any consumer. Backends:
//!
//! - [`nats::NatsNotifier`] (feature `nats`, default): NATS core publish
//! - [`memory::InMemoryNotifier`]: records messages, for tests and local runs
//!
//! # Example
//!
//! ```rust,ignore
//! use messaging::{Notifier, publish_json};
//!
//! let notifier = messaging::nats::NatsNotifier::connect(&config).await?;
//! publish_json(&notifier, "notification.SendProductAddedEmail", &email).await?;
//! ```

mod error;
pub mod memory;

#[cfg(feature = "nats")]
pub mod nats;

pub use error::NotifyError;

use async_trait::async_trait;
use serde::Serialize;

/// Publishes an opaque payload to a subject.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Hand a message to the transport. `Ok` means accepted for delivery, not delivered.
    async fn publish(&self, subject: &str, payload: Vec<u8>) -> Result<(), NotifyError>;
}

/// Serialize `message` as JSON and publish it.
pub async fn publish_json<N, T>(notifier: &N, subject: &str, message: &T) -> Result<(), NotifyError>
where
    N: Notifier + ?Sized,
    T: Serialize + ?Sized,
{
    let payload = serde_json::to_vec(message)?;
    notifier.publish(subject, payload).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    #[derive(Serialize)]
    struct Ping {
        n: u32,
    }

    #[tokio::test]
    async fn test_publish_json_serializes_payload() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_publish()
            .with(eq("pings"), eq(br#"{"n":7}"#.to_vec()))
            .times(1)
            .returning(|_, _| Ok(()));

        publish_json(&notifier, "pings", &Ping { n: 7 }).await.unwrap();
    }

    #[tokio::test]
    async fn test_publish_json_surfaces_transport_error() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_publish()
            .returning(|_, _| Err(NotifyError::publish("connection closed")));

        let err = publish_json(&notifier, "pings", &Ping { n: 1 }).await.unwrap_err();
        assert!(matches!(err, NotifyError::Publish(_)));
    }
}
