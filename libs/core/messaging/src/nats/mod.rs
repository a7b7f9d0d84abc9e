//! NATS core publish backend.
//!
//! Uses plain (non-JetStream) publish: the message is written to the client's
//! outbound buffer and flushed in the background, so there is no server
//! acknowledgement and no consumer is awaited.

mod config;

pub use config::NatsConfig;

use async_nats::Client;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::{Notifier, NotifyError};

/// [`Notifier`] backed by an `async_nats::Client`.
#[derive(Clone, Debug)]
pub struct NatsNotifier {
    client: Client,
}

impl NatsNotifier {
    fn new(client: Client) -> Self {
        Self { client }
    }

    /// Connect using `config`.
    ///
    /// The initial connection is retried in the background, so startup does not
    /// depend on the broker being reachable; publishes made meanwhile are buffered.
    pub async fn connect(config: &NatsConfig) -> Result<Self, NotifyError> {
        let client = async_nats::ConnectOptions::new()
            .name(&config.connection_name)
            .connection_timeout(config.connect_timeout)
            .retry_on_initial_connect()
            .connect(config.url.as_str())
            .await
            .map_err(|e| NotifyError::connection(format!("{}: {}", config.url, e)))?;

        info!(url = %config.url, name = %config.connection_name, "NATS client created");
        Ok(Self::new(client))
    }
}

#[async_trait]
impl Notifier for NatsNotifier {
    #[instrument(skip(self, payload), fields(subject = %subject, bytes = payload.len()))]
    async fn publish(&self, subject: &str, payload: Vec<u8>) -> Result<(), NotifyError> {
        self.client
            .publish(subject.to_string(), payload.into())
            .await
            .map_err(|e| NotifyError::publish(e.to_string()))?;

        debug!("Notification handed to NATS");
        Ok(())
    }
}
