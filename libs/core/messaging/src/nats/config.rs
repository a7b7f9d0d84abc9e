//! Connection settings for the NATS backend.

use core_config::{env_or_default, env_parse, ConfigError, FromEnv};
use std::time::Duration;

/// NATS connection configuration.
#[derive(Debug, Clone)]
pub struct NatsConfig {
    /// Server URL, e.g. `nats://localhost:4222`
    pub url: String,

    /// Client name reported to the server
    pub connection_name: String,

    /// Timeout for each connection attempt
    pub connect_timeout: Duration,
}

impl Default for NatsConfig {
    fn default() -> Self {
        Self {
            url: "nats://localhost:4222".to_string(),
            connection_name: "products-api".to_string(),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

impl FromEnv for NatsConfig {
    /// Reads:
    /// - `NATS_URL` (default: nats://localhost:4222)
    /// - `NATS_CONNECTION_NAME` (default: products-api)
    /// - `NATS_CONNECT_TIMEOUT_SECS` (default: 5)
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env_or_default("NATS_URL", "nats://localhost:4222"),
            connection_name: env_or_default("NATS_CONNECTION_NAME", "products-api"),
            connect_timeout: Duration::from_secs(env_parse("NATS_CONNECT_TIMEOUT_SECS", 5)?),
        })
    }
}
