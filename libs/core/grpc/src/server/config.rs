//! Server configuration loaded from environment variables.

use core_config::{ConfigError, FromEnv, env_flag, env_or_default, env_parse};
use std::net::SocketAddr;

use crate::error::GrpcError;

const DEFAULT_PORT: u16 = 2424;
const DEFAULT_MAX_MESSAGE_SIZE: usize = 4 * 1024 * 1024;

/// Configuration for the gRPC server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to (default: 0.0.0.0)
    pub host: String,
    /// Port to listen on (default: 2424)
    pub port: u16,
    /// Accept and send Zstd-compressed messages (default: true)
    pub enable_compression: bool,
    /// Maximum message size for decoding and encoding (default: 4MB)
    pub max_message_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            enable_compression: true,
            max_message_size: DEFAULT_MAX_MESSAGE_SIZE,
        }
    }
}

impl ServerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_compression(mut self, enable: bool) -> Self {
        self.enable_compression = enable;
        self
    }

    /// Get the socket address to bind to.
    pub fn socket_addr(&self) -> Result<SocketAddr, GrpcError> {
        self.addr_string()
            .parse()
            .map_err(|e| GrpcError::InvalidConfig(format!("{}: {}", self.addr_string(), e)))
    }

    /// Get the address string (for logging).
    pub fn addr_string(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl FromEnv for ServerConfig {
    /// Reads:
    /// - `GRPC_HOST` (default: 0.0.0.0)
    /// - `GRPC_PORT` (default: 2424)
    /// - `GRPC_COMPRESSION` (default: true)
    /// - `GRPC_MAX_MESSAGE_SIZE` (default: 4194304 / 4MB)
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env_or_default("GRPC_HOST", "0.0.0.0"),
            port: env_parse("GRPC_PORT", DEFAULT_PORT)?,
            enable_compression: env_flag("GRPC_COMPRESSION", true),
            max_message_size: env_parse("GRPC_MAX_MESSAGE_SIZE", DEFAULT_MAX_MESSAGE_SIZE)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 2424);
        assert!(config.enable_compression);
        assert_eq!(config.socket_addr().unwrap().port(), 2424);
    }

    #[test]
    fn test_builder_pattern() {
        let config = ServerConfig::new()
            .with_host("127.0.0.1")
            .with_port(8080)
            .with_compression(false);

        assert_eq!(config.addr_string(), "127.0.0.1:8080");
        assert!(!config.enable_compression);
    }

    #[test]
    fn test_invalid_host_is_config_error() {
        let config = ServerConfig::new().with_host("not a host");
        assert!(matches!(config.socket_addr(), Err(GrpcError::InvalidConfig(_))));
    }

    #[test]
    fn test_from_env_defaults() {
        temp_env::with_vars_unset(
            ["GRPC_HOST", "GRPC_PORT", "GRPC_COMPRESSION", "GRPC_MAX_MESSAGE_SIZE"],
            || {
                let config = ServerConfig::from_env().unwrap();
                assert_eq!(config.host, "0.0.0.0");
                assert_eq!(config.port, 2424);
                assert!(config.enable_compression);
            },
        );
    }

    #[test]
    fn test_from_env_custom() {
        temp_env::with_vars(
            [
                ("GRPC_HOST", Some("[::1]")),
                ("GRPC_PORT", Some("50051")),
                ("GRPC_COMPRESSION", Some("false")),
            ],
            || {
                let config = ServerConfig::from_env().unwrap();
                assert_eq!(config.addr_string(), "[::1]:50051");
                assert!(!config.enable_compression);
            },
        );
    }

    #[test]
    fn test_from_env_invalid_port() {
        temp_env::with_var("GRPC_PORT", Some("99999"), || {
            let err = ServerConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("GRPC_PORT"));
        });
    }
}
