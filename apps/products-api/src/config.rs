//! Configuration for Products API

use core_config::{env_flag, env_required, ConfigError, FromEnv};
use database::postgres::PostgresConfig;
use grpc_client::server::ServerConfig;
use messaging::nats::NatsConfig;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub postgres: PostgresConfig,
    pub nats: NatsConfig,
    /// Address of the users service, e.g. `http://users:2424`
    pub user_service_addr: String,
    /// Apply pending migrations before serving
    pub run_migrations: bool,
}

impl FromEnv for Config {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env()?,
            postgres: PostgresConfig::from_env()?,
            nats: NatsConfig::from_env()?,
            user_service_addr: env_required("USER_SERVICE_ADDR")?,
            run_migrations: env_flag("RUN_MIGRATIONS", true),
        })
    }
}
