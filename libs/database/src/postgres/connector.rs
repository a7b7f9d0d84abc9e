use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use super::PostgresConfig;
use crate::common::{RetryConfig, retry, retry_with_backoff};

/// Connect using a PostgresConfig
pub async fn connect_from_config(config: PostgresConfig) -> Result<DatabaseConnection, DbErr> {
    connect_with_options(config.into_connect_options()).await
}

/// Connect with explicit SeaORM connection options
pub async fn connect_with_options(options: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(options).await?;
    info!("Connected to PostgreSQL");
    Ok(db)
}

/// Connect from config, retrying with exponential backoff on failure
///
/// `None` uses the default [`RetryConfig`].
///
/// # Example
/// ```ignore
/// use database::postgres::{PostgresConfig, connect_from_config_with_retry};
/// use database::common::RetryConfig;
///
/// let config = PostgresConfig::from_env()?;
/// let db = connect_from_config_with_retry(config, Some(RetryConfig::new().with_max_retries(10))).await?;
/// ```
pub async fn connect_from_config_with_retry(
    config: PostgresConfig,
    retry_config: Option<RetryConfig>,
) -> Result<DatabaseConnection, DbErr> {
    info!(url = %config.redacted_url(), "Connecting to PostgreSQL");
    let options = config.into_connect_options();

    match retry_config {
        Some(policy) => {
            retry_with_backoff(|| connect_with_options(options.clone()), policy).await
        }
        None => retry(|| connect_with_options(options.clone())).await,
    }
}

/// Apply all pending migrations of `M`
///
/// `app_name` only labels the log lines.
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> Result<(), DbErr> {
    info!(app = app_name, "Running database migrations");
    M::up(db, None).await?;
    info!(app = app_name, "Migrations completed");
    Ok(())
}
