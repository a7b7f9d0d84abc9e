//! gRPC server initialization and lifecycle management
//!
//! This module handles all server setup:
//! - Database connection and migrations
//! - NATS and users-service clients
//! - Service creation
//! - gRPC server configuration and startup
//! - Health check service (grpc.health.v1.Health)

use std::time::Duration;

use database::postgres::{check_health, DatabaseConnection};
use domain_products::{PgProductRepository, ProductService};
use eyre::{Result, WrapErr};
use grpc_client::server::{create_health_service, shutdown_signal, GrpcServer};
use messaging::nats::NatsNotifier;
use migration::Migrator;
use rpc::products::{products_service_server::ProductsServiceServer, SERVICE_NAME};
use tonic::codec::CompressionEncoding;
use tonic::transport::Server;
use tonic_health::server::HealthReporter;
use tracing::{info, warn};

use crate::config::Config;
use crate::identity::GrpcIdentityResolver;
use crate::service::ProductsServiceImpl;

const APP_NAME: &str = "products-api";
const HEALTH_CHECK_INTERVAL: Duration = Duration::from_secs(15);

/// Run the gRPC server until Ctrl-C or SIGTERM
///
/// Startup order:
/// 1. Connect to PostgreSQL with retry and apply migrations (unless disabled)
/// 2. Connect to NATS; the broker may come up later
/// 3. Create a lazy channel to the users service
/// 4. Serve `products.ProductsService` plus the health service
///
/// # Errors
///
/// Returns an error if the database is unreachable after retries, a migration
/// fails, an address is invalid or the server fails to bind.
pub async fn run(config: Config) -> Result<()> {
    info!(environment = ?config.environment, "Starting {}", APP_NAME);

    let db = database::postgres::connect_from_config_with_retry(config.postgres.clone(), None)
        .await
        .wrap_err("Failed to connect to database")?;

    if config.run_migrations {
        database::postgres::run_migrations::<Migrator>(&db, APP_NAME)
            .await
            .wrap_err("Failed to run database migrations")?;
    }

    let notifier = NatsNotifier::connect(&config.nats)
        .await
        .wrap_err("Failed to connect to NATS")?;

    let users_channel = grpc_client::create_channel_lazy(config.user_service_addr.clone())
        .wrap_err_with(|| format!("Invalid USER_SERVICE_ADDR: {}", config.user_service_addr))?;

    // Create repository and service layers
    let repository = PgProductRepository::new(db.clone());
    let service = ProductService::new(
        repository,
        GrpcIdentityResolver::new(users_channel),
        notifier,
    );
    let products_service = ProductsServiceImpl::new(service);

    let addr = config
        .server
        .socket_addr()
        .wrap_err("Failed to parse server address")?;

    // Health reporter for Kubernetes liveness and readiness checks
    let (mut health_reporter, health_service) = create_health_service();
    GrpcServer::setup_health(&mut health_reporter, SERVICE_NAME).await;
    let health_watch = tokio::spawn(watch_database(db, health_reporter.clone()));

    GrpcServer::log_startup(&config.server, SERVICE_NAME);

    let mut products_server = ProductsServiceServer::new(products_service)
        .max_decoding_message_size(config.server.max_message_size)
        .max_encoding_message_size(config.server.max_message_size);
    if config.server.enable_compression {
        products_server = products_server
            .accept_compressed(CompressionEncoding::Zstd)
            .send_compressed(CompressionEncoding::Zstd);
    }

    let served = Server::builder()
        .add_service(health_service)
        .add_service(products_server)
        .serve_with_shutdown(addr, shutdown_signal())
        .await;

    GrpcServer::mark_not_serving(&mut health_reporter, SERVICE_NAME).await;
    health_watch.abort();
    served.wrap_err("gRPC server failed")?;

    info!("{} shutdown complete", APP_NAME);
    Ok(())
}

/// Flip the health status when the database stops (or resumes) answering.
async fn watch_database(db: DatabaseConnection, mut reporter: HealthReporter) {
    let mut interval = tokio::time::interval(HEALTH_CHECK_INTERVAL);
    // The first tick completes immediately
    interval.tick().await;

    let mut serving = true;
    loop {
        interval.tick().await;

        match (check_health(&db).await, serving) {
            (Err(e), true) => {
                warn!(error = %e, "Database health check failed, marking not serving");
                GrpcServer::mark_not_serving(&mut reporter, SERVICE_NAME).await;
                serving = false;
            }
            (Ok(()), false) => {
                info!("Database reachable again");
                GrpcServer::setup_health(&mut reporter, SERVICE_NAME).await;
                serving = true;
            }
            _ => {}
        }
    }
}
