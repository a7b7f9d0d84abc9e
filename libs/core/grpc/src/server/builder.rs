//! gRPC Server utilities.

use super::config::ServerConfig;
use tracing::info;

/// Helper for startup logging and health reporting.
pub struct GrpcServer;

impl GrpcServer {
    /// Log server startup information for a single service.
    pub fn log_startup(config: &ServerConfig, service_name: &str) {
        info!(
            addr = %config.addr_string(),
            service = service_name,
            compression = config.enable_compression,
            max_message_size = config.max_message_size,
            "gRPC server starting"
        );
        info!("Health check service enabled (grpc.health.v1.Health)");
    }

    /// Mark a service as serving.
    ///
    /// Also marks the empty service name, which is what k8s probes query by default.
    pub async fn setup_health(
        health_reporter: &mut tonic_health::server::HealthReporter,
        service_name: &str,
    ) {
        health_reporter
            .set_service_status(service_name, tonic_health::ServingStatus::Serving)
            .await;
        health_reporter
            .set_service_status("", tonic_health::ServingStatus::Serving)
            .await;

        info!(service = service_name, "Service marked as serving");
    }

    /// Flip a service (and the generic entry) to not-serving before draining.
    pub async fn mark_not_serving(
        health_reporter: &mut tonic_health::server::HealthReporter,
        service_name: &str,
    ) {
        health_reporter
            .set_service_status(service_name, tonic_health::ServingStatus::NotServing)
            .await;
        health_reporter
            .set_service_status("", tonic_health::ServingStatus::NotServing)
            .await;
    }
}

// Re-export health_reporter for convenience
pub use tonic_health::server::health_reporter as create_health_service;

/// Resolves on Ctrl-C or SIGTERM, for `serve_with_shutdown`.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl-C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
