//! gRPC Server helpers
//!
//! ```ignore
//! use grpc_client::server::{GrpcServer, ServerConfig};
//! use core_config::FromEnv;
//! use tonic::transport::Server;
//!
//! let config = ServerConfig::from_env()?;
//! let (mut health_reporter, health_service) = tonic_health::server::health_reporter();
//! GrpcServer::setup_health(&mut health_reporter, rpc::products::SERVICE_NAME).await;
//! GrpcServer::log_startup(&config, rpc::products::SERVICE_NAME);
//!
//! Server::builder()
//!     .add_service(health_service)
//!     .add_service(ProductsServiceServer::new(my_impl))
//!     .serve_with_shutdown(config.socket_addr()?, grpc_client::server::shutdown_signal())
//!     .await?;
//! ```

mod builder;
mod config;

pub use builder::{GrpcServer, create_health_service, shutdown_signal};
pub use config::ServerConfig;
