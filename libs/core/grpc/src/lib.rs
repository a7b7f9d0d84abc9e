//! # gRPC Support Library
//!
//! Shared gRPC plumbing for the products service and the clients it talks to:
//!
//! - **Channels**: lazily-connected, HTTP/2-tuned channels for downstream services
//! - **Metadata**: bearer credential, request id and `grpc-timeout` helpers
//! - **Interceptors**: request-id propagation on outgoing calls
//! - **Server**: environment-driven server configuration, health reporting, shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use grpc_client::{ChannelConfig, TracingInterceptor, create_channel_lazy_with_config};
//! use rpc::users::users_service_client::UsersServiceClient;
//!
//! let channel = create_channel_lazy_with_config("http://users:50051", ChannelConfig::default())?;
//! let client = UsersServiceClient::with_interceptor(channel, TracingInterceptor::new());
//! ```

pub mod channel;
pub mod error;
pub mod interceptors;
pub mod metadata;
pub mod server;

pub use channel::{ChannelConfig, create_channel_lazy, create_channel_lazy_with_config};
pub use error::{GrpcError, GrpcResult};
pub use interceptors::TracingInterceptor;
