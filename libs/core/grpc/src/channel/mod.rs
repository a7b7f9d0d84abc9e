pub mod config;

pub use config::ChannelConfig;

use crate::error::{GrpcError, GrpcResult};
use tonic::transport::{Channel, Endpoint};

/// Creates a lazy gRPC channel with default settings
///
/// Returns immediately without establishing a connection; the connection is made
/// (and re-made after failures) when an RPC is issued. The service can therefore
/// start before its downstream dependencies are reachable.
pub fn create_channel_lazy(addr: impl Into<String>) -> GrpcResult<Channel> {
  create_channel_lazy_with_config(addr, ChannelConfig::default())
}

/// Creates a lazy gRPC channel with custom configuration
///
/// ## Example
/// ```ignore
/// use grpc_client::{create_channel_lazy_with_config, ChannelConfig};
/// use rpc::users::users_service_client::UsersServiceClient;
///
/// let channel = create_channel_lazy_with_config("http://users:50051", ChannelConfig::default())?;
/// let client = UsersServiceClient::new(channel);
/// ```
pub fn create_channel_lazy_with_config(
  addr: impl Into<String>,
  config: ChannelConfig,
) -> GrpcResult<Channel> {
  let addr_string = addr.into();

  let endpoint = Endpoint::from_shared(addr_string.clone()).map_err(|e| {
    tracing::error!(target: "grpc_client", addr = %addr_string, error = ?e, "Invalid URI");
    GrpcError::InvalidUri(e)
  })?;

  let endpoint = config.apply_to_endpoint(endpoint);

  tracing::debug!(
        target: "grpc_client",
        addr = %addr_string,
        "Creating lazy gRPC channel (connects on first request)"
    );

  Ok(endpoint.connect_lazy())
}
