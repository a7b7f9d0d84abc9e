use thiserror::Error;

pub type GrpcResult<T> = Result<T, GrpcError>;

/// Errors raised while wiring up gRPC channels and servers
#[derive(Error, Debug)]
pub enum GrpcError {
  /// Invalid URI provided for a downstream service
  #[error("Invalid URI: {0}")]
  InvalidUri(#[from] tonic::transport::Error),

  /// Invalid configuration (bind address, limits)
  #[error("Invalid configuration: {0}")]
  InvalidConfig(String),
}
