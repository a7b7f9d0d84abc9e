use tonic::{Request, Status};

use crate::metadata::REQUEST_ID;

/// Interceptor for request correlation on outgoing calls
///
/// Keeps an `x-request-id` the caller already attached (so an inbound request id flows
/// through to downstream services) and generates a fresh UUID v4 otherwise.
///
/// # Example
/// ```ignore
/// use grpc_client::interceptors::TracingInterceptor;
/// use rpc::users::users_service_client::UsersServiceClient;
///
/// let channel = create_channel_lazy("http://[::1]:50051")?;
/// let client = UsersServiceClient::with_interceptor(channel, TracingInterceptor::new());
/// ```
#[derive(Clone, Debug, Default)]
pub struct TracingInterceptor;

impl TracingInterceptor {
    /// Create a new tracing interceptor
    pub fn new() -> Self {
        Self
    }
}

impl tonic::service::Interceptor for TracingInterceptor {
    fn call(&mut self, mut request: Request<()>) -> Result<Request<()>, Status> {
        let request_id = match crate::metadata::request_id(request.metadata()) {
            Some(existing) => existing,
            None => {
                let generated = uuid::Uuid::new_v4().to_string();
                request.metadata_mut().insert(
                    REQUEST_ID,
                    generated
                        .parse()
                        .map_err(|_| Status::internal("Failed to create request ID"))?,
                );
                generated
            }
        };

        tracing::debug!(
            target: "grpc_client",
            request_id = %request_id,
            "Outgoing gRPC request"
        );

        Ok(request)
    }
}
