/// Re-export tonic's Interceptor trait for convenience
pub use tonic::service::Interceptor;

pub mod tracing;

pub use tracing::TracingInterceptor;
