//! Utilities shared by all database connectors

pub mod error;
pub mod retry;

pub use error::{DatabaseError, DatabaseResult};
pub use retry::{RetryConfig, retry, retry_with_backoff};
