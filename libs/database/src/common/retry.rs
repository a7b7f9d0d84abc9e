use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Retry policy for establishing connections at startup
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retries after the first attempt
    pub max_retries: u32,

    /// Delay before the first retry, in milliseconds
    pub initial_delay_ms: u64,

    /// Upper bound for any single delay, in milliseconds
    pub max_delay_ms: u64,

    /// Growth factor applied to the delay after each failure
    pub backoff_multiplier: f64,

    /// Randomize each delay to between 50% and 100% of its nominal value
    pub use_jitter: bool,
}

impl RetryConfig {
    /// Defaults: 5 retries, 200ms initial delay, 5s cap, x2 backoff, jitter on.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_initial_delay(mut self, delay_ms: u64) -> Self {
        self.initial_delay_ms = delay_ms;
        self
    }

    pub fn with_max_delay(mut self, delay_ms: u64) -> Self {
        self.max_delay_ms = delay_ms;
        self
    }

    pub fn without_jitter(mut self) -> Self {
        self.use_jitter = false;
        self
    }

    /// Nominal (un-jittered) delay before retry number `retry` (1-based).
    pub fn delay_for(&self, retry: u32) -> Duration {
        let exponent = retry.saturating_sub(1) as i32;
        let nominal = self.initial_delay_ms as f64 * self.backoff_multiplier.powi(exponent);
        Duration::from_millis((nominal as u64).min(self.max_delay_ms))
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 5,
            initial_delay_ms: 200,
            max_delay_ms: 5000,
            backoff_multiplier: 2.0,
            use_jitter: true,
        }
    }
}

/// Retry an async operation with exponential backoff
///
/// The operation runs at most `max_retries + 1` times; the last error is returned.
///
/// # Example
/// ```ignore
/// use database::common::retry::{retry_with_backoff, RetryConfig};
///
/// let db = retry_with_backoff(
///     || database::postgres::connect_with_options(options.clone()),
///     RetryConfig::new().with_max_retries(10),
/// ).await?;
/// ```
pub async fn retry_with_backoff<F, Fut, T, E>(mut operation: F, config: RetryConfig) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut retry = 0;

    loop {
        match operation().await {
            Ok(result) => {
                if retry > 0 {
                    debug!(retries = retry, "Operation succeeded after retrying");
                }
                return Ok(result);
            }
            Err(e) if retry >= config.max_retries => {
                warn!(attempts = retry + 1, error = %e, "Operation failed, giving up");
                return Err(e);
            }
            Err(e) => {
                retry += 1;

                let nominal = config.delay_for(retry);
                let delay = if config.use_jitter {
                    apply_jitter(nominal)
                } else {
                    nominal
                };

                warn!(
                    attempt = retry,
                    max_retries = config.max_retries,
                    delay_ms = delay.as_millis() as u64,
                    error = %e,
                    "Operation failed, retrying"
                );

                tokio::time::sleep(delay).await;
            }
        }
    }
}

/// Scale a delay by a pseudo-random factor in [0.5, 1.0)
fn apply_jitter(delay: Duration) -> Duration {
    use std::collections::hash_map::RandomState;
    use std::hash::BuildHasher;

    let random_factor =
        (RandomState::new().hash_one(std::time::SystemTime::now()) % 50) as f64 / 100.0 + 0.5;

    delay.mul_f64(random_factor)
}

/// Retry with the default policy
pub async fn retry<F, Fut, T, E>(operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    retry_with_backoff(operation, RetryConfig::default()).await
}
