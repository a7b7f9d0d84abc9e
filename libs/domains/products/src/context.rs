//! Per-request context: correlation id and deadline.

use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;

/// Returned by [`RequestContext::run`] when the deadline elapses first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("deadline exceeded")]
pub struct DeadlineExceeded;

/// Carries the caller's request id and (optional) deadline through one use case.
///
/// Every downstream call made on behalf of the request is wrapped in [`run`](Self::run),
/// so a deadline set once at the edge bounds the whole flow. Dropping the future
/// that holds a context cancels whatever call is in flight.
#[derive(Debug, Clone)]
pub struct RequestContext {
    request_id: String,
    deadline: Option<Instant>,
}

impl RequestContext {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            deadline: None,
        }
    }

    /// Context with a generated request id and no deadline.
    pub fn background() -> Self {
        Self::new(uuid::Uuid::new_v4().to_string())
    }

    /// Bound the request to `timeout` from now. An earlier existing deadline is kept.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        let deadline = Instant::now() + timeout;
        self.with_deadline(deadline)
    }

    /// Bound the request to `deadline`. An earlier existing deadline is kept.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(existing) => existing.min(deadline),
            None => deadline,
        });
        self
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left before the deadline; `Some(ZERO)` once it has passed.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    pub fn is_expired(&self) -> bool {
        self.remaining().is_some_and(|left| left.is_zero())
    }

    /// Drive `future` to completion, or give up at the deadline.
    ///
    /// An already expired context never polls `future`.
    pub async fn run<F: Future>(&self, future: F) -> Result<F::Output, DeadlineExceeded> {
        if self.is_expired() {
            return Err(DeadlineExceeded);
        }

        match self.deadline {
            Some(deadline) => tokio::time::timeout_at(deadline, future)
                .await
                .map_err(|_| DeadlineExceeded),
            None => Ok(future.await),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_without_deadline_runs_to_completion() {
        let ctx = RequestContext::new("req-1");
        assert_eq!(ctx.remaining(), None);
        assert!(!ctx.is_expired());
        assert_eq!(ctx.run(async { 7 }).await, Ok(7));
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_cuts_off_slow_future() {
        let ctx = RequestContext::new("req-2").with_timeout(Duration::from_millis(50));

        let result = ctx
            .run(async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "late"
            })
            .await;

        assert_eq!(result, Err(DeadlineExceeded));
        assert!(ctx.is_expired());
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_context_does_not_start_future() {
        let ctx = RequestContext::new("req-4").with_timeout(Duration::from_millis(1));
        tokio::time::advance(Duration::from_millis(10)).await;

        let started = std::sync::atomic::AtomicBool::new(false);
        let result = ctx
            .run(async {
                started.store(true, std::sync::atomic::Ordering::SeqCst);
                "ready"
            })
            .await;

        assert_eq!(result, Err(DeadlineExceeded));
        assert!(!started.load(std::sync::atomic::Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn test_earlier_deadline_wins() {
        let ctx = RequestContext::new("req-3")
            .with_timeout(Duration::from_millis(100))
            .with_timeout(Duration::from_secs(10));

        assert!(ctx.remaining().unwrap() <= Duration::from_millis(100));
    }

    #[test]
    fn test_background_generates_request_id() {
        let ctx = RequestContext::background();
        assert!(uuid::Uuid::parse_str(ctx.request_id()).is_ok());
    }
}
