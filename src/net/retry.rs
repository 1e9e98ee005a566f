//! Bounded retry for transient backend unavailability.
//!
//! Only the service-unavailable signal (HTTP 503) is retried; every other
//! failure class surfaces immediately. The policy is a plain value so each
//! call site chooses whether (and how hard) to retry — currently only the
//! admin order listing opts in.

#[cfg(test)]
#[path = "retry_test.rs"]
mod retry_test;

use std::future::Future;

use super::api::ApiError;

/// Fixed-delay, fixed-attempt-count retry policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the initial attempt; total requests = `max_retries + 1`.
    pub max_retries: u32,
    pub delay_ms: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            delay_ms: 2000,
        }
    }
}

impl RetryPolicy {
    /// Whether a failed attempt (0-based) should be retried.
    pub fn should_retry(&self, err: &ApiError, attempt: u32) -> bool {
        err.is_service_unavailable() && attempt < self.max_retries
    }
}

/// Run `fetch` until it succeeds, the failure is non-retryable, or the
/// attempt budget is spent.
pub async fn with_retry<T, F, Fut>(policy: RetryPolicy, mut fetch: F) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let mut attempt = 0;
    loop {
        match fetch().await {
            Ok(value) => return Ok(value),
            Err(err) if policy.should_retry(&err, attempt) => {
                attempt += 1;
                if policy.delay_ms > 0 {
                    gloo_timers::future::TimeoutFuture::new(policy.delay_ms).await;
                }
            }
            Err(err) => return Err(err),
        }
    }
}
