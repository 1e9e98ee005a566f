use std::cell::Cell;

use super::*;

fn unavailable() -> ApiError {
    ApiError::with_status(503, "service unavailable")
}

/// Instant-retry policy so tests run without a browser timer.
fn policy() -> RetryPolicy {
    RetryPolicy {
        max_retries: 3,
        delay_ms: 0,
    }
}

// =============================================================
// should_retry
// =============================================================

#[test]
fn retries_only_service_unavailable() {
    let p = policy();
    assert!(p.should_retry(&unavailable(), 0));
    assert!(!p.should_retry(&ApiError::with_status(500, "boom"), 0));
    assert!(!p.should_retry(&ApiError::with_status(403, "forbidden"), 0));
    let network = ApiError { status: None, message: "offline".to_owned() };
    assert!(!p.should_retry(&network, 0));
}

#[test]
fn retry_budget_is_exclusive_of_first_attempt() {
    let p = policy();
    assert!(p.should_retry(&unavailable(), 2));
    assert!(!p.should_retry(&unavailable(), 3));
}

// =============================================================
// with_retry
// =============================================================

#[test]
fn three_failures_then_success_issues_four_requests() {
    let calls = Cell::new(0u32);
    let result: Result<u32, ApiError> = futures::executor::block_on(with_retry(policy(), || {
        let n = calls.get();
        calls.set(n + 1);
        async move {
            if n < 3 { Err(unavailable()) } else { Ok(42) }
        }
    }));
    assert_eq!(result, Ok(42));
    assert_eq!(calls.get(), 4);
}

#[test]
fn persistent_unavailability_ends_terminal_after_budget() {
    let calls = Cell::new(0u32);
    let result: Result<u32, ApiError> = futures::executor::block_on(with_retry(policy(), || {
        calls.set(calls.get() + 1);
        async { Err(unavailable()) }
    }));
    assert_eq!(result, Err(unavailable()));
    // max_retries + 1 requests in total.
    assert_eq!(calls.get(), 4);
}

#[test]
fn non_retryable_failure_surfaces_immediately() {
    let calls = Cell::new(0u32);
    let result: Result<u32, ApiError> = futures::executor::block_on(with_retry(policy(), || {
        calls.set(calls.get() + 1);
        async { Err(ApiError::with_status(403, "forbidden")) }
    }));
    assert_eq!(result, Err(ApiError::with_status(403, "forbidden")));
    assert_eq!(calls.get(), 1);
}

#[test]
fn immediate_success_issues_one_request() {
    let calls = Cell::new(0u32);
    let result: Result<&str, ApiError> = futures::executor::block_on(with_retry(policy(), || {
        calls.set(calls.get() + 1);
        async { Ok("loaded") }
    }));
    assert_eq!(result, Ok("loaded"));
    assert_eq!(calls.get(), 1);
}
