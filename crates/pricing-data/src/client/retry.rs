//! Generic retry loop driving an operation through a [`RetryPolicy`].

use std::future::Future;

use log::{debug, warn};

use crate::errors::{PricingDataError, RetryClass};

use super::backoff::RetryPolicy;

/// Run `op` until it succeeds, fails permanently, or exhausts the policy's
/// attempts.
///
/// `op` receives the zero-based attempt index. Errors classified
/// [`RetryClass::Never`] propagate immediately; transient errors trigger a
/// jittered backoff sleep before the next attempt. When the final attempt
/// fails transiently, the last error is wrapped in
/// [`PricingDataError::RetriesExhausted`] with the function name and total
/// attempt count.
pub(crate) async fn run_with_retry<T, F, Fut>(
    function: &str,
    policy: &RetryPolicy,
    mut op: F,
) -> Result<T, PricingDataError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, PricingDataError>>,
{
    let mut attempt: u32 = 0;
    loop {
        match op(attempt).await {
            Ok(value) => {
                if attempt > 0 {
                    debug!(
                        "edge function '{}': succeeded on attempt {}",
                        function,
                        attempt + 1
                    );
                }
                return Ok(value);
            }
            Err(error) => {
                if error.retry_class() == RetryClass::Never {
                    warn!(
                        "edge function '{}': permanent failure on attempt {}: {}",
                        function,
                        attempt + 1,
                        error
                    );
                    return Err(error);
                }
                if attempt >= policy.max_retries {
                    warn!(
                        "edge function '{}': giving up after {} attempts: {}",
                        function,
                        attempt + 1,
                        error
                    );
                    return Err(PricingDataError::RetriesExhausted {
                        function: function.to_string(),
                        attempts: attempt + 1,
                        source: Box::new(error),
                    });
                }

                attempt += 1;
                let delay = policy.jittered_delay(attempt);
                debug!(
                    "edge function '{}': transient failure ({}), retrying in {:?} (attempt {} of {})",
                    function,
                    error,
                    delay,
                    attempt + 1,
                    policy.max_retries + 1
                );
                tokio::time::sleep(delay).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    use super::*;

    fn status_error(status: u16) -> PricingDataError {
        PricingDataError::Status {
            function: "get-pricing".to_string(),
            status,
            body: String::new(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_succeeds_after_transient_failures() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let result = run_with_retry("get-pricing", &RetryPolicy::default(), move |_| {
            let counter = counter.clone();
            async move {
                match counter.fetch_add(1, Ordering::SeqCst) {
                    0 | 1 => Err(status_error(500)),
                    _ => Ok(42u32),
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_non_retryable_fails_after_single_attempt() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let result: Result<u32, _> =
            run_with_retry("get-pricing", &RetryPolicy::default(), move |_| {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Err(status_error(404))
                }
            })
            .await;

        assert!(matches!(
            result,
            Err(PricingDataError::Status { status: 404, .. })
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhaustion_wraps_last_error_with_attempt_count() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let policy = RetryPolicy {
            max_retries: 2,
            ..RetryPolicy::default()
        };

        let result: Result<u32, _> = run_with_retry("get-pricing", &policy, move |_| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err(status_error(503))
            }
        })
        .await;

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        match result {
            Err(PricingDataError::RetriesExhausted {
                function,
                attempts,
                source,
            }) => {
                assert_eq!(function, "get-pricing");
                assert_eq!(attempts, 3);
                assert!(matches!(
                    *source,
                    PricingDataError::Status { status: 503, .. }
                ));
            }
            other => panic!("expected RetriesExhausted, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_attempt_success_makes_one_call() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let result = run_with_retry("get-pricing", &RetryPolicy::default(), move |_| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok("ok")
            }
        })
        .await;

        assert_eq!(result.unwrap(), "ok");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_attempt_index_is_passed_to_operation() {
        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
        let recorder = seen.clone();
        let policy = RetryPolicy {
            max_retries: 2,
            ..RetryPolicy::default()
        };

        let _: Result<u32, _> = run_with_retry("get-pricing", &policy, move |attempt| {
            let recorder = recorder.clone();
            async move {
                recorder.lock().unwrap().push(attempt);
                Err(status_error(500))
            }
        })
        .await;

        assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2]);
    }
}
