use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chavruta::providers::retry::{RetryConfig, RetryingTextProvider};
use chavruta::providers::traits::TextProvider;
use chavruta::{ChavrutaError, GenerateOptions, GenerateResponse, Result};

/// Mock provider that fails N times then succeeds.
struct FailThenSucceed {
    fail_count: AtomicU32,
    fail_with: fn() -> ChavrutaError,
    total_calls: AtomicU32,
}

impl FailThenSucceed {
    fn new(failures: u32, fail_with: fn() -> ChavrutaError) -> Self {
        Self {
            fail_count: AtomicU32::new(failures),
            fail_with,
            total_calls: AtomicU32::new(0),
        }
    }

    fn call_count(&self) -> u32 {
        self.total_calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl TextProvider for FailThenSucceed {
    fn name(&self) -> &str {
        "mock-retry"
    }

    async fn generate(
        &self,
        _system: &str,
        _prompt: &str,
        _options: &GenerateOptions,
    ) -> Result<GenerateResponse> {
        self.total_calls.fetch_add(1, Ordering::Relaxed);
        let remaining = self.fail_count.load(Ordering::Relaxed);
        if remaining > 0 {
            self.fail_count.fetch_sub(1, Ordering::Relaxed);
            return Err((self.fail_with)());
        }
        Ok(GenerateResponse { text: "ok".into() })
    }
}

fn fast_config(max_attempts: u32) -> RetryConfig {
    RetryConfig::new()
        .max_attempts(max_attempts)
        .initial_delay(Duration::from_millis(1))
        .max_delay(Duration::from_millis(5))
        .jitter(false)
}

#[tokio::test]
async fn retries_on_transient_error_then_succeeds() {
    let inner = Arc::new(FailThenSucceed::new(2, || ChavrutaError::RateLimited {
        retry_after: None,
    }));
    let provider = RetryingTextProvider::new(inner.clone(), fast_config(3));

    let result = provider
        .generate("sys", "prompt", &GenerateOptions::new("test"))
        .await;

    assert_eq!(result.unwrap().text, "ok");
    assert_eq!(inner.call_count(), 3); // 2 failures + 1 success
}

#[tokio::test]
async fn succeeds_first_try_without_further_attempts() {
    let inner = Arc::new(FailThenSucceed::new(0, || {
        ChavrutaError::Http("unused".into())
    }));
    let provider = RetryingTextProvider::new(inner.clone(), fast_config(3));

    let result = provider
        .generate("sys", "prompt", &GenerateOptions::new("test"))
        .await;

    assert!(result.is_ok());
    assert_eq!(inner.call_count(), 1);
}

#[tokio::test]
async fn gives_up_after_max_attempts_with_last_error() {
    let inner = Arc::new(FailThenSucceed::new(10, || {
        ChavrutaError::Http("connection reset".into())
    }));
    let provider = RetryingTextProvider::new(inner.clone(), fast_config(3));

    let result = provider
        .generate("sys", "prompt", &GenerateOptions::new("test"))
        .await;

    // The underlying failure propagates unwrapped.
    match result {
        Err(ChavrutaError::Http(msg)) => assert_eq!(msg, "connection reset"),
        other => panic!("expected Http error, got {other:?}"),
    }
    assert_eq!(inner.call_count(), 3);
}

#[tokio::test]
async fn does_not_retry_permanent_errors() {
    let inner = Arc::new(FailThenSucceed::new(1, || {
        ChavrutaError::AuthenticationFailed
    }));
    let provider = RetryingTextProvider::new(inner.clone(), fast_config(5));

    let result = provider
        .generate("sys", "prompt", &GenerateOptions::new("test"))
        .await;

    assert!(matches!(result, Err(ChavrutaError::AuthenticationFailed)));
    assert_eq!(inner.call_count(), 1); // no retry
}

#[tokio::test]
async fn respects_retry_after_duration() {
    let inner = Arc::new(FailThenSucceed::new(1, || ChavrutaError::RateLimited {
        retry_after: Some(Duration::from_millis(50)),
    }));
    let provider = RetryingTextProvider::new(inner.clone(), fast_config(2));

    let start = std::time::Instant::now();
    let result = provider
        .generate("sys", "prompt", &GenerateOptions::new("test"))
        .await;
    let elapsed = start.elapsed();

    assert!(result.is_ok());
    // Should have waited at least 50ms (the retry_after), not 1ms.
    assert!(elapsed >= Duration::from_millis(40)); // some tolerance
}

#[tokio::test]
async fn single_attempt_config_never_retries() {
    let inner = Arc::new(FailThenSucceed::new(1, || ChavrutaError::RateLimited {
        retry_after: None,
    }));
    let provider = RetryingTextProvider::new(inner.clone(), RetryConfig::disabled());

    let result = provider
        .generate("sys", "prompt", &GenerateOptions::new("test"))
        .await;

    assert!(matches!(
        result,
        Err(ChavrutaError::RateLimited { retry_after: None })
    ));
    assert_eq!(inner.call_count(), 1);
}

#[tokio::test]
async fn succeeds_on_final_attempt() {
    let inner = Arc::new(FailThenSucceed::new(3, || {
        ChavrutaError::Api {
            status: 503,
            message: "unavailable".into(),
        }
    }));
    let provider = RetryingTextProvider::new(inner.clone(), fast_config(4));

    let result = provider
        .generate("sys", "prompt", &GenerateOptions::new("test"))
        .await;

    assert!(result.is_ok());
    assert_eq!(inner.call_count(), 4);
}
