//! Retry configuration, delay calculation, and the provider decorator.
//!
//! Provides [`RetryConfig`] for controlling retry behaviour and
//! [`RetryingTextProvider`], which wraps a [`TextProvider`] with automatic
//! retry on transient errors. All retrying goes through the shared
//! `with_retry()` helper, keeping the logic in a single place.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use tracing::warn;

use super::traits::TextProvider;
use crate::telemetry;
use crate::types::{GenerateOptions, GenerateResponse};
use crate::{ChavrutaError, Result};

/// Configuration for retry behaviour on transient errors.
///
/// Uses multiplicative backoff (×1.5 per attempt, capped) with jitter:
///
/// ```rust
/// # use chavruta::providers::retry::RetryConfig;
/// # use std::time::Duration;
/// let config = RetryConfig::new()
///     .max_attempts(4)
///     .initial_delay(Duration::from_millis(500))
///     .jitter(true);
/// ```
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts (including the initial request).
    /// 1 = no retry. Default: 3.
    pub max_attempts: u32,
    /// Delay before the first retry. Default: 1s.
    pub initial_delay: Duration,
    /// Maximum delay between retries (caps backoff growth, jitter
    /// included). Default: 5s.
    pub max_delay: Duration,
    /// Whether to perturb delays by a uniform factor in [0.9, 1.1].
    /// Default: true.
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(1000),
            max_delay: Duration::from_millis(5000),
            jitter: true,
        }
    }
}

impl RetryConfig {
    /// Create a new config with sensible defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config that disables retries (single attempt).
    pub fn disabled() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    /// Set maximum attempts (including the initial request).
    pub fn max_attempts(mut self, n: u32) -> Self {
        self.max_attempts = n;
        self
    }

    /// Set the delay before the first retry.
    pub fn initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Set the maximum delay between retries.
    pub fn max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Enable or disable jitter.
    pub fn jitter(mut self, enabled: bool) -> Self {
        self.jitter = enabled;
        self
    }

    /// The delay following `current`: grow by ×1.5, cap at `max_delay`,
    /// apply jitter, and cap again so the bound holds jitter included.
    pub fn next_delay(&self, current: Duration) -> Duration {
        let grown = current.mul_f64(1.5).min(self.max_delay);
        let delay = if self.jitter {
            let factor = rand::thread_rng().gen_range(0.9..=1.1);
            grown.mul_f64(factor)
        } else {
            grown
        };
        delay.min(self.max_delay)
    }

    /// The effective delay, respecting provider `retry_after` hints.
    ///
    /// A `retry_after` from a rate-limit response takes precedence over
    /// the calculated backoff.
    pub fn effective_delay(&self, current: Duration, retry_after: Option<Duration>) -> Duration {
        retry_after.unwrap_or_else(|| self.next_delay(current))
    }
}

/// Execute an async operation with retry logic.
///
/// Retries on transient errors (as classified by
/// [`ChavrutaError::is_transient()`]) up to `config.max_attempts`, using
/// multiplicative backoff with jitter and respecting `retry_after` hints
/// from rate-limit errors.
///
/// Permanent errors are returned immediately without retry; after
/// exhaustion the last failure propagates unwrapped.
pub(crate) async fn with_retry<F, Fut, T>(
    config: &RetryConfig,
    provider_name: &str,
    operation: &str,
    f: F,
) -> Result<T>
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = Result<T>>,
{
    let mut last_err = None;
    let mut delay = config.initial_delay;
    for attempt in 1..=config.max_attempts {
        match f().await {
            Ok(result) => return Ok(result),
            Err(e) if e.is_transient() => {
                metrics::counter!(telemetry::RETRIES_TOTAL,
                    "operation" => operation.to_owned(),
                )
                .increment(1);
                if attempt < config.max_attempts {
                    delay = config.effective_delay(delay, e.retry_after());
                    warn!(
                        provider = provider_name,
                        operation,
                        attempt,
                        max_attempts = config.max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "retrying after transient error"
                    );
                    tokio::time::sleep(delay).await;
                }
                last_err = Some(e);
            }
            Err(e) => return Err(e), // permanent error, no retry
        }
    }
    Err(last_err.unwrap_or(ChavrutaError::NoProvider))
}

/// Decorator that wraps a [`TextProvider`] with retry logic.
///
/// On transient errors, retries with backoff up to `config.max_attempts`;
/// non-transient errors are returned immediately. The wrapped provider is
/// re-invoked as-is on every attempt, so its side effects must tolerate
/// repetition.
pub struct RetryingTextProvider {
    inner: Arc<dyn TextProvider>,
    config: RetryConfig,
}

impl RetryingTextProvider {
    /// Wrap a text provider with retry logic.
    pub fn new(inner: Arc<dyn TextProvider>, config: RetryConfig) -> Self {
        Self { inner, config }
    }
}

#[async_trait]
impl TextProvider for RetryingTextProvider {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn generate(
        &self,
        system: &str,
        prompt: &str,
        options: &GenerateOptions,
    ) -> Result<GenerateResponse> {
        with_retry(&self.config, self.inner.name(), "generate", || {
            self.inner.generate(system, prompt, options)
        })
        .await
    }
}
