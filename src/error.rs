//! Chavruta error types

use std::time::Duration;

/// Chavruta error types
#[derive(Debug, thiserror::Error)]
pub enum ChavrutaError {
    // Provider/network errors
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("rate limited, retry after {retry_after:?}")]
    RateLimited { retry_after: Option<Duration> },

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("model not found: {0}")]
    ModelNotFound(String),

    // Soft errors
    #[error("empty response from model")]
    EmptyResponse,

    /// Overall request deadline exceeded. Distinguished from a generic
    /// provider failure so handlers can surface the dedicated
    /// "request took too long" message.
    #[error("request timed out")]
    Timeout,

    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Date precedes the start of the current study cycle.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("no provider configured")]
    NoProvider,
}

impl ChavrutaError {
    /// Whether a retry could plausibly succeed.
    ///
    /// Transient: network failures, rate limits, server-side errors, and
    /// empty completions. Permanent: authentication, validation, and
    /// anything where the request itself is at fault.
    pub fn is_transient(&self) -> bool {
        match self {
            ChavrutaError::Http(_) => true,
            ChavrutaError::RateLimited { .. } => true,
            ChavrutaError::EmptyResponse => true,
            ChavrutaError::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Provider-supplied retry hint, if any.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            ChavrutaError::RateLimited { retry_after } => *retry_after,
            _ => None,
        }
    }
}

/// Result type alias for chavruta operations
pub type Result<T> = std::result::Result<T, ChavrutaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_are_transient() {
        assert!(ChavrutaError::Http("connection reset".into()).is_transient());
        assert!(
            ChavrutaError::Api {
                status: 503,
                message: "unavailable".into()
            }
            .is_transient()
        );
        assert!(ChavrutaError::RateLimited { retry_after: None }.is_transient());
        assert!(ChavrutaError::EmptyResponse.is_transient());
    }

    #[test]
    fn client_errors_are_permanent() {
        assert!(!ChavrutaError::AuthenticationFailed.is_transient());
        assert!(!ChavrutaError::InvalidInput("missing message".into()).is_transient());
        assert!(!ChavrutaError::Timeout.is_transient());
        assert!(
            !ChavrutaError::Api {
                status: 400,
                message: "bad request".into()
            }
            .is_transient()
        );
    }

    #[test]
    fn retry_after_only_from_rate_limit() {
        let hint = Duration::from_secs(7);
        let err = ChavrutaError::RateLimited {
            retry_after: Some(hint),
        };
        assert_eq!(err.retry_after(), Some(hint));
        assert_eq!(ChavrutaError::Http("x".into()).retry_after(), None);
    }
}
