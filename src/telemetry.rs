//! Telemetry metric name constants.
//!
//! Centralised metric names for chavruta operations. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `chavruta_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `operation` — endpoint concern ("chat", "topics", "daf_info")
//! - `style` — response style ("main", "traditional", "modern")
//! - `status` — outcome: "ok" or "error"

/// Total chat/topics requests handled.
///
/// Labels: `operation`, `status` ("ok" | "error").
pub const REQUESTS_TOTAL: &str = "chavruta_requests_total";

/// Request duration in seconds.
///
/// Labels: `operation`.
pub const REQUEST_DURATION_SECONDS: &str = "chavruta_request_duration_seconds";

/// Total retry attempts (not counting the initial request).
///
/// Labels: `operation`.
pub const RETRIES_TOTAL: &str = "chavruta_retries_total";

/// Total response-cache hits.
///
/// Labels: `operation`.
pub const CACHE_HITS_TOTAL: &str = "chavruta_cache_hits_total";

/// Total response-cache misses.
///
/// Labels: `operation`.
pub const CACHE_MISSES_TOTAL: &str = "chavruta_cache_misses_total";
