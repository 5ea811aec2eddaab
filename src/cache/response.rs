//! Bounded LRU + TTL cache for generated responses.
//!
//! [`ResponseCache`] maps a structured request fingerprint to previously
//! generated text. A hit bypasses retry logic and the provider call
//! entirely. Hit/miss metrics are emitted on every lookup.
//!
//! Eviction is strict least-recently-used by access time: `get` promotes
//! the entry. Expiry is lazy — an entry past its time-to-live is treated
//! as absent on lookup and removed then; no background sweeper runs.
//!
//! The key is a struct rather than a delimiter-joined string, so
//! structurally different requests can never collide regardless of what
//! the message text contains.

use std::num::NonZeroUsize;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use lru::LruCache;

use crate::telemetry;
use crate::types::{Language, Style};

/// Configuration for the response cache.
///
/// ```rust
/// # use chavruta::cache::CacheConfig;
/// # use std::time::Duration;
/// let config = CacheConfig::new()
///     .max_entries(100)
///     .ttl(Duration::from_secs(300));
/// ```
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of cached entries. Default: 100.
    pub max_entries: usize,
    /// Time-to-live for cached entries. Default: 5 minutes.
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 100,
            ttl: Duration::from_secs(300),
        }
    }
}

impl CacheConfig {
    /// Create a new config with sensible defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of cached entries.
    pub fn max_entries(mut self, n: usize) -> Self {
        self.max_entries = n;
        self
    }

    /// Set the time-to-live for cached entries.
    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

/// Structured cache key: every field that affects the generated text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub style: Style,
    pub masechet: String,
    pub daf: u32,
    pub message: String,
    pub language: Language,
    pub model: String,
}

struct Entry {
    value: String,
    inserted: Instant,
}

/// In-memory response cache.
///
/// Interior mutability behind a mutex; the critical section is a map
/// lookup, so contention is negligible next to the provider round-trip.
/// State is process-local and lost on restart by design.
pub struct ResponseCache {
    entries: Mutex<LruCache<CacheKey, Entry>>,
    ttl: Duration,
}

impl ResponseCache {
    /// Create a new response cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_entries.max(1)).expect("capacity is nonzero");
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            ttl: config.ttl,
        }
    }

    /// Look up a cached response. Promotes the entry on hit; an expired
    /// entry counts as a miss and is dropped.
    pub fn get(&self, key: &CacheKey) -> Option<String> {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        match entries.get(key) {
            Some(entry) if entry.inserted.elapsed() <= self.ttl => {
                let value = entry.value.clone();
                metrics::counter!(telemetry::CACHE_HITS_TOTAL, "operation" => "chat").increment(1);
                Some(value)
            }
            Some(_) => {
                entries.pop(key);
                metrics::counter!(telemetry::CACHE_MISSES_TOTAL, "operation" => "chat")
                    .increment(1);
                None
            }
            None => {
                metrics::counter!(telemetry::CACHE_MISSES_TOTAL, "operation" => "chat")
                    .increment(1);
                None
            }
        }
    }

    /// Insert a response, evicting the least-recently-used entry if the
    /// cache is at capacity.
    pub fn insert(&self, key: CacheKey, value: String) {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        entries.put(
            key,
            Entry {
                value,
                inserted: Instant::now(),
            },
        );
    }

    /// Number of live entries (expired entries may still be counted until
    /// their next lookup).
    pub fn len(&self) -> usize {
        self.entries.lock().expect("cache lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
