//! Response caching.

pub mod response;

pub use response::{CacheConfig, CacheKey, ResponseCache};
