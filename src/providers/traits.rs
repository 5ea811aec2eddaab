//! Provider trait for hosted text generation.

use async_trait::async_trait;

use crate::Result;
use crate::types::{GenerateOptions, GenerateResponse};

/// A hosted text-generation service.
///
/// The generator treats this as an opaque fallible async call; retry and
/// caching are layered on top. Implementations must be safe to invoke more
/// than once for the same input — the retry decorator re-invokes on
/// transient failure without any deduplication.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Human-readable provider name for logging and metrics.
    fn name(&self) -> &str;

    /// Generate a completion for the given system message and prompt.
    async fn generate(
        &self,
        system: &str,
        prompt: &str,
        options: &GenerateOptions,
    ) -> Result<GenerateResponse>;
}
