//! Chat response generation.
//!
//! [`ChatGenerator`] composes the response cache and the retry-wrapped
//! provider: an inbound request first checks the cache, on a miss renders
//! the (system, prompt) pair for its style and language, calls the
//! provider through the retry decorator, and stores the sanitized result
//! before returning it. The cache is injected at construction, never
//! ambient, so tests construct a fresh one per case.

pub mod prompts;

use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::cache::{CacheConfig, CacheKey, ResponseCache};
use crate::providers::{RetryConfig, RetryingTextProvider, TextProvider};
use crate::telemetry;
use crate::types::{DafRef, GenerateOptions, Language, PopularTopics, Style};
use crate::{ChavrutaError, Result};

/// Sampling temperature for chat generation.
const CHAT_TEMPERATURE: f32 = 0.7;

/// Generates study-partner responses, with caching and retry.
pub struct ChatGenerator {
    provider: Arc<dyn TextProvider>,
    cache: ResponseCache,
}

impl ChatGenerator {
    /// Wire a generator from a raw provider and policy configuration.
    ///
    /// The provider is wrapped in [`RetryingTextProvider`] here so no call
    /// path can bypass the retry policy.
    pub fn new(
        provider: Arc<dyn TextProvider>,
        retry_config: RetryConfig,
        cache_config: &CacheConfig,
    ) -> Self {
        Self {
            provider: Arc::new(RetryingTextProvider::new(provider, retry_config)),
            cache: ResponseCache::new(cache_config),
        }
    }

    /// Generate a chat response for the given style and daf context.
    ///
    /// Validation failures surface immediately; provider failures surface
    /// only after the retry policy is exhausted.
    pub async fn generate(
        &self,
        style: Style,
        message: &str,
        daf: &DafRef,
        language: Language,
        max_tokens: u32,
        model: &str,
    ) -> Result<String> {
        if message.trim().is_empty() {
            return Err(ChavrutaError::InvalidInput("missing message".into()));
        }
        if daf.masechet.trim().is_empty() || daf.daf == 0 {
            return Err(ChavrutaError::InvalidInput("missing daf context".into()));
        }
        if model.trim().is_empty() {
            return Err(ChavrutaError::InvalidInput("missing model".into()));
        }

        let key = CacheKey {
            style,
            masechet: daf.masechet.clone(),
            daf: daf.daf,
            message: message.to_string(),
            language,
            model: model.to_string(),
        };
        if let Some(cached) = self.cache.get(&key) {
            debug!(style = style.as_str(), "cache hit, skipping provider call");
            return Ok(cached);
        }

        let system = prompts::system_message(style, language);
        let prompt = prompts::prompt(style, message, daf, language);
        let options = GenerateOptions::new(model)
            .max_tokens(max_tokens)
            .temperature(CHAT_TEMPERATURE);

        let started = Instant::now();
        let response = self.provider.generate(system, &prompt, &options).await;
        let status = if response.is_ok() { "ok" } else { "error" };
        metrics::counter!(telemetry::REQUESTS_TOTAL,
            "operation" => "chat", "status" => status)
        .increment(1);
        metrics::histogram!(telemetry::REQUEST_DURATION_SECONDS, "operation" => "chat")
            .record(started.elapsed().as_secs_f64());

        let text = response?.text.trim().to_string();
        if text.is_empty() {
            return Err(ChavrutaError::EmptyResponse);
        }

        self.cache.insert(key, text.clone());
        Ok(text)
    }

    /// Generate three discussion topics per language for a daf.
    ///
    /// The model is asked for a fixed JSON shape; parse failures surface
    /// as [`ChavrutaError::Json`] so the handler can fall back to
    /// placeholders.
    pub async fn popular_topics(
        &self,
        masechet: &str,
        daf: u32,
        model: &str,
    ) -> Result<PopularTopics> {
        if masechet.trim().is_empty() || daf == 0 {
            return Err(ChavrutaError::InvalidInput("missing daf context".into()));
        }

        let prompt = prompts::topics_prompt(masechet, daf);
        let options = GenerateOptions::new(model);

        let started = Instant::now();
        let response = self
            .provider
            .generate(prompts::topics_system_message(), &prompt, &options)
            .await;
        let status = if response.is_ok() { "ok" } else { "error" };
        metrics::counter!(telemetry::REQUESTS_TOTAL,
            "operation" => "topics", "status" => status)
        .increment(1);
        metrics::histogram!(telemetry::REQUEST_DURATION_SECONDS, "operation" => "topics")
            .record(started.elapsed().as_secs_f64());

        let topics: PopularTopics = serde_json::from_str(response?.text.trim())?;
        Ok(topics)
    }
}
