//! OpenAI-compatible text-generation client.
//!
//! Speaks the hosted generation wire format: POST a JSON body of
//! `{model, system, prompt, max_tokens, temperature}` and read back
//! `{text}`. Errors are mapped by status code so the retry layer can
//! distinguish transient failures from permanent ones.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::traits::TextProvider;
use crate::types::{GenerateOptions, GenerateResponse};
use crate::{ChavrutaError, Result};

/// Default base URL for the hosted generation API.
const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Default per-request HTTP timeout. Callers race their own, tighter
/// deadline on top of this; the client timeout only guards against a
/// wedged connection.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for an OpenAI-compatible text-generation endpoint.
#[derive(Clone)]
pub struct OpenAiClient {
    api_key: String,
    http: Client,
    base_url: String,
}

impl OpenAiClient {
    /// Create a new client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client with a custom base URL (for testing with wiremock).
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let http = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self {
            api_key: api_key.into(),
            http,
            base_url: base_url.into(),
        }
    }

    /// Perform a single generation call.
    pub async fn generate_text(
        &self,
        system: &str,
        prompt: &str,
        options: &GenerateOptions,
    ) -> Result<GenerateResponse> {
        let url = format!("{}/v1/generate", self.base_url);

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&GenerateRequest {
                model: &options.model,
                system,
                prompt,
                max_tokens: options.max_tokens,
                temperature: options.temperature,
            })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ChavrutaError::Timeout
                } else {
                    ChavrutaError::Http(e.to_string())
                }
            })?;

        self.handle_response_errors(&response, &options.model)?;

        let body: GenerateResponseBody = response
            .json()
            .await
            .map_err(|e| ChavrutaError::Http(e.to_string()))?;

        if body.text.trim().is_empty() {
            return Err(ChavrutaError::EmptyResponse);
        }

        Ok(GenerateResponse { text: body.text })
    }

    /// Check response status and map to the appropriate error.
    fn handle_response_errors(&self, response: &reqwest::Response, model: &str) -> Result<()> {
        let status = response.status();

        if status.is_success() {
            return Ok(());
        }

        match status.as_u16() {
            401 => Err(ChavrutaError::AuthenticationFailed),
            404 => Err(ChavrutaError::ModelNotFound(model.to_string())),
            429 => {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.parse::<u64>().ok())
                    .map(Duration::from_secs);
                Err(ChavrutaError::RateLimited { retry_after })
            }
            code => Err(ChavrutaError::Api {
                status: code,
                message: format!("generation API error: {status}"),
            }),
        }
    }
}

#[async_trait]
impl TextProvider for OpenAiClient {
    fn name(&self) -> &str {
        "openai"
    }

    async fn generate(
        &self,
        system: &str,
        prompt: &str,
        options: &GenerateOptions,
    ) -> Result<GenerateResponse> {
        self.generate_text(system, prompt, options).await
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    system: &'a str,
    prompt: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Deserialize)]
struct GenerateResponseBody {
    text: String,
}
