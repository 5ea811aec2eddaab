//! HTTP server for the chat API.
//!
//! Serves the [`ChatGenerator`](crate::chat::ChatGenerator) over REST:
//!
//! - `POST /api/chat` — main-style response
//! - `POST /api/chat/traditional`, `POST /api/chat/modern` — fixed styles
//! - `GET /api/daf-info` — today's daf with Gregorian and Hebrew dates
//! - `GET /api/popular-topics?masechet=&daf=` — discussion suggestions
//! - `GET /health` — liveness

pub mod config;
mod routes;

pub use routes::{ChatRequest, ChatResponse, ErrorBody, TopicsQuery};

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::chat::ChatGenerator;
use crate::providers::{OpenAiClient, RetryConfig, TextProvider};
use crate::{ChavrutaError, Result};
use config::{Config, Secrets};

/// Shared state available to every handler.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<ChatGenerator>,
    pub default_model: String,
    pub chat_timeout: Duration,
    pub topics_timeout: Duration,
}

/// Build the application router for the given state and body limit.
///
/// Split from [`serve`] so tests can drive the router directly with
/// `tower::ServiceExt::oneshot`.
pub fn create_router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/api/chat", post(routes::chat_main))
        .route("/api/chat/traditional", post(routes::chat_traditional))
        .route("/api/chat/modern", post(routes::chat_modern))
        .route("/api/daf-info", get(routes::daf_info))
        .route("/api/popular-topics", get(routes::popular_topics))
        .route("/health", get(routes::health))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Build the app state from configuration and secrets.
pub fn build_state(config: &Config, secrets: &Secrets) -> Result<AppState> {
    let api_key = secrets.api_key().ok_or_else(|| {
        ChavrutaError::Configuration(
            "No API key found. Set OPENAI_API_KEY or create ~/.chavruta/secrets.toml".to_string(),
        )
    })?;

    let provider: Arc<dyn TextProvider> =
        Arc::new(OpenAiClient::with_base_url(api_key, &config.provider.base_url));
    let generator = ChatGenerator::new(
        provider,
        RetryConfig::from(&config.retry),
        &(&config.cache).into(),
    );

    Ok(AppState {
        generator: Arc::new(generator),
        default_model: config.provider.default_model.clone(),
        chat_timeout: Duration::from_secs(config.server.limits.chat_timeout_secs),
        topics_timeout: Duration::from_secs(config.server.limits.topics_timeout_secs),
    })
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: Config, secrets: Secrets) -> Result<()> {
    let addr: SocketAddr = config
        .server
        .address
        .parse()
        .map_err(|e| ChavrutaError::Configuration(format!("Invalid address: {e}")))?;

    let state = build_state(&config, &secrets)?;
    let app = create_router(state, config.server.limits.max_body_bytes);

    info!(%addr, "chavrutad starting");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ChavrutaError::Configuration(format!("Failed to bind {addr}: {e}")))?;
    axum::serve(listener, app)
        .await
        .map_err(|e| ChavrutaError::Http(e.to_string()))?;

    Ok(())
}
