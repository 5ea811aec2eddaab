//! HTTP route handlers.
//!
//! Handlers parse the wire shapes, race the generator against the
//! per-endpoint deadline, and translate failures into localized
//! `{error, details}` bodies with status 500. A timeout gets its own
//! user-facing message; everything else shares the generic one.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::error;

use super::AppState;
use crate::calendar;
use crate::i18n;
use crate::types::{DafRef, Language, PopularTopics, Style};
use crate::{ChavrutaError, Result};

/// `POST /api/chat*` request body.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(rename = "dafInfo")]
    pub daf_info: Option<DafRef>,
    #[serde(default)]
    pub model: Option<String>,
}

/// `POST /api/chat*` success body.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Error body for failed requests.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub details: String,
}

/// `GET /api/popular-topics` query parameters.
#[derive(Debug, Deserialize)]
pub struct TopicsQuery {
    #[serde(default)]
    pub masechet: Option<String>,
    #[serde(default)]
    pub daf: Option<u32>,
}

pub async fn chat_main(state: State<AppState>, request: Json<ChatRequest>) -> Response {
    chat_with_style(state, request, Style::Main).await
}

pub async fn chat_traditional(state: State<AppState>, request: Json<ChatRequest>) -> Response {
    chat_with_style(state, request, Style::Traditional).await
}

pub async fn chat_modern(state: State<AppState>, request: Json<ChatRequest>) -> Response {
    chat_with_style(state, request, Style::Modern).await
}

/// Token budgets per style; the modern prompt asks for a 50-word answer.
fn max_tokens_for(style: Style) -> u32 {
    match style {
        Style::Main => 120,
        Style::Traditional => 150,
        Style::Modern => 100,
    }
}

async fn chat_with_style(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
    style: Style,
) -> Response {
    let language = i18n::detect_language(&request.message);
    match generate_chat(&state, &request, style, language).await {
        Ok(response) => Json(ChatResponse { response }).into_response(),
        Err(e) => {
            error!(style = style.as_str(), error = %e, "chat generation failed");
            localized_error(language, &e)
        }
    }
}

async fn generate_chat(
    state: &AppState,
    request: &ChatRequest,
    style: Style,
    language: Language,
) -> Result<String> {
    let daf = request
        .daf_info
        .as_ref()
        .ok_or_else(|| ChavrutaError::InvalidInput("missing daf context".into()))?;
    let model = request
        .model
        .as_deref()
        .unwrap_or(&state.default_model);

    tokio::time::timeout(
        state.chat_timeout,
        state.generator.generate(
            style,
            &request.message,
            daf,
            language,
            max_tokens_for(style),
            model,
        ),
    )
    .await
    .map_err(|_| ChavrutaError::Timeout)?
}

/// Translate a failure into the localized 500 body.
fn localized_error(language: Language, error: &ChavrutaError) -> Response {
    let message = match error {
        ChavrutaError::Timeout => i18n::timeout_message(language),
        _ => i18n::generic_error_message(language),
    };
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: message.to_string(),
            details: error.to_string(),
        }),
    )
        .into_response()
}

/// `GET /api/daf-info` — today's daf with display dates.
pub async fn daf_info(State(_state): State<AppState>) -> Response {
    let today = chrono::Local::now().date_naive();
    match calendar::daf_info(today) {
        Ok(info) => Json(info).into_response(),
        Err(e) => {
            error!(error = %e, "daf computation failed");
            localized_error(Language::En, &e)
        }
    }
}

/// `GET /api/popular-topics` — three topics per language.
///
/// Degrades to localized placeholders on any failure, matching the UI's
/// expectation of always receiving a well-formed topics payload.
pub async fn popular_topics(
    State(state): State<AppState>,
    Query(query): Query<TopicsQuery>,
) -> Json<PopularTopics> {
    let topics = match (query.masechet, query.daf) {
        (Some(masechet), Some(daf)) => tokio::time::timeout(
            state.topics_timeout,
            state
                .generator
                .popular_topics(&masechet, daf, &state.default_model),
        )
        .await
        .map_err(|_| ChavrutaError::Timeout)
        .and_then(|r| r),
        _ => Err(ChavrutaError::InvalidInput(
            "missing masechet or daf".into(),
        )),
    };

    match topics {
        Ok(topics) => Json(topics),
        Err(e) => {
            error!(error = %e, "topics generation failed, serving placeholders");
            Json(PopularTopics::loading())
        }
    }
}

/// `GET /health` — liveness probe.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
