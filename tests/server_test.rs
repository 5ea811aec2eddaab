use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chavruta::ChatGenerator;
use chavruta::cache::CacheConfig;
use chavruta::providers::{OpenAiClient, RetryConfig};
use chavruta::server::{AppState, create_router};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn router_for(server: &MockServer) -> Router {
    let provider = Arc::new(OpenAiClient::with_base_url("test-key", server.uri()));
    let generator = ChatGenerator::new(provider, RetryConfig::disabled(), &CacheConfig::new());
    let state = AppState {
        generator: Arc::new(generator),
        default_model: "gpt-4o".into(),
        chat_timeout: Duration::from_secs(5),
        topics_timeout: Duration::from_secs(5),
    };
    create_router(state, 64 * 1024)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn chat_happy_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "text": "The mishnah opens with the evening Shema."
        })))
        .mount(&server)
        .await;

    let app = router_for(&server);
    let response = app
        .oneshot(post_json(
            "/api/chat",
            json!({
                "message": "What does the first mishnah discuss?",
                "dafInfo": { "masechet": "Berachot", "daf": 2 }
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["response"], "The mishnah opens with the evening Shema.");
}

#[tokio::test]
async fn traditional_and_modern_routes_exist() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "text": "answer" })))
        .mount(&server)
        .await;

    for uri in ["/api/chat/traditional", "/api/chat/modern"] {
        let response = router_for(&server)
            .oneshot(post_json(
                uri,
                json!({
                    "message": "hello",
                    "dafInfo": { "masechet": "Berachot", "daf": 2 }
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "for {uri}");
    }
}

#[tokio::test]
async fn missing_daf_info_yields_localized_500() {
    let server = MockServer::start().await;
    let app = router_for(&server);

    let response = app
        .oneshot(post_json("/api/chat", json!({ "message": "hello" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(
        body["error"],
        "Sorry, there was an error processing your message. Please try again."
    );
    assert!(body["details"].as_str().unwrap().contains("daf context"));
    // No provider traffic for a validation failure.
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn hebrew_message_gets_hebrew_error() {
    let server = MockServer::start().await;
    // No mock mounted: the unmatched 404 maps to a permanent failure.
    let app = router_for(&server);

    let response = app
        .oneshot(post_json(
            "/api/chat",
            json!({
                "message": "מה הדף אומר?",
                "dafInfo": { "masechet": "Berachot", "daf": 2 }
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(
        body["error"],
        "מצטערים, אירעה שגיאה בעיבוד ההודעה. נא לנסות שוב."
    );
}

#[tokio::test]
async fn explicit_model_overrides_the_default() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/generate"))
        .and(wiremock::matchers::body_partial_json(json!({
            "model": "gpt-4o-mini"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "text": "mini" })))
        .expect(1)
        .mount(&server)
        .await;

    let response = router_for(&server)
        .oneshot(post_json(
            "/api/chat",
            json!({
                "message": "hello",
                "dafInfo": { "masechet": "Berachot", "daf": 2 },
                "model": "gpt-4o-mini"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn daf_info_returns_both_calendars() {
    let server = MockServer::start().await;
    let response = router_for(&server)
        .oneshot(get("/api/daf-info"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["masechet"].is_string());
    assert!(body["daf"].as_u64().unwrap() >= 2);
    assert!(body["date"].is_string());
    assert!(body["hebrewDate"].is_string());
    assert!(body.get("hebrew_date").is_none());
}

#[tokio::test]
async fn popular_topics_happy_path() {
    let server = MockServer::start().await;
    let payload = json!({
        "en": ["a", "b", "c"],
        "he": ["א", "ב", "ג"]
    });
    Mock::given(method("POST"))
        .and(path("/v1/generate"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "text": payload.to_string() })),
        )
        .mount(&server)
        .await;

    let response = router_for(&server)
        .oneshot(get("/api/popular-topics?masechet=Berachot&daf=2"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["en"], json!(["a", "b", "c"]));
    assert_eq!(body["he"], json!(["א", "ב", "ג"]));
}

#[tokio::test]
async fn popular_topics_degrades_to_placeholders() {
    let server = MockServer::start().await;
    // Missing query parameters: still a 200 with placeholders.
    let response = router_for(&server)
        .oneshot(get("/api/popular-topics"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["en"], json!(["Loading...", "Loading...", "Loading..."]));
    assert_eq!(body["he"], json!(["טוען...", "טוען...", "טוען..."]));

    // Provider failure: same degradation.
    let response = router_for(&server)
        .oneshot(get("/api/popular-topics?masechet=Berachot&daf=2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["en"][0], "Loading...");
}

#[tokio::test]
async fn health_endpoint() {
    let server = MockServer::start().await;
    let response = router_for(&server).oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn oversized_bodies_are_rejected() {
    let server = MockServer::start().await;
    let provider = Arc::new(OpenAiClient::with_base_url("test-key", server.uri()));
    let generator = ChatGenerator::new(provider, RetryConfig::disabled(), &CacheConfig::new());
    let state = AppState {
        generator: Arc::new(generator),
        default_model: "gpt-4o".into(),
        chat_timeout: Duration::from_secs(5),
        topics_timeout: Duration::from_secs(5),
    };
    // Tiny limit so the request below trips it.
    let app = create_router(state, 64);

    let response = app
        .oneshot(post_json(
            "/api/chat",
            json!({
                "message": "x".repeat(200),
                "dafInfo": { "masechet": "Berachot", "daf": 2 }
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert!(server.received_requests().await.unwrap().is_empty());
}
