//! GeminiBackend against a mock Gemini REST server

use generator::{BackendFailure, GeminiBackend, GeminiSettings, TextBackend};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn backend_for(server: &MockServer) -> GeminiBackend {
    GeminiBackend::new(GeminiSettings::new("test-key").with_base_url(server.uri()))
}

#[tokio::test]
async fn test_successful_generation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{ "parts": [{ "text": "Tell me about 1975" }] }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "1975 was eventful." }], "role": "model" }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let text = backend_for(&server)
        .generate_content("gemini-1.5-flash", "Tell me about 1975")
        .await
        .unwrap();

    assert_eq!(text, "1975 was eventful.");
}

#[tokio::test]
async fn test_http_429_is_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": { "code": 429, "status": "RESOURCE_EXHAUSTED", "message": "Quota exceeded" }
        })))
        .mount(&server)
        .await;

    let result = backend_for(&server).generate_content("gemini-1.5-pro", "p").await;
    assert!(matches!(result, Err(BackendFailure::RateLimited { .. })));
}

#[tokio::test]
async fn test_server_error_is_other_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .mount(&server)
        .await;

    let result = backend_for(&server).generate_content("gemini-1.5-pro", "p").await;
    match result {
        Err(BackendFailure::Failed { message }) => assert!(message.contains("500")),
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_candidate_text_is_other_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let result = backend_for(&server).generate_content("gemini-1.5-flash", "p").await;
    assert_eq!(
        result,
        Err(BackendFailure::Failed {
            message: "No content in response".to_string()
        })
    );
}

#[tokio::test]
async fn test_transport_errors_do_not_leak_the_api_key() {
    // nothing listens on port 1
    let settings = GeminiSettings::new("SECRET-KEY-123").with_base_url("http://127.0.0.1:1");

    let result = GeminiBackend::new(settings)
        .generate_content("gemini-1.5-flash", "p")
        .await;

    match result {
        Err(BackendFailure::Failed { message }) => {
            assert!(message.starts_with("Network error"));
            assert!(!message.contains("SECRET-KEY-123"));
        }
        other => panic!("expected a network failure, got {other:?}"),
    }
}
