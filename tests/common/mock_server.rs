//! wiremock helpers for the HTTP model backends.

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "test-key";
pub const GEMINI_MODEL: &str = "gemini-2.5-flash";

/// A Gemini `generateContent` response body whose first candidate says `text`.
pub fn gemini_response(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}

/// An OpenAI chat-completions response body whose first choice says `text`.
pub fn chat_response(text: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": text },
            "finish_reason": "stop"
        }]
    })
}

/// Base URL to hand to the Gemini client for `server`.
pub fn gemini_base(server: &MockServer) -> String {
    format!("{}/v1beta", server.uri())
}

/// Start a server that answers Gemini requests for [`GEMINI_MODEL`] with
/// `status` and `body`, only when the test API key is sent.
pub async fn gemini_mock_server(status: u16, body: serde_json::Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/v1beta/models/{GEMINI_MODEL}:generateContent")))
        .and(header("x-goog-api-key", TEST_API_KEY))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(&server)
        .await;
    server
}

/// Start a server that answers chat completions with `status` and `body`.
pub async fn chat_mock_server(status: u16, body: serde_json::Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(&server)
        .await;
    server
}
