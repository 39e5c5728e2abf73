//! Tests for the vision caption client against a mock server.

use serde_json::json;
use verdant_core::DEFAULT_CAPTION;
use verdant_error::CaptionErrorKind;
use verdant_interface::CaptionModel;
use verdant_models::OpenAiVisionClient;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> OpenAiVisionClient {
    OpenAiVisionClient::new(Some("sk-test".to_string())).with_base_url(server.uri())
}

fn completion(content: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    }))
}

#[tokio::test]
async fn test_caption_is_returned_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-4o",
            "max_tokens": 150,
            "messages": [{
                "role": "user",
                "content": [
                    { "type": "text" },
                    { "type": "image_url", "image_url": { "url": "https://img/small.jpg" } }
                ]
            }]
        })))
        .respond_with(completion(json!("Golden hour over the ridge.")))
        .expect(1)
        .mount(&server)
        .await;

    let caption = client_for(&server)
        .generate_caption("https://img/small.jpg")
        .await
        .expect("Caption");

    assert_eq!(caption.as_str(), "Golden hour over the ridge.");
}

#[tokio::test]
async fn test_empty_completion_uses_default_caption() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(completion(json!("")))
        .mount(&server)
        .await;

    let caption = client_for(&server)
        .generate_caption("https://img/small.jpg")
        .await
        .expect("Caption");

    assert_eq!(caption.as_str(), DEFAULT_CAPTION);
}

#[tokio::test]
async fn test_custom_model_and_default_caption_are_used() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({ "model": "gpt-4o-mini", "max_tokens": 60 })))
        .respond_with(completion(serde_json::Value::Null))
        .expect(1)
        .mount(&server)
        .await;

    let caption = client_for(&server)
        .with_model("gpt-4o-mini")
        .with_max_tokens(60)
        .with_default_caption("Wild places")
        .generate_caption("https://img/small.jpg")
        .await
        .expect("Caption");

    assert_eq!(caption.as_str(), "Wild places");
}

#[tokio::test]
async fn test_api_failure_propagates_instead_of_default() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream overloaded"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate_caption("https://img/small.jpg")
        .await
        .expect_err("Server error");

    assert_eq!(
        err.kind,
        CaptionErrorKind::Status {
            status: 500,
            message: "upstream overloaded".to_string()
        }
    );
}

#[tokio::test]
async fn test_no_choices_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate_caption("https://img/small.jpg")
        .await
        .expect_err("No choices");

    assert_eq!(err.kind, CaptionErrorKind::NoChoices);
}

#[tokio::test]
async fn test_malformed_body_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate_caption("https://img/small.jpg")
        .await
        .expect_err("Not JSON");

    assert!(matches!(err.kind, CaptionErrorKind::Parse(_)));
}

#[tokio::test]
async fn test_missing_key_is_reported_by_the_call() {
    let err = OpenAiVisionClient::new(None)
        .generate_caption("https://img/small.jpg")
        .await
        .expect_err("No key");

    assert!(matches!(err.kind, CaptionErrorKind::MissingCredentials(_)));
}
