//! Tests for the Unsplash client against a mock server.

use serde_json::json;
use verdant_core::SearchQuery;
use verdant_error::ProviderErrorKind;
use verdant_interface::PhotoProvider;
use verdant_photos::UnsplashClient;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> UnsplashClient {
    UnsplashClient::new(Some("test-key".to_string())).with_base_url(server.uri())
}

#[tokio::test]
async fn test_fetch_random_photo_extracts_urls() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/photos/random"))
        .and(query_param("query", "golden hour"))
        .and(header("Authorization", "Client-ID test-key"))
        .and(header("Accept-Version", "v1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "abc123",
            "urls": {
                "raw": "https://images.example/raw.jpg",
                "small": "https://images.example/small.jpg"
            },
            "user": { "name": "Dorothea" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let photo = client_for(&server)
        .fetch_random_photo(&SearchQuery::from("golden hour"))
        .await
        .expect("Photo");

    assert_eq!(photo.id(), "abc123");
    assert_eq!(photo.full_url(), "https://images.example/raw.jpg");
    assert_eq!(photo.preview_url(), "https://images.example/small.jpg");
    assert_eq!(photo.photographer_name().as_deref(), Some("Dorothea"));
}

#[tokio::test]
async fn test_photographer_is_optional() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/photos/random"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "abc123",
            "urls": { "raw": "https://r", "small": "https://s" }
        })))
        .mount(&server)
        .await;

    let photo = client_for(&server)
        .fetch_random_photo(&SearchQuery::from("tundra"))
        .await
        .expect("Photo");

    assert!(photo.photographer_name().is_none());
}

#[tokio::test]
async fn test_empty_raw_url_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/photos/random"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "abc123",
            "urls": { "raw": "", "small": "https://s" }
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_random_photo(&SearchQuery::from("tundra"))
        .await
        .expect_err("Empty URL");

    assert_eq!(err.kind, ProviderErrorKind::MissingField("urls.raw"));
}

#[tokio::test]
async fn test_missing_urls_object_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/photos/random"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "abc123" })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_random_photo(&SearchQuery::from("tundra"))
        .await
        .expect_err("No URLs");

    assert_eq!(err.kind, ProviderErrorKind::MissingField("urls.raw"));
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/photos/random"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Rate Limit Exceeded"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_random_photo(&SearchQuery::from("tundra"))
        .await
        .expect_err("Forbidden");

    assert_eq!(
        err.kind,
        ProviderErrorKind::Status {
            status: 403,
            message: "Rate Limit Exceeded".to_string()
        }
    );
}

#[tokio::test]
async fn test_malformed_body_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/photos/random"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_random_photo(&SearchQuery::from("tundra"))
        .await
        .expect_err("Not JSON");

    assert!(matches!(err.kind, ProviderErrorKind::Parse(_)));
}

#[tokio::test]
async fn test_missing_key_fails_without_a_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = UnsplashClient::new(None)
        .with_base_url(server.uri())
        .fetch_random_photo(&SearchQuery::from("tundra"))
        .await
        .expect_err("No key");

    assert!(matches!(err.kind, ProviderErrorKind::MissingCredentials(_)));
}
