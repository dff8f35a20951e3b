//! Tests for the chat webhook sender.

use super::chat::{ChatWebhook, DeliveryOutcome, OutgoingWebhook};
use super::{HttpClient, HttpError, HttpRequest, HttpResponse, WebhookError, WebhookMessage};
use crate::env::LayeredEnv;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock HTTP client returning a fixed result and capturing the request.
struct MockClient {
    result: Mutex<Option<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockClient {
    fn new(result: Result<HttpResponse, HttpError>) -> Self {
        Self {
            result: Mutex::new(Some(result)),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn responding(status: http::StatusCode, body: &str) -> Self {
        Self::new(Ok(HttpResponse::new(
            status,
            http::HeaderMap::new(),
            body.as_bytes().to_vec(),
        )))
    }

    fn captured_request(&self) -> HttpRequest {
        self.requests.lock().unwrap()[0].clone()
    }
}

impl HttpClient for &MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.lock().unwrap().push(req);
        self.result.lock().unwrap().take().unwrap()
    }
}

fn env_with(pairs: &[(&str, &str)]) -> LayeredEnv {
    LayeredEnv::new().with_layer(
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect::<HashMap<_, _>>(),
    )
}

fn message_with_text(text: &str) -> WebhookMessage {
    let mut message = WebhookMessage::new();
    message.put("text", text);
    message
}

fn sent_body(client: &MockClient) -> Value {
    let body = client.captured_request().body.unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn send_posts_serialized_message() {
    let client = MockClient::responding(http::StatusCode::OK, "success");
    let webhook = ChatWebhook::new(&client);

    let outcome = webhook
        .send(
            "https://chat.example.com/",
            &message_with_text("hello"),
            &LayeredEnv::new(),
        )
        .await
        .unwrap();

    assert_eq!(
        outcome,
        DeliveryOutcome {
            status: "200 OK".to_string(),
            body: "success".to_string(),
        }
    );

    let request = client.captured_request();
    assert_eq!(request.method, http::Method::POST);
    assert_eq!(request.url.as_str(), "https://chat.example.com/");
    assert_eq!(
        request.headers.get(http::header::ACCEPT).unwrap(),
        "application/json; charset=UTF-8"
    );
    assert_eq!(sent_body(&client), json!({ "text": "hello" }));
}

#[tokio::test]
async fn send_resolves_placeholders_before_posting() {
    let client = MockClient::responding(http::StatusCode::OK, "");
    let webhook = ChatWebhook::new(&client);
    let env = env_with(&[("ENV_KEY_1", "value1"), ("ENV_KEY_2", "value2")]);

    let mut message = WebhookMessage::new();
    message.put("key1", "${ENV_KEY_1}");
    message.put("key2", "${ENV_KEY_2}");

    webhook
        .send("https://chat.example.com/", &message, &env)
        .await
        .unwrap();

    assert_eq!(
        sent_body(&client),
        json!({ "key1": "value1", "key2": "value2" })
    );
}

#[tokio::test]
async fn send_preserves_quotes_in_resolved_values() {
    let client = MockClient::responding(http::StatusCode::OK, "");
    let webhook = ChatWebhook::new(&client);
    let env = env_with(&[("ENV_KEY_QUOTED", r#"env with "quotes""#)]);

    let mut message = WebhookMessage::new();
    message.put("key1", r#"value with "quotes""#);
    message.put("key2", "${ENV_KEY_QUOTED}");

    webhook
        .send("https://chat.example.com/", &message, &env)
        .await
        .unwrap();

    // The posted body is valid JSON and both fields carry their quotes.
    let body = sent_body(&client);
    assert_eq!(body["key1"].as_str(), Some(r#"value with "quotes""#));
    assert_eq!(body["key2"].as_str(), Some(r#"env with "quotes""#));
}

#[tokio::test]
async fn http_error_status_maps_to_reason_phrase_outcome() {
    let client = MockClient::responding(http::StatusCode::BAD_REQUEST, "");
    let webhook = ChatWebhook::new(&client);

    let outcome = webhook
        .send(
            "https://chat.example.com/",
            &message_with_text("hello"),
            &LayeredEnv::new(),
        )
        .await
        .unwrap();

    assert_eq!(
        outcome,
        DeliveryOutcome {
            status: "Bad Request".to_string(),
            body: String::new(),
        }
    );
}

#[tokio::test]
async fn server_error_status_maps_to_reason_phrase_outcome() {
    let client = MockClient::responding(http::StatusCode::INTERNAL_SERVER_ERROR, "boom");
    let webhook = ChatWebhook::new(&client);

    let outcome = webhook
        .send(
            "https://chat.example.com/",
            &message_with_text("hello"),
            &LayeredEnv::new(),
        )
        .await
        .unwrap();

    assert_eq!(outcome.status, "Internal Server Error");
    assert_eq!(outcome.body, "boom");
}

#[tokio::test]
async fn timeout_maps_to_synthetic_outcome() {
    let client = MockClient::new(Err(HttpError::Timeout));
    let webhook = ChatWebhook::new(&client);

    let outcome = webhook
        .send(
            "https://chat.example.com/",
            &message_with_text("hello"),
            &LayeredEnv::new(),
        )
        .await
        .unwrap();

    assert_eq!(outcome.status, "Request timed out");
}

#[tokio::test]
async fn connection_error_maps_to_synthetic_outcome() {
    let client = MockClient::new(Err(HttpError::Connection("refused".into())));
    let webhook = ChatWebhook::new(&client);

    let outcome = webhook
        .send(
            "https://chat.example.com/",
            &message_with_text("hello"),
            &LayeredEnv::new(),
        )
        .await
        .unwrap();

    assert_eq!(outcome.status, "Connection error");
    assert!(outcome.body.contains("refused"));
}

#[tokio::test]
async fn invalid_url_is_fatal() {
    let client = MockClient::responding(http::StatusCode::OK, "");
    let webhook = ChatWebhook::new(&client);

    let error = webhook
        .send("not a url", &message_with_text("hello"), &LayeredEnv::new())
        .await
        .unwrap_err();

    assert!(matches!(error, WebhookError::InvalidUrl { .. }));
    assert!(client.requests.lock().unwrap().is_empty());
}
