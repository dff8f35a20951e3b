//! Chat webhook sender.

use http::header::{ACCEPT, HeaderValue};

use crate::env::{self, LayeredEnv};

use super::{HttpClient, HttpError, HttpRequest, HttpResponse, WebhookError, WebhookMessage};

/// Normalized result of one webhook send attempt.
///
/// Produced for every attempt that reached the point of sending, whether
/// the endpoint answered with success, an error status, or not at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryOutcome {
    /// Normalized status line, e.g. `"200 OK"` or `"Bad Request"`.
    pub status: String,
    /// Response body text (may be empty).
    pub body: String,
}

/// Trait for sending a message to a chat webhook endpoint.
///
/// Abstracts the chat backend so alternate flavors can be added without
/// touching the out handler, and enables testing with mocks.
pub trait OutgoingWebhook: Send + Sync {
    /// Sends the message to the given URL, resolving placeholders against
    /// the environment first.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError`] only when no delivery outcome could be
    /// produced at all (unserializable message, unparseable URL). HTTP
    /// error statuses and transport failures are reported through the
    /// returned [`DeliveryOutcome`] instead.
    fn send(
        &self,
        url: &str,
        message: &WebhookMessage,
        env: &LayeredEnv,
    ) -> impl std::future::Future<Output = Result<DeliveryOutcome, WebhookError>> + Send;
}

/// Sends messages to a Google Chat incoming webhook.
///
/// Placeholders are resolved structurally on the message value before
/// serialization, so environment values containing JSON metacharacters
/// cannot corrupt the outbound body.
#[derive(Debug, Clone)]
pub struct ChatWebhook<H> {
    client: H,
}

impl<H> ChatWebhook<H> {
    /// Creates a webhook sender over the given HTTP client.
    pub const fn new(client: H) -> Self {
        Self { client }
    }
}

impl<H: HttpClient> OutgoingWebhook for ChatWebhook<H> {
    async fn send(
        &self,
        url: &str,
        message: &WebhookMessage,
        env: &LayeredEnv,
    ) -> Result<DeliveryOutcome, WebhookError> {
        let resolved = env::resolve(&message.to_value(), env);
        let body = serde_json::to_string(&resolved).map_err(WebhookError::Serialize)?;

        let url = url::Url::parse(url).map_err(|e| WebhookError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        tracing::info!("Sending message '{body}' to webhook");

        let request = HttpRequest::post(url)
            .with_header(
                ACCEPT,
                HeaderValue::from_static("application/json; charset=UTF-8"),
            )
            .with_body(body.into_bytes());

        match self.client.request(request).await {
            Ok(response) => Ok(outcome_from_response(&response)),
            Err(error) => {
                tracing::warn!("Error sending request: {error}");
                Ok(outcome_from_transport(&error))
            }
        }
    }
}

/// Maps an HTTP response to a delivery outcome.
///
/// Success keeps the full status line (`"200 OK"`); error statuses report
/// the reason phrase alone (`"Bad Request"`).
fn outcome_from_response(response: &HttpResponse) -> DeliveryOutcome {
    let status = if response.is_success() {
        response.status.to_string()
    } else {
        response
            .status
            .canonical_reason()
            .map_or_else(|| response.status.as_str().to_string(), ToString::to_string)
    };

    DeliveryOutcome {
        status,
        body: response.body_text().unwrap_or_default().to_string(),
    }
}

/// Maps a transport-level failure to a synthetic delivery outcome so the
/// invocation still produces a response.
fn outcome_from_transport(error: &HttpError) -> DeliveryOutcome {
    let status = match error {
        HttpError::Connection(_) => "Connection error",
        HttpError::Timeout => "Request timed out",
        HttpError::InvalidRequest(_) => "Invalid request",
    };

    DeliveryOutcome {
        status: status.to_string(),
        body: error.to_string(),
    }
}
