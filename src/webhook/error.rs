//! Error types for webhook delivery.

use thiserror::Error;

/// Error type for HTTP transport operations.
///
/// Describes what went wrong below the HTTP status level. The chat sender
/// maps these to synthetic delivery outcomes rather than failing the
/// invocation.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The server did not respond within the configured timeout period.
    #[error("Request timed out")]
    Timeout,

    /// The request could not be built from its parts.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Fatal error from a webhook send attempt.
///
/// HTTP and transport failures are reported as [`DeliveryOutcome`] metadata
/// instead; only failures that prevent producing an outcome at all belong
/// here.
///
/// [`DeliveryOutcome`]: super::DeliveryOutcome
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The message could not be serialized to JSON.
    ///
    /// The message value set is closed (strings, numbers, booleans, nested
    /// maps and sequences), so this indicates an internal invariant
    /// violation.
    #[error("Error formatting message for sending: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The webhook URL could not be parsed.
    #[error("Invalid webhook URL '{url}': {reason}")]
    InvalidUrl {
        /// The offending URL string
        url: String,
        /// Reason for invalidity
        reason: String,
    },
}
