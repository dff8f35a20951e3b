//! Webhook layer for delivering messages to a chat endpoint.
//!
//! This module provides:
//! - HTTP request/response value types and client trait ([`HttpRequest`],
//!   [`HttpResponse`], [`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - The outbound message body ([`WebhookMessage`])
//! - The chat webhook sender behind a capability trait ([`OutgoingWebhook`],
//!   [`ChatWebhook`], [`DeliveryOutcome`])

mod chat;
mod client;
mod error;
mod http;
mod message;

#[cfg(test)]
mod chat_tests;

pub use chat::{ChatWebhook, DeliveryOutcome, OutgoingWebhook};
pub use client::ReqwestClient;
pub use error::{HttpError, WebhookError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use message::WebhookMessage;
