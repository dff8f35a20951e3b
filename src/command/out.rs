//! The out command handler.

use std::path::Path;

use crate::env::LayeredEnv;
use crate::payload::{Metadata, OutRequest, OutResponse, Version};
use crate::time::{Clock, SystemClock};
use crate::webhook::OutgoingWebhook;

use super::{OutError, build_message};

/// Environment variable under which text-file content is published for
/// placeholder substitution.
pub const TEXT_FILE_CONTENT: &str = "TEXT_FILE_CONTENT";

/// Orchestrates one out invocation: validate the request, build the
/// message, deliver it, and assemble the response.
///
/// The handler owns the invocation's base environment; the text-file layer
/// is appended to a per-invocation clone, never to shared state.
#[derive(Debug)]
pub struct OutHandler<W, C = SystemClock> {
    webhook: W,
    clock: C,
    env: LayeredEnv,
}

impl<W> OutHandler<W, SystemClock> {
    /// Creates a handler over the given webhook, using the system clock
    /// and a snapshot of the process environment.
    #[must_use]
    pub fn new(webhook: W) -> Self {
        Self {
            webhook,
            clock: SystemClock,
            env: LayeredEnv::from_process_env(),
        }
    }
}

impl<W, C> OutHandler<W, C> {
    /// Replaces the clock, primarily for tests.
    #[must_use]
    pub fn with_clock<C2>(self, clock: C2) -> OutHandler<W, C2> {
        OutHandler {
            webhook: self.webhook,
            clock,
            env: self.env,
        }
    }

    /// Replaces the base environment, primarily for tests.
    #[must_use]
    pub fn with_env(mut self, env: LayeredEnv) -> Self {
        self.env = env;
        self
    }
}

impl<W: OutgoingWebhook, C: Clock> OutHandler<W, C> {
    /// Handles one request against the given working directory.
    ///
    /// # Errors
    ///
    /// Returns [`OutError`] when validation fails, a referenced file
    /// cannot be read or parsed, or the webhook send produced no outcome.
    /// A delivery attempt that reached the endpoint always yields a
    /// response, whatever the HTTP status.
    pub async fn handle(
        &self,
        request: &OutRequest,
        working_dir: &Path,
    ) -> Result<OutResponse, OutError> {
        let params = request.params();
        if params.is_empty() {
            return Err(OutError::MissingMessageParams);
        }

        let built = build_message(params, working_dir)?;

        let mut env = self.env.clone();
        if let Some(content) = built.text_file_content {
            env.push_entry(TEXT_FILE_CONTENT, content);
        }

        let outcome = self
            .webhook
            .send(request.source().url(), &built.message, &env)
            .await?;
        tracing::info!(status = %outcome.status, "Webhook delivery recorded");

        let metadata = vec![
            Metadata::new("status", outcome.status)?,
            Metadata::new("body", outcome.body)?,
        ];
        Ok(OutResponse::new(Version::now(&self.clock), metadata))
    }
}
