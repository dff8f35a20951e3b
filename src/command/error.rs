//! Error types for the out command.

use std::path::PathBuf;

use thiserror::Error;

use crate::payload::PayloadError;
use crate::webhook::WebhookError;

/// Error type for out command execution.
///
/// Validation and file errors abort the invocation before any network
/// call; webhook errors surface only when no delivery outcome could be
/// produced. HTTP failures are never represented here.
#[derive(Debug, Error)]
pub enum OutError {
    /// The request carried none of the message inputs.
    #[error("At least one of 'text', 'card_file', or 'text_file' must be provided")]
    MissingMessageParams,

    /// A referenced file could not be read.
    #[error("Error reading file '{}': {source}", path.display())]
    FileRead {
        /// Path as given in the request parameters
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The card file did not hold a JSON array of objects.
    #[error("Error parsing JSON content from message file '{}': {source}", path.display())]
    CardParse {
        /// Path as given in the request parameters
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// A response payload value could not be constructed.
    #[error(transparent)]
    Payload(#[from] PayloadError),

    /// The webhook send failed before an outcome could be produced.
    #[error(transparent)]
    Webhook(#[from] WebhookError),
}

impl OutError {
    /// Returns true for errors caused by the request or its referenced
    /// files, as opposed to runtime failures.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(
            self,
            Self::MissingMessageParams | Self::FileRead { .. } | Self::CardParse { .. }
        )
    }
}
