//! Error types for payload construction.

use thiserror::Error;

/// Error type for payload value construction.
///
/// These indicate malformed input to a constructor, not runtime failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    /// The webhook URL was absent or blank.
    #[error("Webhook URL must not be empty")]
    EmptyUrl,

    /// A version was constructed from an empty build number.
    #[error("Build number must not be empty")]
    EmptyBuildNumber,

    /// A metadata item was constructed with an empty name.
    #[error("Metadata name must not be empty")]
    EmptyMetadataName,
}
