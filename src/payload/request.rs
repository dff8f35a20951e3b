//! Incoming request envelope for the out step.

use serde::Deserialize;

use super::PayloadError;

/// Source configuration identifying the target webhook endpoint.
///
/// Construction fails if the URL is absent or blank, so a `Source` in hand
/// always carries a usable endpoint string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawSource")]
pub struct Source {
    url: String,
}

/// Unvalidated wire form of [`Source`].
#[derive(Debug, Deserialize)]
struct RawSource {
    url: String,
}

impl TryFrom<RawSource> for Source {
    type Error = PayloadError;

    fn try_from(raw: RawSource) -> Result<Self, Self::Error> {
        Self::new(raw.url)
    }
}

impl Source {
    /// Creates a source for the given webhook URL.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::EmptyUrl`] if the URL is empty or whitespace.
    pub fn new(url: impl Into<String>) -> Result<Self, PayloadError> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(PayloadError::EmptyUrl);
        }
        Ok(Self { url })
    }

    /// Returns the webhook endpoint URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Parameters controlling the message to send.
///
/// All three fields are independently optional; the out command requires at
/// least one of them at handling time. File paths are relative to the build
/// working directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Params {
    /// Inline message text.
    #[serde(default)]
    pub text: Option<String>,

    /// Path to a JSON file holding a pre-built card array.
    #[serde(default, rename = "card_file")]
    pub card_file: Option<String>,

    /// Path to a plain-text file with message content.
    #[serde(default, rename = "text_file")]
    pub text_file: Option<String>,
}

impl Params {
    /// Returns true if none of the message inputs is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.text.is_none() && self.card_file.is_none() && self.text_file.is_none()
    }
}

/// Request to the out step: a webhook source plus message parameters.
///
/// Deserialization fails if either section is missing or null.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutRequest {
    source: Source,
    params: Params,
}

impl OutRequest {
    /// Creates a request from a validated source and parameters.
    #[must_use]
    pub const fn new(source: Source, params: Params) -> Self {
        Self { source, params }
    }

    /// Returns the webhook source.
    #[must_use]
    pub const fn source(&self) -> &Source {
        &self.source
    }

    /// Returns the message parameters.
    #[must_use]
    pub const fn params(&self) -> &Params {
        &self.params
    }
}
