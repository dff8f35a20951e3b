//! Timestamp-derived build identifier.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::time::Clock;

use super::PayloadError;

/// Build number layout: UTC date, literal dot, 24h time with a nanosecond
/// fraction. Lexical order matches chronological order.
const BUILD_NUMBER_FORMAT: &str = "%Y-%m-%d.%H%M%S%f";

/// A resource version identified by a single build number string.
///
/// Generated fresh per invocation from the current UTC instant; never
/// derived from persisted state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    build_number: String,
}

impl Version {
    /// Creates a version from an existing build number.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::EmptyBuildNumber`] if the string is empty.
    pub fn new(build_number: impl Into<String>) -> Result<Self, PayloadError> {
        let build_number = build_number.into();
        if build_number.is_empty() {
            return Err(PayloadError::EmptyBuildNumber);
        }
        Ok(Self { build_number })
    }

    /// Generates a version from the clock's current instant.
    pub fn now(clock: &impl Clock) -> Self {
        let instant: DateTime<Utc> = clock.now().into();
        Self {
            build_number: instant.format(BUILD_NUMBER_FORMAT).to_string(),
        }
    }

    /// Returns the build number string.
    #[must_use]
    pub fn build_number(&self) -> &str {
        &self.build_number
    }
}
