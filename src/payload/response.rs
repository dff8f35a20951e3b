//! Outgoing response envelope for the out step.

use serde::Serialize;
use serde_json::Value;

use super::{PayloadError, Version};

/// A named metadata item attached to an [`OutResponse`].
///
/// The value is an opaque JSON value; the out command emits string values
/// for the delivery status and body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metadata {
    name: String,
    value: Value,
}

impl Metadata {
    /// Creates a metadata item.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::EmptyMetadataName`] if the name is empty.
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Result<Self, PayloadError> {
        let name = name.into();
        if name.is_empty() {
            return Err(PayloadError::EmptyMetadataName);
        }
        Ok(Self {
            name,
            value: value.into(),
        })
    }

    /// Returns the item name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the item value.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }
}

/// Response from the out step: a generated version plus ordered metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutResponse {
    version: Version,
    metadata: Vec<Metadata>,
}

impl OutResponse {
    /// Creates a response with the given version and metadata items.
    #[must_use]
    pub const fn new(version: Version, metadata: Vec<Metadata>) -> Self {
        Self { version, metadata }
    }

    /// Returns the generated version.
    #[must_use]
    pub const fn version(&self) -> &Version {
        &self.version
    }

    /// Returns the metadata items in emission order.
    #[must_use]
    pub fn metadata(&self) -> &[Metadata] {
        &self.metadata
    }
}
