//! The outbound webhook message body.

use serde::Serialize;
use serde_json::{Map, Value};

/// A string-keyed mapping of JSON values forming the exact body to POST.
///
/// Keys used by the out command are `text` (string) and `cardsV2` (array
/// of card objects). Insertion order is preserved through serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WebhookMessage(Map<String, Value>);

impl WebhookMessage {
    /// Creates an empty message.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Inserts a key/value entry, replacing any previous value for the key.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Returns the value for a key, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns true if the message holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the message as a JSON object value.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

impl From<Map<String, Value>> for WebhookMessage {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for WebhookMessage {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
