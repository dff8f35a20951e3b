//! Layered environment and placeholder resolution.
//!
//! Message content may embed `${NAME}` tokens that are substituted with
//! environment values before delivery. This module provides:
//! - [`LayeredEnv`]: an explicit, per-invocation key/value environment
//!   (a snapshot of the process environment plus any injected layers)
//! - [`resolve`]: a pure recursive transform replacing tokens inside a
//!   JSON value tree
//!
//! Process-global state is never mutated; per-invocation additions (such
//! as published text-file content) are appended as layers on a clone.

mod resolver;

#[cfg(test)]
mod mod_tests;

pub use resolver::resolve;

use std::collections::HashMap;

/// An ordered stack of key/value layers, later layers overriding earlier.
#[derive(Debug, Clone, Default)]
pub struct LayeredEnv {
    layers: Vec<HashMap<String, String>>,
}

impl LayeredEnv {
    /// Creates an empty environment with no layers.
    #[must_use]
    pub const fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Creates an environment whose base layer snapshots the process
    /// environment at the time of the call.
    #[must_use]
    pub fn from_process_env() -> Self {
        Self {
            layers: vec![std::env::vars().collect()],
        }
    }

    /// Appends a layer, overriding any earlier layers for its keys.
    pub fn push_layer(&mut self, layer: HashMap<String, String>) {
        self.layers.push(layer);
    }

    /// Appends a single-entry layer.
    pub fn push_entry(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.push_layer(HashMap::from([(key.into(), value.into())]));
    }

    /// Builder-style variant of [`push_layer`](Self::push_layer).
    #[must_use]
    pub fn with_layer(mut self, layer: HashMap<String, String>) -> Self {
        self.push_layer(layer);
        self
    }

    /// Looks up a key, searching layers from last to first.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.layers
            .iter()
            .rev()
            .find_map(|layer| layer.get(key).map(String::as_str))
    }
}
