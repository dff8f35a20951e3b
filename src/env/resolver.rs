//! Recursive `${NAME}` placeholder substitution over JSON values.

use std::sync::OnceLock;

use regex::{Captures, Regex};
use serde_json::Value;

use super::LayeredEnv;

fn token_regex() -> &'static Regex {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    // Braces cannot nest; a token is everything up to the closing brace.
    TOKEN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid token pattern"))
}

/// Replaces every `${NAME}` token in string scalars with the corresponding
/// environment value, recursing into objects and arrays.
///
/// Returns a new value; the input and the environment are never mutated.
/// Substitution is purely textual: a string stays a string even when it
/// consists of a single token, and non-string scalars pass through
/// untouched. Undefined variables substitute the empty string, matching
/// the lenient resolution the resource has always shipped with. Token-free
/// input comes back identical, so resolution is idempotent.
#[must_use]
pub fn resolve(value: &Value, env: &LayeredEnv) -> Value {
    match value {
        Value::String(s) => Value::String(resolve_str(s, env)),
        Value::Array(items) => Value::Array(items.iter().map(|v| resolve(v, env)).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, v)| (key.clone(), resolve(v, env)))
                .collect(),
        ),
        other => other.clone(),
    }
}

fn resolve_str(s: &str, env: &LayeredEnv) -> String {
    token_regex()
        .replace_all(s, |caps: &Captures<'_>| {
            env.get(&caps[1]).unwrap_or_default().to_string()
        })
        .into_owned()
}
