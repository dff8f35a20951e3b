//! Tests for the layered environment.

use super::LayeredEnv;
use std::collections::HashMap;

#[test]
fn empty_env_resolves_nothing() {
    let env = LayeredEnv::new();
    assert_eq!(env.get("ANY"), None);
}

#[test]
fn single_layer_lookup_succeeds() {
    let env = LayeredEnv::new().with_layer(HashMap::from([("KEY".to_string(), "value".to_string())]));

    assert_eq!(env.get("KEY"), Some("value"));
    assert_eq!(env.get("OTHER"), None);
}

#[test]
fn later_layers_override_earlier() {
    let mut env =
        LayeredEnv::new().with_layer(HashMap::from([("KEY".to_string(), "first".to_string())]));
    env.push_entry("KEY", "second");

    assert_eq!(env.get("KEY"), Some("second"));
}

#[test]
fn earlier_layers_remain_visible_for_other_keys() {
    let mut env = LayeredEnv::new().with_layer(HashMap::from([
        ("A".to_string(), "1".to_string()),
        ("B".to_string(), "2".to_string()),
    ]));
    env.push_entry("A", "override");

    assert_eq!(env.get("A"), Some("override"));
    assert_eq!(env.get("B"), Some("2"));
}

#[test]
fn from_process_env_snapshots_current_vars() {
    // PATH is present on every supported platform.
    let env = LayeredEnv::from_process_env();
    assert!(env.get("PATH").is_some());
}

#[test]
fn cloned_env_is_independent() {
    let base = LayeredEnv::new().with_layer(HashMap::from([("KEY".to_string(), "base".to_string())]));

    let mut derived = base.clone();
    derived.push_entry("KEY", "derived");

    assert_eq!(base.get("KEY"), Some("base"));
    assert_eq!(derived.get("KEY"), Some("derived"));
}
