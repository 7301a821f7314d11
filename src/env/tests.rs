// envr-rs: Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the process environment module.

use super::container::ProcessEnv;
use super::current_env;
use std::collections::BTreeMap;

#[test]
fn test_env_basic_operations() {
    let mut env = ProcessEnv::new();
    env.set("FOO", "bar");

    assert_eq!(env.get("FOO"), Some("bar"));
    assert!(env.contains("FOO"));
    assert_eq!(env.get("NOTEXIST"), None);
    assert_eq!(env.len(), 1);
}

#[test]
#[cfg(not(windows))]
fn test_env_keys_are_case_sensitive() {
    let mut env = ProcessEnv::new();
    env.set("Foo", "upper");
    env.set("foo", "lower");

    assert_eq!(env.get("Foo"), Some("upper"));
    assert_eq!(env.get("foo"), Some("lower"));
    assert_eq!(env.len(), 2);
}

#[test]
#[cfg(windows)]
fn test_env_keys_are_case_insensitive() {
    let mut env = ProcessEnv::new();
    env.set("Path", "a");
    env.set("PATH", "b");

    assert_eq!(env.get("path"), Some("b"));
    assert_eq!(env.len(), 1);
}

#[test]
fn test_env_set_replaces() {
    let mut env = ProcessEnv::new();
    env.set("KEY", "initial").set("KEY", "replaced");
    assert_eq!(env.get("KEY"), Some("replaced"));
}

#[test]
fn test_env_resolved_marker() {
    let mut env = ProcessEnv::from_map(BTreeMap::from([("OLD".to_string(), "x".to_string())]));
    assert!(!env.is_resolved("OLD"));

    env.set_resolved("NEW", "y");
    assert_eq!(env.get("NEW"), Some("y"));
    assert!(env.is_resolved("NEW"));

    env.set("NEW", "z");
    assert!(!env.is_resolved("NEW"));
}

#[test]
fn test_env_from_map_round_trip() {
    let mut map = BTreeMap::new();
    map.insert("KEY1".to_string(), "value1".to_string());
    map.insert("KEY2".to_string(), "value2".to_string());

    let env = ProcessEnv::from_map(map.clone());

    assert_eq!(env.to_map(), map);
    let pairs: Vec<_> = env.iter().collect();
    assert_eq!(pairs, vec![("KEY1", "value1"), ("KEY2", "value2")]);
}

#[test]
fn test_current_env() {
    let env = current_env();
    assert!(
        env.get("PATH").is_some() || env.get("Path").is_some(),
        "PATH should exist in current environment"
    );
}
