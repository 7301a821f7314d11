// envr-rs: Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process environment container.
//!
//! ```text
//! ProcessEnv
//!   get / contains     presence is the only test the reconciler uses
//!   set                unconditional assignment, last value wins
//!   set_resolved       assignment made by the reconciler, remembered
//!   iter / to_map      handed to child processes
//! ```
//!
//! The engine only appends to this map; there is no removal.

use super::types::ProcessKey;
use std::collections::{BTreeMap, BTreeSet};

/// A set of process environment variables.
#[derive(Debug, Clone, Default)]
pub struct ProcessEnv {
    vars: BTreeMap<ProcessKey, String>,
    /// Keys whose current value was written by the reconciler.
    resolved: BTreeSet<ProcessKey>,
}

impl ProcessEnv {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
            resolved: BTreeSet::new(),
        }
    }

    /// Creates an environment from a map of variables.
    #[must_use]
    pub fn from_map(vars: BTreeMap<String, String>) -> Self {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (ProcessKey::new(k), v))
                .collect(),
            resolved: BTreeSet::new(),
        }
    }

    /// Sets an environment variable, replacing any existing value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let key = ProcessKey::new(key);
        self.resolved.remove(&key);
        self.vars.insert(key, value.into());
        self
    }

    /// Sets a variable on behalf of the reconciler and remembers that it did.
    pub fn set_resolved(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let key = ProcessKey::new(key);
        self.vars.insert(key.clone(), value.into());
        self.resolved.insert(key);
        self
    }

    /// Whether the current value of `key` came from [`Self::set_resolved`].
    #[must_use]
    pub fn is_resolved(&self, key: &str) -> bool {
        self.resolved.contains(&ProcessKey::new(key))
    }

    /// Gets an environment variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(&ProcessKey::new(key)).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(&ProcessKey::new(key))
    }

    /// Returns all environment variables as a map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    }

    /// Returns an iterator over environment variables.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }
}
