// envr-rs: Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types shared by the resolution pipeline.
//!
//! ```text
//! VariableRecord { key, scopes?, values: [ValueVariant] }   (remote)
//! ResolvedEntry  { value, context, branch?, scopes?, sources }
//! EnvMap         BTreeMap<VarKey, ResolvedEntry>
//! VarKey         ordered case-insensitively, compared case-sensitively
//! ```

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

use crate::scope::Scope;
use crate::source::Source;

/// One context-scoped value of a remote variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueVariant {
    /// A canonical context or `all`.
    pub context: String,
    /// Branch name for branch-specific values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_parameter: Option<String>,
    #[serde(default)]
    pub value: String,
}

impl ValueVariant {
    /// A value that applies to every context.
    #[must_use]
    pub fn all(value: impl Into<String>) -> Self {
        Self {
            context: "all".to_string(),
            context_parameter: None,
            value: value.into(),
        }
    }

    /// A value for one context.
    #[must_use]
    pub fn for_context(context: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            context_parameter: None,
            value: value.into(),
        }
    }

    /// A value for one branch.
    #[must_use]
    pub fn for_branch(branch: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            context: "branch".to_string(),
            context_parameter: Some(branch.into()),
            value: value.into(),
        }
    }
}

/// A variable as returned by the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableRecord {
    pub key: String,
    /// `None` when the store omitted scopes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<Scope>>,
    #[serde(default)]
    pub values: Vec<ValueVariant>,
}

/// The effective value of one key plus its provenance.
///
/// `sources` is winner-first: index 0 is in effect, the rest were overridden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedEntry {
    pub value: String,
    pub context: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<Scope>>,
    pub sources: Vec<Source>,
}

impl ResolvedEntry {
    /// An entry that did not come from the remote store.
    #[must_use]
    pub fn local(value: impl Into<String>, source: Source) -> Self {
        Self {
            value: value.into(),
            context: "all".to_string(),
            branch: None,
            scopes: None,
            sources: vec![source],
        }
    }

    /// The source currently in effect.
    #[must_use]
    pub fn winner(&self) -> Option<&Source> {
        self.sources.first()
    }

    /// Whether the internal source contributed this entry.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        self.sources.contains(&Source::Internal)
    }
}

/// Variable name ordered case-insensitively for stable listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct VarKey(String);

impl VarKey {
    pub(super) fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub(super) fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialOrd for VarKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VarKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0
            .to_ascii_lowercase()
            .cmp(&other.0.to_ascii_lowercase())
            .then_with(|| self.0.cmp(&other.0))
    }
}

/// Resolved variables keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvMap {
    vars: BTreeMap<VarKey, ResolvedEntry>,
}

impl EnvMap {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    /// Inserts an entry, returning the one it replaced.
    pub fn insert(&mut self, key: impl Into<String>, entry: ResolvedEntry) -> Option<ResolvedEntry> {
        self.vars.insert(VarKey::new(key), entry)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ResolvedEntry> {
        self.vars.get(&VarKey::new(key))
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut ResolvedEntry> {
        self.vars.get_mut(&VarKey::new(key))
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.vars.contains_key(&VarKey::new(key))
    }

    /// Keeps only the entries for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&str, &ResolvedEntry) -> bool) {
        self.vars.retain(|key, entry| keep(key.as_str(), entry));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolvedEntry)> {
        self.vars.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(VarKey::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Flattens to `key -> value`.
    #[must_use]
    pub fn to_values(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(key, entry)| (key.to_string(), entry.value.clone()))
            .collect()
    }
}

impl<K: Into<String>> FromIterator<(K, ResolvedEntry)> for EnvMap {
    fn from_iter<I: IntoIterator<Item = (K, ResolvedEntry)>>(iter: I) -> Self {
        let mut env = Self::new();
        for (key, entry) in iter {
            env.insert(key, entry);
        }
        env
    }
}

impl IntoIterator for EnvMap {
    type Item = (String, ResolvedEntry);
    type IntoIter = std::vec::IntoIter<(String, ResolvedEntry)>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars
            .into_iter()
            .map(|(key, entry)| (key.0, entry))
            .collect::<Vec<_>>()
            .into_iter()
    }
}

impl Serialize for EnvMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.vars.len()))?;
        for (key, entry) in self.iter() {
            map.serialize_entry(key, entry)?;
        }
        map.end()
    }
}
