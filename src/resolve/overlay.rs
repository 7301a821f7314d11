// envr-rs: Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Local env file overlay.
//!
//! ```text
//! for file in files (in order):
//!   key absent          -> { value, sources: ["<file> file"] }
//!   key internal        -> untouched
//!   otherwise           -> value replaced, "<file> file" prepended
//! ```

use std::collections::BTreeMap;

use tracing::debug;

use super::types::{EnvMap, ResolvedEntry};
use crate::source::Source;

/// An already-parsed env file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DotEnvFile {
    /// Name shown to users, e.g. `.env`.
    pub file_name: String,
    pub entries: BTreeMap<String, String>,
}

impl DotEnvFile {
    #[must_use]
    pub fn new(file_name: impl Into<String>, entries: BTreeMap<String, String>) -> Self {
        Self {
            file_name: file_name.into(),
            entries,
        }
    }
}

/// Apply `files` on top of `env`, later files winning.
#[must_use]
pub fn overlay_env_files(mut env: EnvMap, files: &[DotEnvFile]) -> EnvMap {
    for file in files {
        let source = Source::file(&file.file_name);
        for (key, value) in &file.entries {
            let Some(existing) = env.get_mut(key) else {
                env.insert(key.clone(), ResolvedEntry::local(value.clone(), source.clone()));
                continue;
            };
            if existing.is_internal() {
                debug!(key = %key, file = %file.file_name, "internal variable not overridden by env file");
                continue;
            }
            let mut sources = Vec::with_capacity(existing.sources.len() + 1);
            sources.push(source.clone());
            sources.append(&mut existing.sources);
            *existing = ResolvedEntry {
                sources,
                ..ResolvedEntry::local(value.clone(), source.clone())
            };
        }
    }
    env
}
