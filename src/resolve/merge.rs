// envr-rs: Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Source precedence merging.
//!
//! ```text
//! low ------------------------------------------------------> high
//! general  account  [addons]  ui  [configFile]  internal
//!
//! [..] only for scopes any / builds / post_processing
//! ```
//!
//! A key found in several layers keeps every contributor in its
//! `sources`, winner first.

use tracing::debug;

use super::types::{EnvMap, ResolvedEntry};
use crate::scope::Scope;
use crate::source::Source;

/// Per-source maps, each already filtered for the requested scope.
#[derive(Debug, Clone, Default)]
pub struct SourceLayers {
    pub general: EnvMap,
    pub account: EnvMap,
    pub addons: EnvMap,
    pub ui: EnvMap,
    pub config_file: EnvMap,
    pub internal: EnvMap,
}

impl SourceLayers {
    /// Layers that take part for `scope`, lowest precedence first.
    fn ordered(&self, scope: Scope) -> Vec<(Source, &EnvMap)> {
        let build_sources = scope.includes_build_sources();
        let mut layers = vec![(Source::General, &self.general), (Source::Account, &self.account)];
        if build_sources {
            layers.push((Source::Addons, &self.addons));
        }
        layers.push((Source::Ui, &self.ui));
        if build_sources {
            layers.push((Source::ConfigFile, &self.config_file));
        }
        layers.push((Source::Internal, &self.internal));
        layers
    }
}

/// Merge every included layer for `scope` into one map.
#[must_use]
pub fn merge_sources(layers: &SourceLayers, scope: Scope) -> EnvMap {
    let mut merged = EnvMap::new();

    for (source, layer) in layers.ordered(scope) {
        debug!(source = %source, count = layer.len(), scope = %scope, "merging source");
        for (key, entry) in layer.iter() {
            let previous = merged.insert(key, entry.clone());
            if let Some(previous) = previous
                && let Some(current) = merged.get_mut(key)
            {
                demote_into(current, previous);
            }
        }
    }

    merged
}

/// Append the overridden entry's sources behind the new winner.
fn demote_into(winner: &mut ResolvedEntry, overridden: ResolvedEntry) {
    for source in overridden.sources {
        if !winner.sources.contains(&source) {
            winner.sources.push(source);
        }
    }
}
