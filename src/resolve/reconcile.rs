// envr-rs: Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Reconciles resolved variables against the process environment.
//!
//! ```text
//!                    key in process?
//!                   /               \
//!                 no                 yes
//!                 |                   |
//!        winner = sources[0]    internal entry?
//!        write value            /            \
//!                             yes             no
//!                              |               |
//!                     winner = internal   winner = process
//!                     write value         leave process value
//! ```
//!
//! `general` and `internal` winners are written but not reported. Keys
//! already holding the resolved value are never rewritten; they are only
//! left out of the report when a previous pass wrote them.

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

use super::types::EnvMap;
use crate::env::container::ProcessEnv;
use crate::source::Source;

/// A source whose value for `key` lost to `winner`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IgnoredSource {
    pub key: String,
    pub source: Source,
    pub winner: Source,
}

/// Outcome of one reconciliation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileReport {
    /// Keys written to the process, grouped by winning source.
    pub injected: BTreeMap<Source, Vec<String>>,
    /// Every overridden source, per key.
    pub ignored: Vec<IgnoredSource>,
    /// Number of process variables actually changed.
    pub writes: usize,
}

impl ReconcileReport {
    /// One line per winning source, e.g. `Injected shared env vars: A, B`.
    #[must_use]
    pub fn summary_lines(&self) -> Vec<String> {
        self.injected
            .iter()
            .map(|(source, keys)| {
                format!(
                    "Injected {} env vars: {}",
                    source.display_name(),
                    keys.join(", ")
                )
            })
            .collect()
    }
}

/// Write the winning values of `env` into `process`.
///
/// A value is written when the key is missing from `process` or the entry
/// is internal. A process value equal to the resolved one is never
/// rewritten; it is still reported as overriding its sources unless an
/// earlier pass wrote it, so a second pass over the same inputs yields an
/// empty report.
pub fn reconcile(env: &EnvMap, process: &mut ProcessEnv) -> ReconcileReport {
    let mut report = ReconcileReport::default();
    let process_source = Source::Process;

    for (key, entry) in env.iter() {
        let Some((first, rest)) = entry.sources.split_first() else {
            debug!(key = %key, "skipping entry without sources");
            continue;
        };
        let internal = entry.is_internal();
        let current = process.get(key);
        let exists = current.is_some();
        let unchanged = current == Some(entry.value.as_str());
        let applied = unchanged && process.is_resolved(key);

        if !internal && !applied {
            let (winner, overridden) = if exists {
                (&process_source, entry.sources.as_slice())
            } else {
                (first, rest)
            };
            for source in overridden {
                debug!(
                    "Ignored {} env var: {key} (defined in {})",
                    source.display_name(),
                    winner.display_name()
                );
                report.ignored.push(IgnoredSource {
                    key: key.to_string(),
                    source: source.clone(),
                    winner: winner.clone(),
                });
            }
        }

        if unchanged || (exists && !internal) {
            continue;
        }

        if !first.is_quiet() && !internal {
            report
                .injected
                .entry(first.clone())
                .or_default()
                .push(key.to_string());
        }

        process.set_resolved(key, entry.value.as_str());
        report.writes += 1;
    }

    for line in report.summary_lines() {
        info!("{line}");
    }

    report
}
