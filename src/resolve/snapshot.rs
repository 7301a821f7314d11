// envr-rs: Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Turns remote records into resolved entries for one source.
//!
//! ```text
//! [VariableRecord] --select_value--> drop unmatched
//!                  --scope_matches--> drop out-of-scope
//!                  --> EnvMap { key: { value, context, branch, scopes, [source] } }
//! ```

use std::collections::BTreeMap;

use super::select::select_value;
use super::types::{EnvMap, ResolvedEntry, VariableRecord};
use crate::scope::{Scope, scope_matches};
use crate::source::Source;

/// Format one source's records for `context` and `scope`.
#[must_use]
pub fn format_snapshot(
    records: &[VariableRecord],
    context: &str,
    scope: Scope,
    source: &Source,
) -> EnvMap {
    records
        .iter()
        .filter_map(|record| {
            let variant = select_value(&record.values, context)?;
            if !scope_matches(record.scopes.as_deref(), scope) {
                return None;
            }
            Some((
                record.key.clone(),
                ResolvedEntry {
                    value: variant.value.clone(),
                    context: variant.context.clone(),
                    branch: variant.context_parameter.clone(),
                    scopes: record.scopes.clone(),
                    sources: vec![source.clone()],
                },
            ))
        })
        .collect()
}

/// Flat `key -> value` view of account and site records, site winning.
///
/// No scope filtering: raw output is meant for full exports.
#[must_use]
pub fn raw_snapshot(
    account: &[VariableRecord],
    site: &[VariableRecord],
    context: &str,
) -> BTreeMap<String, String> {
    let mut raw = BTreeMap::new();
    for record in account.iter().chain(site) {
        if let Some(variant) = select_value(&record.values, context) {
            raw.insert(record.key.clone(), variant.value.clone());
        }
    }
    raw
}
