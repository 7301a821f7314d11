// envr-rs: Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! List command implementation for envr-rs.
//!
//! Every output format lists keys in the same case-insensitive order.

use serde::{Serialize, Serializer};

use crate::cli::env::ListArgs;
use crate::config::Config;
use crate::error::Result;
use crate::remote::RemoteStore;
use crate::resolve::{EnvMap, ResolveRequest, Resolver};
use crate::scope::human_readable_scopes;

/// Main handler for list command.
///
/// # Errors
///
/// Returns an error if the JSON output cannot be serialized.
pub async fn run_list_command<S: RemoteStore + Sync>(
    args: &ListArgs,
    config: &Config,
    store: &S,
) -> Result<()> {
    let site = config.site_ref();
    let local = config.local_sources();
    let resolver = Resolver::new(store, &site, &local);

    let request = ResolveRequest::builder()
        .context(args.target.context.clone())
        .scope(args.target.scope)
        .build();
    let env = visible_entries(resolver.resolve_entries(&request).await);

    if args.json {
        println!("{}", format_json(&env)?);
        return Ok(());
    }

    if env.is_empty() {
        println!(
            "No environment variables set for {} {}",
            args.target.context.kind(),
            args.target.context
        );
        return Ok(());
    }

    let lines = if args.plain {
        format_plain(env.iter().map(|(key, entry)| (key, entry.value.as_str())))
    } else {
        format_table(&env)
    };
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

/// Drops entries won by sources users did not set themselves.
#[must_use]
pub fn visible_entries(mut env: EnvMap) -> EnvMap {
    env.retain(|_, entry| entry.winner().is_some_and(|source| !source.is_quiet()));
    env
}

/// `KEY=VALUE` lines, in the order given.
#[must_use]
pub fn format_plain<'a>(values: impl IntoIterator<Item = (&'a str, &'a str)>) -> Vec<String> {
    values
        .into_iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect()
}

/// Pretty JSON object of `key: value` pairs.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn format_json(env: &EnvMap) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Values(env))
}

struct Values<'a>(&'a EnvMap);

impl Serialize for Values<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(key, entry)| (key, &entry.value)))
    }
}

/// Aligned `KEY  VALUE  SCOPE  SOURCE` rows with a header.
#[must_use]
pub fn format_table(env: &EnvMap) -> Vec<String> {
    let mut rows = vec![[
        "KEY".to_string(),
        "VALUE".to_string(),
        "SCOPE".to_string(),
        "SOURCE".to_string(),
    ]];
    for (key, entry) in env.iter() {
        rows.push([
            key.to_string(),
            entry.value.clone(),
            human_readable_scopes(entry.scopes.as_deref()),
            entry
                .winner()
                .map_or_else(String::new, |source| source.display_name().to_string()),
        ]);
    }

    let mut widths = [0_usize; 3];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    rows.iter()
        .map(|[key, value, scope, source]| {
            format!(
                "{key:<w0$}  {value:<w1$}  {scope:<w2$}  {source}",
                w0 = widths[0],
                w1 = widths[1],
                w2 = widths[2],
            )
        })
        .collect()
}
