// envr-rs: Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Export command implementation for envr-rs.

use crate::cli::env::ExportArgs;
use crate::cmd::list::format_plain;
use crate::config::Config;
use crate::error::Result;
use crate::remote::RemoteStore;
use crate::resolve::{ResolveRequest, Resolver};

/// Prints every remote variable for the context, site values winning.
///
/// # Errors
///
/// Currently infallible; returns `Result` for dispatch uniformity.
pub async fn run_export_command<S: RemoteStore + Sync>(
    args: &ExportArgs,
    config: &Config,
    store: &S,
) -> Result<()> {
    let site = config.site_ref();
    let local = config.local_sources();
    let resolver = Resolver::new(store, &site, &local);

    let request = ResolveRequest::builder()
        .context(args.context.clone())
        .raw(true)
        .build();
    let values = resolver.resolve(&request).await.into_values();

    for line in format_plain(values.iter().map(|(key, value)| (key.as_str(), value.as_str()))) {
        println!("{line}");
    }
    Ok(())
}
