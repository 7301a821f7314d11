// envr-rs: Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Get command implementation for envr-rs.

use crate::cli::env::GetArgs;
use crate::config::Config;
use crate::error::Result;
use crate::remote::RemoteStore;
use crate::resolve::{ResolveRequest, Resolver};

/// Main handler for get command.
///
/// A missing key is reported on stderr, not treated as an error.
///
/// # Errors
///
/// Currently infallible; returns `Result` for dispatch uniformity.
pub async fn run_get_command<S: RemoteStore + Sync>(
    args: &GetArgs,
    config: &Config,
    store: &S,
) -> Result<()> {
    let site = config.site_ref();
    let local = config.local_sources();
    let resolver = Resolver::new(store, &site, &local);

    let request = ResolveRequest::builder()
        .context(args.target.context.clone())
        .scope(args.target.scope)
        .key(args.key.as_str())
        .build();
    let env = resolver.resolve_entries(&request).await;

    match env.get(&args.key) {
        Some(entry) => println!("{}", entry.value),
        None => eprintln!(
            "No value set in the {} {} for environment variable {}",
            args.target.context,
            args.target.context.kind(),
            args.key
        ),
    }
    Ok(())
}
