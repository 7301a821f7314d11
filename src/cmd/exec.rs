// envr-rs: Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Exec command implementation for envr-rs.
//!
//! ```text
//! resolve_for_dev(context, scope, env files)
//!        |
//!        v
//! reconcile(resolved, current_env()) --> summary on stderr
//!        |
//!        v
//! which_in(PROGRAM, reconciled PATH)
//!        |
//!        v
//! spawn with env_clear() + reconciled env, wait, forward exit code
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use tokio::process::Command;
use tracing::{debug, info};

use crate::cli::env::ExecArgs;
use crate::config::Config;
use crate::dotenv::load_env_files;
use crate::env::container::ProcessEnv;
use crate::env::current_env;
use crate::error::{ProcessError, Result, bail_out};
use crate::remote::RemoteStore;
use crate::resolve::{ReconcileReport, ResolveRequest, Resolver, reconcile};

/// Main handler for exec command.
///
/// # Errors
///
/// Returns an error if an explicit env file is missing or invalid, the
/// program cannot be found, or it fails to start.
pub async fn run_exec_command<S: RemoteStore + Sync>(
    args: &ExecArgs,
    config: &Config,
    store: &S,
) -> Result<ExitCode> {
    let Some((program, program_args)) = args.command.split_first() else {
        return Err(bail_out("no program given").into());
    };

    let mut process = current_env();
    let report = prepare_env(args, config, store, &mut process).await?;
    for line in report.summary_lines() {
        eprintln!("{line}");
    }

    let cwd = std::env::current_dir()?;
    let path = which::which_in(program, process.get("PATH"), &cwd).map_err(|_| {
        ProcessError::ExecutableNotFound {
            name: program.clone(),
        }
    })?;

    info!(program = %path.display(), args = ?program_args, "running");
    let status = Command::new(&path)
        .args(program_args)
        .env_clear()
        .envs(process.iter())
        .kill_on_drop(true)
        .status()
        .await
        .map_err(|source| ProcessError::SpawnFailed {
            command: path.display().to_string(),
            source,
        })?;

    debug!(status = %status, "program exited");
    Ok(status
        .code()
        .and_then(|code| u8::try_from(code).ok())
        .map_or(ExitCode::FAILURE, ExitCode::from))
}

/// Resolve variables for development and reconcile them into `process`.
///
/// # Errors
///
/// Returns an error if an explicit env file is missing or invalid.
pub async fn prepare_env<S: RemoteStore + Sync>(
    args: &ExecArgs,
    config: &Config,
    store: &S,
    process: &mut ProcessEnv,
) -> Result<ReconcileReport> {
    let env_files = env_file_list(args, config);
    let files = load_env_files(&config.site.root, &env_files)?;

    let site = config.site_ref();
    let local = config.local_sources();
    let resolver = Resolver::new(store, &site, &local);

    let request = ResolveRequest::builder()
        .context(args.target.context.clone())
        .scope(args.target.scope)
        .build();
    let env = resolver.resolve_for_dev(&request, &files).await;

    Ok(reconcile(&env, process))
}

/// `--env-file` values when given, `[dev] env_files` otherwise.
fn env_file_list(args: &ExecArgs, config: &Config) -> Vec<PathBuf> {
    if args.env_files.is_empty() {
        config.dev.env_files.clone()
    } else {
        args.env_files.clone()
    }
}
