// envr-rs: Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Variable command arguments.
//!
//! # Context and Scope Parsing
//!
//! ```text
//! --context prod            → production
//! --context branch:feat-x   → branch "feat-x"
//! --context branch:dev      → error (reserved)
//! --scope post-processing   → post_processing
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::context::Context;
use crate::scope::Scope;

/// Deploy context or branch, normalized at parse time.
#[derive(Debug, Clone, Default, Args)]
pub struct ContextArgs {
    /// Deploy context (production, deploy-preview, branch-deploy, dev),
    /// an alias (prod, dp) or a branch name ("branch:NAME").
    #[arg(long, value_name = "CONTEXT", default_value = "dev", value_parser = parse_context)]
    pub context: Context,

    /// Scope (builds, functions, runtime, post-processing, any).
    #[arg(long, value_name = "SCOPE", default_value = "any")]
    pub scope: Scope,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub target: ContextArgs,

    /// Output a JSON object of key/value pairs.
    #[arg(long, conflicts_with = "plain")]
    pub json: bool,

    /// Output KEY=VALUE lines.
    #[arg(long)]
    pub plain: bool,
}

/// Arguments for the `get` command.
#[derive(Debug, Clone, Default, Args)]
pub struct GetArgs {
    #[command(flatten)]
    pub target: ContextArgs,

    /// Variable name (case-sensitive).
    #[arg(value_name = "KEY")]
    pub key: String,
}

/// Arguments for the `export` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ExportArgs {
    /// Deploy context or branch, see `list --help`.
    #[arg(long, value_name = "CONTEXT", default_value = "dev", value_parser = parse_context)]
    pub context: Context,
}

/// Arguments for the `exec` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ExecArgs {
    #[command(flatten)]
    pub target: ContextArgs,

    /// Env file to load, relative to the project root. Can be repeated;
    /// the first listed wins. Replaces `[dev] env_files`.
    #[arg(long = "env-file", value_name = "FILE", action = clap::ArgAction::Append)]
    pub env_files: Vec<PathBuf>,

    /// Program and arguments to run.
    #[arg(value_name = "COMMAND", trailing_var_arg = true, required = true)]
    pub command: Vec<String>,
}

fn parse_context(raw: &str) -> Result<Context, String> {
    Context::from_token(raw).map_err(|e| e.to_string())
}
