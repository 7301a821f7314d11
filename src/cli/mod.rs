// envr-rs: Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for envr-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envr [global options] <command>
//! list    [--context C] [--scope S] [--json|--plain]
//! get     KEY [--context C] [--scope S]
//! export  [--context C]
//! exec    [--context C] [--scope S] [--env-file F]... -- PROGRAM [ARGS]...
//! options
//! configs
//! version
//! ```

pub mod env;
pub mod global;


use crate::cli::env::{ExecArgs, ExportArgs, GetArgs, ListArgs};
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Environment Variable Resolver
///
/// Resolves environment variables from remote, config and env file sources.
#[derive(Debug, Parser)]
#[command(
    name = "envr",
    author,
    version,
    about = "Environment Variable Resolver",
    long_about = "envr-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Resolves the environment variables of a site for a deploy\n\
                  context and scope. Do `envr list` to see the resolved\n\
                  variables, or `envr exec -- <program>` to run a program with\n\
                  them. See `envr <command> --help` for more information.",
    after_help = "CONFIG FILES:\n\n\
                  envr reads `envr.toml` from the current directory if present.\n\
                  Additional files can be given with --config; they are loaded\n\
                  after it and override its values. ENVR__SECTION__KEY\n\
                  environment variables override both."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the config files.
    Options,

    /// Lists the config files used by envr.
    Configs,

    /// Lists resolved variables.
    List(ListArgs),

    /// Prints the resolved value of one variable.
    Get(GetArgs),

    /// Prints remote variables for a context as KEY=VALUE lines.
    Export(ExportArgs),

    /// Runs a program with the resolved variables injected.
    Exec(ExecArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
