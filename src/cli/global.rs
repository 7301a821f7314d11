// envr-rs: Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     ← Additional config files (can repeat)
//! --log-level N     ← Console verbosity (0-5)
//! --file-log-level  ← File verbosity (defaults to --log-level)
//! --log-file FILE   ← global.log_file override
//! --account ID      ← site.account_id override
//! --site ID         ← site.site_id override
//! --records FILE    ← read remote records from JSON instead of the API
//!
//! Precedence: CLI flags > ENVR__* > --config > envr.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::config::ConfigLoader;
use crate::error::Result;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Account id owning the shared variables.
    #[arg(long = "account", value_name = "ID")]
    pub account_id: Option<String>,

    /// Site id to resolve variables for.
    #[arg(long = "site", value_name = "ID")]
    pub site_id: Option<String>,

    /// Read remote records from a JSON file instead of the API.
    #[arg(long = "records", value_name = "FILE")]
    pub records: Option<PathBuf>,
}

impl GlobalOptions {
    /// Applies command-line options as configuration overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be set.
    pub fn apply_overrides(&self, mut loader: ConfigLoader) -> Result<ConfigLoader> {
        if let Some(level) = self.log_level {
            loader = loader.set("global.log_level", i64::from(level))?;
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            loader = loader.set("global.file_log_level", i64::from(level))?;
        }

        if let Some(ref path) = self.log_file {
            loader = loader.set("global.log_file", path.display().to_string())?;
        }

        if let Some(ref account_id) = self.account_id {
            loader = loader.set("site.account_id", account_id.as_str())?;
        }

        if let Some(ref site_id) = self.site_id {
            loader = loader.set("site.site_id", site_id.as_str())?;
        }

        Ok(loader)
    }
}
