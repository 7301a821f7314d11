// envr-rs: Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration sections.
//!
//! ```text
//! [global]             log levels, log file
//! [api]                remote store url + token
//! [site]               account / site ids, project root
//! [dev]                env file list
//! [env.general]        general source      } local variable
//! [env.addons]         addons source       } layers
//! [env.internal]       internal source     }
//! [build.environment]  configFile source   }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Default remote API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.netlify.com/api/v1";

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-5).
    pub log_level: LogLevel,
    /// Log level for file output (0-5).
    pub file_log_level: LogLevel,
    /// Path to log file; no file logging when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::WARN,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Remote store access.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiConfig {
    pub url: String,
    /// Bearer token. Never printed.
    pub token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_API_URL.to_string(),
            token: None,
        }
    }
}

/// The site whose variables are resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub account_id: Option<String>,
    pub site_id: Option<String>,
    /// Project directory; env files are read from here.
    pub root: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            account_id: None,
            site_id: None,
            root: PathBuf::from("."),
        }
    }
}

/// Local development settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DevConfig {
    /// Env files, first listed wins. Empty means the default list.
    pub env_files: Vec<PathBuf>,
}

/// Variables supplied by the tool and its add-ons.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvConfig {
    pub general: BTreeMap<String, String>,
    pub addons: BTreeMap<String, String>,
    pub internal: BTreeMap<String, String>,
}

/// Build settings from the project config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    pub environment: BTreeMap<String, String>,
}
