// envr-rs: Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for envr-rs.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. envr.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. ENVR__* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! ENVR__API__TOKEN=abc         → api.token = "abc"
//! ENVR__SITE__SITE_ID=123      → site.site_id = "123"
//! ENVR__GLOBAL__LOG_LEVEL=4    → global.log_level = 4
//! ```
//!
//! # Local Variable Layers
//!
//! ```toml
//! [env.general]
//! TZ = "UTC"
//!
//! [build.environment]   # configFile source
//! NODE_VERSION = "22"
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::resolve::{EnvMap, ResolvedEntry, SiteRef, SourceLayers};
use crate::source::Source;

pub use loader::ConfigLoader;
use types::{ApiConfig, BuildConfig, DevConfig, EnvConfig, GlobalConfig, SiteConfig};

/// Default project config file name.
pub const CONFIG_FILE_NAME: &str = "envr.toml";

/// Variable the internal source always sets.
pub const DEV_MARKER_KEY: &str = "ENVR_DEV";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub global: GlobalConfig,
    pub api: ApiConfig,
    pub site: SiteConfig,
    pub dev: DevConfig,
    pub env: EnvConfig,
    pub build: BuildConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use envr_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("envr.toml")
    ///     .with_env_prefix("ENVR")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Check values that deserialization alone cannot.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingKey` for an empty API url and
    /// `ConfigError::InvalidValue` for empty variable names.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.api.url.trim().is_empty() {
            return Err(ConfigError::MissingKey {
                section: "api".to_string(),
                key: "url".to_string(),
            });
        }

        let tables = [
            ("env.general", &self.env.general),
            ("env.addons", &self.env.addons),
            ("env.internal", &self.env.internal),
            ("build.environment", &self.build.environment),
        ];
        for (section, table) in tables {
            if table.keys().any(|key| key.trim().is_empty()) {
                return Err(ConfigError::InvalidValue {
                    section: section.to_string(),
                    key: String::new(),
                    message: "variable names must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// The site to resolve for.
    #[must_use]
    pub fn site_ref(&self) -> SiteRef {
        SiteRef::new(self.site.account_id.clone(), self.site.site_id.clone())
    }

    /// Local variable layers: `general`, `addons`, `configFile`, `internal`.
    ///
    /// Entries carry no scopes. The internal layer always holds
    /// `ENVR_DEV=true`.
    #[must_use]
    pub fn local_sources(&self) -> SourceLayers {
        let mut internal = layer(&self.env.internal, &Source::Internal);
        internal.insert(DEV_MARKER_KEY, ResolvedEntry::local("true", Source::Internal));

        SourceLayers {
            general: layer(&self.env.general, &Source::General),
            addons: layer(&self.env.addons, &Source::Addons),
            config_file: layer(&self.build.environment, &Source::ConfigFile),
            internal,
            ..SourceLayers::default()
        }
    }

    /// Format configuration options for display.
    ///
    /// Secrets are shown as `[hidden]`. Output is ordered by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_api_options(&mut options);
        self.format_site_options(&mut options);
        self.format_variable_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.log_level".into(),
            self.global.log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
    }

    fn format_api_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("api.url".into(), self.api.url.clone());
        if self.api.token.as_deref().is_some_and(|t| !t.is_empty()) {
            options.insert("api.token".into(), "[hidden]".into());
        }
    }

    fn format_site_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "site.account_id".into(),
            self.site.account_id.clone().unwrap_or_default(),
        );
        options.insert(
            "site.site_id".into(),
            self.site.site_id.clone().unwrap_or_default(),
        );
        options.insert("site.root".into(), self.site.root.display().to_string());
        options.insert(
            "dev.env_files".into(),
            self.dev
                .env_files
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", "),
        );
    }

    fn format_variable_options(&self, options: &mut BTreeMap<String, String>) {
        let tables = [
            ("env.general", &self.env.general),
            ("env.addons", &self.env.addons),
            ("env.internal", &self.env.internal),
            ("build.environment", &self.build.environment),
        ];
        for (section, table) in tables {
            for (key, value) in table {
                options.insert(format!("{section}.{key}"), value.clone());
            }
        }
    }
}

fn layer(vars: &BTreeMap<String, String>, source: &Source) -> EnvMap {
    vars.iter()
        .map(|(key, value)| (key.clone(), ResolvedEntry::local(value.clone(), source.clone())))
        .collect()
}
