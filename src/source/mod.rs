// envr-rs: Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Logical origins of a variable's value.
//!
//! ```text
//! general < account < addons* < ui < configFile* < internal
//!                        (* build-time scopes only)
//! env files overlay everything except internal
//! process env wins over everything except internal
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Where a value came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Source {
    /// Built-in defaults supplied by the tool.
    General,
    /// Shared across every site of the account.
    Account,
    /// Provided by an installed add-on.
    Addons,
    /// Site-level settings.
    Ui,
    /// Declared in the project config file.
    ConfigFile,
    /// Control variables the tool enforces itself.
    Internal,
    /// Already present in the running process.
    Process,
    /// A local env file, e.g. `".env file"`.
    File(String),
}

impl Source {
    /// Build the source label for an env file.
    #[must_use]
    pub fn file(file_name: &str) -> Self {
        Self::File(format!("{file_name} file"))
    }

    /// Identifier used in records and JSON output.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::General => "general",
            Self::Account => "account",
            Self::Addons => "addons",
            Self::Ui => "ui",
            Self::ConfigFile => "configFile",
            Self::Internal => "internal",
            Self::Process => "process",
            Self::File(name) => name,
        }
    }

    /// User-facing name for log messages.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::General => "general context",
            Self::Account => "shared",
            Self::Addons => "addon",
            Self::Ui => "project settings",
            Self::ConfigFile => "envr.toml file",
            Self::Internal => "internal",
            Self::Process => "process",
            Self::File(name) => name,
        }
    }

    /// Parse an identifier; unknown names are treated as file labels.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            "general" => Self::General,
            "account" => Self::Account,
            "addons" => Self::Addons,
            "ui" => Self::Ui,
            "configFile" => Self::ConfigFile,
            "internal" => Self::Internal,
            "process" => Self::Process,
            other => Self::File(other.to_string()),
        }
    }

    /// Winners that are left out of the injected summary.
    #[must_use]
    pub const fn is_quiet(&self) -> bool {
        matches!(self, Self::General | Self::Internal)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Source {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Source {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::parse(&name))
    }
}

#[cfg(test)]
mod tests;
