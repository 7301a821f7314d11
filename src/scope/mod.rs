// envr-rs: Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Execution scopes a variable can be visible in.
//!
//! ```text
//! Scope: builds | functions | runtime | post_processing | any
//!
//! declared scopes     requested       visible?
//! ----------------    ---------       --------
//! (anything)          any             yes
//! None (legacy)       builds          yes
//! None (legacy)       post_processing yes
//! None (legacy)       functions       no
//! [builds, runtime]   runtime         yes
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// An execution scope, or `Any` to match every scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    Builds,
    Functions,
    Runtime,
    #[serde(alias = "post-processing")]
    PostProcessing,
    #[default]
    Any,
}

/// Every concrete scope a remote variable can declare.
pub const ALL_SCOPES: [Scope; 4] = [
    Scope::Builds,
    Scope::Functions,
    Scope::Runtime,
    Scope::PostProcessing,
];

/// Scopes implied for variables that declare none (config-file style).
const LEGACY_SCOPES: [Scope; 2] = [Scope::Builds, Scope::PostProcessing];

impl Scope {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Builds => "builds",
            Self::Functions => "functions",
            Self::Runtime => "runtime",
            Self::PostProcessing => "post_processing",
            Self::Any => "any",
        }
    }

    /// Label shown in listings.
    #[must_use]
    pub const fn human_name(self) -> &'static str {
        match self {
            Self::Builds => "Builds",
            Self::Functions => "Functions",
            Self::Runtime => "Runtime",
            Self::PostProcessing => "Post processing",
            Self::Any => "All",
        }
    }

    /// Whether build-time sources (`addons`, `configFile`) apply to this scope.
    #[must_use]
    pub const fn includes_build_sources(self) -> bool {
        matches!(self, Self::Any | Self::Builds | Self::PostProcessing)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "builds" => Ok(Self::Builds),
            "functions" => Ok(Self::Functions),
            "runtime" => Ok(Self::Runtime),
            "post_processing" | "post-processing" => Ok(Self::PostProcessing),
            "any" => Ok(Self::Any),
            _ => Err(ConfigError::InvalidValue {
                section: "resolve".to_string(),
                key: "scope".to_string(),
                message: format!(
                    "expected 'builds', 'functions', 'runtime', 'post_processing' or 'any', got '{s}'"
                ),
            }),
        }
    }
}

/// Decide whether a variable with `declared` scopes is visible in `requested`.
///
/// `None` means the variable never declared scopes; those are baked in at
/// build time and only reach `builds` and `post_processing`.
#[must_use]
pub fn scope_matches(declared: Option<&[Scope]>, requested: Scope) -> bool {
    if requested == Scope::Any {
        return true;
    }
    declared
        .unwrap_or(&LEGACY_SCOPES)
        .contains(&requested)
}

/// Comma-separated scope labels for display.
#[must_use]
pub fn human_readable_scopes(scopes: Option<&[Scope]>) -> String {
    let Some(scopes) = scopes else {
        return "Builds, Post processing".to_string();
    };
    if ALL_SCOPES.iter().all(|scope| scopes.contains(scope)) {
        return Scope::Any.human_name().to_string();
    }
    scopes
        .iter()
        .map(|scope| scope.human_name())
        .collect::<Vec<_>>()
        .join(", ")
}
