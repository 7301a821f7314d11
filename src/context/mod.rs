// envr-rs: Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Deploy context tokens.
//!
//! ```text
//! "Prod" --lowercase--> "prod" --alias--> "production"
//! "branch:Feature-X" --> "branch:feature-x" --strip--> "feature-x"
//! "branch:dev" --> ContextError::Reserved
//! ```
//!
//! Canonical contexts: `all`, `production`, `deploy-preview`,
//! `branch-deploy`, `dev`. Anything else is a branch name.

use std::fmt;

use crate::error::ContextError;

/// Canonical context names, in the order the remote store documents them.
pub const SUPPORTED_CONTEXTS: [&str; 5] = [
    "all",
    "production",
    "deploy-preview",
    "branch-deploy",
    "dev",
];

/// Context used when the caller does not pass one.
pub const DEFAULT_CONTEXT: &str = "dev";

const BRANCH_PREFIX: &str = "branch:";

/// A deploy context or a branch name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Context {
    All,
    Production,
    DeployPreview,
    BranchDeploy,
    #[default]
    Dev,
    /// An arbitrary branch name (never one of the canonical names).
    Branch(String),
}

impl Context {
    /// Classify an already-normalized token without alias handling.
    #[must_use]
    pub fn classify(token: &str) -> Self {
        match token {
            "all" => Self::All,
            "production" => Self::Production,
            "deploy-preview" => Self::DeployPreview,
            "branch-deploy" => Self::BranchDeploy,
            "dev" => Self::Dev,
            other => Self::Branch(other.to_string()),
        }
    }

    /// Normalize a user-supplied token and classify the result.
    ///
    /// An empty token resolves to [`DEFAULT_CONTEXT`].
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::Reserved`] for `branch:<canonical>` tokens.
    pub fn from_token(raw: &str) -> Result<Self, ContextError> {
        let normalized = normalize_context(raw)?;
        if normalized.is_empty() {
            return Ok(Self::Dev);
        }
        Ok(Self::classify(&normalized))
    }

    /// The string form used to match value variants.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Production => "production",
            Self::DeployPreview => "deploy-preview",
            Self::BranchDeploy => "branch-deploy",
            Self::Dev => "dev",
            Self::Branch(name) => name,
        }
    }

    /// Whether this is one of the five canonical contexts.
    #[must_use]
    pub const fn is_canonical(&self) -> bool {
        !matches!(self, Self::Branch(_))
    }

    /// "context" or "branch", for messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        if self.is_canonical() {
            "context"
        } else {
            "branch"
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns true if `token` is one of the canonical context names.
#[must_use]
pub fn is_supported_context(token: &str) -> bool {
    SUPPORTED_CONTEXTS.contains(&token)
}

fn resolve_alias(token: &str) -> &str {
    match token {
        "dp" => "deploy-preview",
        "prod" => "production",
        other => other,
    }
}

/// Normalize a user-supplied context token.
///
/// Lower-cases, resolves the `dp`/`prod` aliases and strips `branch:`
/// prefixes. Empty input is returned unchanged.
///
/// # Errors
///
/// Returns [`ContextError::Reserved`] when a `branch:` prefix wraps a
/// canonical context name or one of its aliases.
pub fn normalize_context(raw: &str) -> Result<String, ContextError> {
    if raw.is_empty() {
        return Ok(String::new());
    }

    let lowered = raw.to_lowercase();
    let mut token = resolve_alias(&lowered);

    // Each stripped prefix is checked, aliases included: "branch:branch:dev"
    // and "branch:prod" are both reserved.
    while let Some(rest) = token.strip_prefix(BRANCH_PREFIX) {
        if is_supported_context(resolve_alias(rest)) {
            return Err(ContextError::Reserved {
                context: token.to_string(),
            });
        }
        token = rest;
    }

    Ok(token.to_string())
}
