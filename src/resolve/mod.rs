// envr-rs: Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Variable resolution pipeline.
//!
//! # Architecture
//!
//! ```text
//!   RemoteStore ──┬── account records ──┐
//!   (join!)       └── site records ─────┤
//!                                       v
//!                      format_snapshot (select_value + scope_matches)
//!                                       │
//!   local layers ───────────────────────┤  general / addons /
//!   (config)                            │  configFile / internal
//!                                       v
//!                      merge_sources (precedence, scope-gated layers)
//!                                       │
//!   env files ─── overlay_env_files ────┤  resolve_for_dev only
//!                                       v
//!                                    EnvMap
//!                                       │
//!   ProcessEnv ──── reconcile ──────────┘  -> ReconcileReport
//! ```
//!
//! Raw requests skip formatting and merging and return a flat
//! `key -> value` map of the remote records.

pub mod merge;
pub mod overlay;
pub mod reconcile;
pub mod select;
pub mod snapshot;
pub mod types;


use bon::Builder;
use std::collections::BTreeMap;
use tracing::debug;

use crate::context::Context;
use crate::remote::{RemoteStore, fetch_or_empty};
use crate::scope::Scope;
use crate::source::Source;

pub use merge::{SourceLayers, merge_sources};
pub use overlay::{DotEnvFile, overlay_env_files};
pub use reconcile::{IgnoredSource, ReconcileReport, reconcile};
pub use select::select_value;
pub use snapshot::{format_snapshot, raw_snapshot};
pub use types::{EnvMap, ResolvedEntry, ValueVariant, VariableRecord};

/// What to resolve.
#[derive(Debug, Clone, Default, Builder)]
pub struct ResolveRequest {
    /// Normalized context or branch.
    #[builder(default)]
    pub context: Context,
    #[builder(default)]
    pub scope: Scope,
    /// Restrict the result to one key (case-sensitive).
    #[builder(into)]
    pub key: Option<String>,
    /// Return a flat remote-only map instead of merged entries.
    #[builder(default)]
    pub raw: bool,
}

/// Identifies the site whose variables are resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteRef {
    /// Without an account id nothing is fetched remotely.
    pub account_id: Option<String>,
    pub site_id: Option<String>,
}

impl SiteRef {
    #[must_use]
    pub fn new(account_id: Option<String>, site_id: Option<String>) -> Self {
        Self {
            account_id,
            site_id,
        }
    }
}

/// Result of [`Resolver::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Entries(EnvMap),
    Raw(BTreeMap<String, String>),
}

impl Resolution {
    /// Flat `key -> value` view of either shape.
    #[must_use]
    pub fn into_values(self) -> BTreeMap<String, String> {
        match self {
            Self::Entries(env) => env.to_values(),
            Self::Raw(raw) => raw,
        }
    }
}

/// Resolves variables for one site from a remote store and local layers.
#[derive(Debug)]
pub struct Resolver<'a, S> {
    store: &'a S,
    site: &'a SiteRef,
    local: &'a SourceLayers,
}

impl<'a, S: RemoteStore + Sync> Resolver<'a, S> {
    /// `local` supplies the `general`, `addons`, `configFile` and `internal`
    /// layers; its `account` and `ui` layers are replaced by remote data.
    #[must_use]
    pub const fn new(store: &'a S, site: &'a SiteRef, local: &'a SourceLayers) -> Self {
        Self { store, site, local }
    }

    /// Fetch remote records and resolve them as `request` asks.
    pub async fn resolve(&self, request: &ResolveRequest) -> Resolution {
        let context = request.context.as_str();
        let key = request.key.as_deref();
        let account_id = self.site.account_id.as_deref();

        let site_fetch = async {
            match self.site.site_id.as_deref() {
                Some(site_id) => fetch_or_empty(self.store, account_id, Some(site_id), key).await,
                None => {
                    debug!("no site id, skipping site records");
                    Vec::new()
                }
            }
        };
        let (account_records, site_records) =
            tokio::join!(fetch_or_empty(self.store, account_id, None, key), site_fetch);

        if request.raw {
            return Resolution::Raw(raw_snapshot(&account_records, &site_records, context));
        }

        let mut layers = self.local.clone();
        layers.account = format_snapshot(&account_records, context, request.scope, &Source::Account);
        layers.ui = format_snapshot(&site_records, context, request.scope, &Source::Ui);

        let mut env = merge_sources(&layers, request.scope);
        if let Some(key) = key {
            env.retain(|name, _| name == key);
        }

        debug!(
            context = %request.context,
            scope = %request.scope,
            count = env.len(),
            "resolved variables"
        );
        Resolution::Entries(env)
    }

    /// Resolve merged entries, ignoring `request.raw`.
    pub async fn resolve_entries(&self, request: &ResolveRequest) -> EnvMap {
        let request = ResolveRequest {
            raw: false,
            ..request.clone()
        };
        match self.resolve(&request).await {
            Resolution::Entries(env) => env,
            Resolution::Raw(_) => EnvMap::new(),
        }
    }

    /// Resolve merged entries and overlay local env files on top.
    pub async fn resolve_for_dev(&self, request: &ResolveRequest, files: &[DotEnvFile]) -> EnvMap {
        let env = self.resolve_entries(request).await;
        let mut env = overlay_env_files(env, files);
        if let Some(key) = request.key.as_deref() {
            env.retain(|name, _| name == key);
        }
        env
    }
}
