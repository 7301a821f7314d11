// envr-rs: Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote variable store access.
//!
//! ```text
//! RemoteStore::fetch(FetchQuery)
//!   |-- HttpStore    GET {url}/accounts/{account}/env[/{key}]?site_id=..
//!   '-- MemoryStore  records held in memory / loaded from JSON
//!
//! fetch_or_empty(store, ..)
//!   no account id      -> []
//!   Err(RemoteError)   -> [] (logged at debug)
//!   Ok(records)        -> records
//! ```
//!
//! Users without permission to read shared variables still get the
//! site-level ones: a failing fetch only empties its own source.

pub mod http;
pub mod memory;


use std::future::Future;

use tracing::debug;

use crate::error::RemoteError;
use crate::resolve::VariableRecord;

pub use http::HttpStore;
pub use memory::MemoryStore;

/// What to fetch: account-wide records, or one site's records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchQuery {
    pub account_id: String,
    /// `None` fetches account-shared records.
    pub site_id: Option<String>,
    /// Restrict to a single key (case-sensitive).
    pub key: Option<String>,
}

impl FetchQuery {
    #[must_use]
    pub fn account(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            site_id: None,
            key: None,
        }
    }

    #[must_use]
    pub fn site(account_id: impl Into<String>, site_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            site_id: Some(site_id.into()),
            key: None,
        }
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// "account" or "site", for logging.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        if self.site_id.is_some() {
            "site"
        } else {
            "account"
        }
    }
}

/// A source of remote variable records.
pub trait RemoteStore {
    /// Fetch the records matching `query`.
    fn fetch(
        &self,
        query: &FetchQuery,
    ) -> impl Future<Output = Result<Vec<VariableRecord>, RemoteError>> + Send;
}

/// Fetch records, degrading every failure to an empty list.
pub async fn fetch_or_empty<S: RemoteStore + Sync>(
    store: &S,
    account_id: Option<&str>,
    site_id: Option<&str>,
    key: Option<&str>,
) -> Vec<VariableRecord> {
    let Some(account_id) = account_id else {
        debug!("no account id, skipping remote fetch");
        return Vec::new();
    };

    let query = FetchQuery {
        account_id: account_id.to_string(),
        site_id: site_id.map(str::to_string),
        key: key.map(str::to_string),
    };

    match store.fetch(&query).await {
        Ok(records) => {
            debug!(kind = query.kind(), count = records.len(), "fetched remote records");
            records
        }
        Err(e) => {
            debug!(kind = query.kind(), error = %e, "remote fetch failed, using empty result");
            Vec::new()
        }
    }
}
