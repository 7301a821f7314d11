// envr-rs: Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-memory remote store.
//!
//! Used for offline runs (`--records FILE`) and tests. The JSON layout is:
//!
//! ```json
//! {
//!   "account": [{ "key": "FOO", "scopes": ["builds"], "values": [...] }],
//!   "sites": { "site-id": [ ... ] }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use super::{FetchQuery, RemoteStore};
use crate::error::{ConfigError, EnvrResult, RemoteError};
use crate::resolve::VariableRecord;

/// Records held in memory, keyed like the remote store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MemoryStore {
    /// Account-shared records.
    pub account: Vec<VariableRecord>,
    /// Site records by site id.
    pub sites: BTreeMap<String, Vec<VariableRecord>>,
    /// Reject account-shared reads with 403, like a collaborator token.
    pub deny_account: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_account_records(mut self, records: Vec<VariableRecord>) -> Self {
        self.account = records;
        self
    }

    #[must_use]
    pub fn with_site_records(mut self, site_id: impl Into<String>, records: Vec<VariableRecord>) -> Self {
        self.sites.insert(site_id.into(), records);
        self
    }

    #[must_use]
    pub const fn deny_account_reads(mut self) -> Self {
        self.deny_account = true;
        self
    }

    /// Load a store from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadError` if the file cannot be read and
    /// `ConfigError::ParseError` if it is not valid store JSON.
    pub fn from_json_file(path: impl AsRef<Path>) -> EnvrResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.display().to_string(),
            source,
        })?;
        let store = serde_json::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(store)
    }
}

impl RemoteStore for MemoryStore {
    async fn fetch(&self, query: &FetchQuery) -> Result<Vec<VariableRecord>, RemoteError> {
        let records = match &query.site_id {
            None if self.deny_account => {
                return Err(RemoteError::HttpError {
                    status: 403,
                    url: format!("memory://accounts/{}/env", query.account_id),
                });
            }
            None => self.account.as_slice(),
            Some(site_id) => self.sites.get(site_id).map_or(&[][..], Vec::as_slice),
        };

        Ok(records
            .iter()
            .filter(|record| query.key.as_deref().is_none_or(|key| record.key == key))
            .cloned()
            .collect())
    }
}
