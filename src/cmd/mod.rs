// envr-rs: Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   list, get, export, exec, config
//!
//! --records FILE ? Store::Memory : Store::Http(api.url, api.token)
//! ```

pub mod config;
pub mod exec;
pub mod export;
pub mod get;
pub mod list;

use std::path::Path;

use tracing::debug;

use crate::config::Config;
use crate::error::{EnvrResult, RemoteError};
use crate::remote::{FetchQuery, HttpStore, MemoryStore, RemoteStore};
use crate::resolve::VariableRecord;

/// The store a command reads remote records from.
#[derive(Debug)]
pub enum Store {
    Http(HttpStore),
    Memory(MemoryStore),
}

impl Store {
    /// Opens the JSON records file when given, the HTTP API otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the records file cannot be loaded or the API url
    /// is invalid.
    pub fn open(config: &Config, records: Option<&Path>) -> EnvrResult<Self> {
        if let Some(path) = records {
            debug!(path = %path.display(), "using records file");
            return Ok(Self::Memory(MemoryStore::from_json_file(path)?));
        }
        debug!(url = %config.api.url, "using remote api");
        Ok(Self::Http(HttpStore::new(
            &config.api.url,
            config.api.token.clone(),
        )?))
    }
}

impl RemoteStore for Store {
    async fn fetch(&self, query: &FetchQuery) -> Result<Vec<VariableRecord>, RemoteError> {
        match self {
            Self::Http(store) => store.fetch(query).await,
            Self::Memory(store) => store.fetch(query).await,
        }
    }
}
