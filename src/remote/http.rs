// envr-rs: Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! HTTP-backed remote store.
//!
//! ```text
//! GET {base}/accounts/{account}/env            ?site_id={site}   -> [record]
//! GET {base}/accounts/{account}/env/{key}      ?site_id={site}   -> record
//! Authorization: Bearer {token}
//! ```

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use super::{FetchQuery, RemoteStore};
use crate::error::RemoteError;
use crate::resolve::VariableRecord;

/// Remote store speaking the variable HTTP API.
#[derive(Debug, Clone)]
pub struct HttpStore {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl HttpStore {
    /// Creates a store rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::InvalidUrl` if `base_url` cannot be parsed or
    /// cannot carry path segments, and `RemoteError::Reqwest` if the HTTP
    /// client cannot be built.
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, RemoteError> {
        let base_url =
            Url::parse(base_url).map_err(|e| RemoteError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(RemoteError::InvalidUrl(base_url.to_string()));
        }
        let client = Client::builder()
            .user_agent(format!("envr-rs/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    /// URL for `query`.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::InvalidUrl` if the base URL cannot take segments.
    pub fn records_url(&self, query: &FetchQuery) -> Result<Url, RemoteError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| RemoteError::InvalidUrl(self.base_url.to_string()))?;
            segments
                .pop_if_empty()
                .extend(["accounts", query.account_id.as_str(), "env"]);
            if let Some(key) = &query.key {
                segments.push(key);
            }
        }
        if let Some(site_id) = &query.site_id {
            url.query_pairs_mut().append_pair("site_id", site_id);
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, RemoteError> {
        let mut request = self.client.get(url.clone());
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::HttpError {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| RemoteError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

impl RemoteStore for HttpStore {
    async fn fetch(&self, query: &FetchQuery) -> Result<Vec<VariableRecord>, RemoteError> {
        let url = self.records_url(query)?;
        if query.key.is_some() {
            let record: VariableRecord = self.get_json(url).await?;
            Ok(vec![record])
        } else {
            self.get_json(url).await
        }
    }
}
