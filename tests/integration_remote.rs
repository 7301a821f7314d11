// envr-rs: Environment Variable Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the HTTP remote store using wiremock.
//!
//! Covers:
//! - Account and site listing requests
//! - Single-key requests
//! - Bearer authentication
//! - HTTP and decode errors
//! - Degradation to empty results through the resolver

use envr_rs::context::Context;
use envr_rs::error::RemoteError;
use envr_rs::remote::{FetchQuery, HttpStore, RemoteStore, fetch_or_empty};
use envr_rs::resolve::{ResolveRequest, Resolver, SiteRef, SourceLayers};
use envr_rs::scope::Scope;
use envr_rs::source::Source;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn store(server: &MockServer) -> HttpStore {
    HttpStore::new(&server.uri(), Some("test-token".to_string())).unwrap()
}

fn record(key: &str, value: &str) -> serde_json::Value {
    json!({
        "key": key,
        "scopes": ["builds", "functions", "runtime", "post_processing"],
        "values": [{ "context": "all", "value": value }]
    })
}

async fn mount_account(server: &MockServer, status: u16, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/accounts/acc/env"))
        .and(query_param_is_missing("site_id"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_site(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/accounts/acc/env"))
        .and(query_param("site_id", "site-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

// =============================================================================
// HttpStore::fetch
// =============================================================================

#[tokio::test]
async fn test_fetch_account_records_with_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/accounts/acc/env"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([record("FOO", "acct")])))
        .expect(1)
        .mount(&server)
        .await;

    let records = store(&server)
        .fetch(&FetchQuery::account("acc"))
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].key, "FOO");
    assert_eq!(records[0].values[0].value, "acct");
    assert_eq!(records[0].scopes.as_ref().map(Vec::len), Some(4));
}

#[tokio::test]
async fn test_fetch_site_records_sends_site_id() {
    let server = MockServer::start().await;
    mount_site(&server, json!([record("BAR", "site-bar")])).await;

    let records = store(&server)
        .fetch(&FetchQuery::site("acc", "site-1"))
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].key, "BAR");
}

#[tokio::test]
async fn test_fetch_single_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/accounts/acc/env/API_KEY"))
        .and(query_param("site_id", "site-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(record("API_KEY", "k")))
        .mount(&server)
        .await;

    let records = store(&server)
        .fetch(&FetchQuery::site("acc", "site-1").with_key("API_KEY"))
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].key, "API_KEY");
}

#[tokio::test]
async fn test_fetch_http_errors() {
    for status in [401_u16, 403, 404, 500] {
        let server = MockServer::start().await;
        mount_account(&server, status, json!({ "message": "nope" })).await;

        let err = store(&server)
            .fetch(&FetchQuery::account("acc"))
            .await
            .unwrap_err();

        match err {
            RemoteError::HttpError {
                status: actual, ..
            } => assert_eq!(actual, status),
            other => panic!("expected HttpError for {status}, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_fetch_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/accounts/acc/env"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = store(&server)
        .fetch(&FetchQuery::account("acc"))
        .await
        .unwrap_err();

    assert!(matches!(err, RemoteError::Decode { .. }));
}

// =============================================================================
// Degradation
// =============================================================================

#[tokio::test]
async fn test_fetch_or_empty_on_forbidden() {
    let server = MockServer::start().await;
    mount_account(&server, 403, json!({ "message": "forbidden" })).await;

    let records = fetch_or_empty(&store(&server), Some("acc"), None, None).await;
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_resolver_keeps_site_when_account_forbidden() {
    let server = MockServer::start().await;
    mount_account(&server, 403, json!({ "message": "forbidden" })).await;
    mount_site(&server, json!([record("SITE", "v")])).await;

    let store = store(&server);
    let site = SiteRef::new(Some("acc".to_string()), Some("site-1".to_string()));
    let local = SourceLayers::default();
    let resolver = Resolver::new(&store, &site, &local);

    let env = resolver
        .resolve_entries(&ResolveRequest::default())
        .await;

    assert_eq!(env.len(), 1);
    assert_eq!(env.get("SITE").unwrap().sources, vec![Source::Ui]);
}

#[tokio::test]
async fn test_resolver_end_to_end_over_http() {
    let server = MockServer::start().await;
    mount_account(&server, 200, json!([record("FOO", "acct")])).await;
    mount_site(
        &server,
        json!([record("FOO", "site"), record("BAR", "site-bar")]),
    )
    .await;

    let store = store(&server);
    let site = SiteRef::new(Some("acc".to_string()), Some("site-1".to_string()));
    let local = SourceLayers::default();
    let resolver = Resolver::new(&store, &site, &local);

    let request = ResolveRequest::builder()
        .context(Context::Production)
        .scope(Scope::Any)
        .build();
    let env = resolver.resolve_entries(&request).await;

    let foo = env.get("FOO").unwrap();
    assert_eq!(foo.value, "site");
    assert_eq!(foo.sources, vec![Source::Ui, Source::Account]);

    let bar = env.get("BAR").unwrap();
    assert_eq!(bar.value, "site-bar");
    assert_eq!(bar.sources, vec![Source::Ui]);
}
