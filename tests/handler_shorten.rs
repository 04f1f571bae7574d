mod common;

use axum_test::TestServer;
use miniurl::domain::repositories::MappingStore;
use miniurl::routes::routes;
use serde_json::json;

#[tokio::test]
async fn test_shorten_success() {
    let (state, _rx, store) = common::create_test_state(Some("links.example.com"));
    let server = TestServer::new(routes(state)).unwrap();

    let response = server
        .post("/url")
        .json(&json!({ "longUrl": "https://example.com/page" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let body = response.json::<serde_json::Value>();
    let short_url = body["shortUrl"].as_str().unwrap();
    assert!(short_url.starts_with("https://links.example.com/"));

    // 4 random bytes render as a 6-character identifier.
    let id = short_url.rsplit('/').next().unwrap();
    assert_eq!(id.len(), 6);

    // The mapping must be persisted with a zeroed counter.
    let record = store.get(id).await.unwrap().unwrap();
    assert_eq!(record.long_url, "https://example.com/page");
    assert_eq!(record.hit_count, 0);
}

#[tokio::test]
async fn test_shorten_response_forbids_caching() {
    let (state, _rx, _store) = common::create_test_state(Some("links.example.com"));
    let server = TestServer::new(routes(state)).unwrap();

    let response = server
        .post("/url")
        .json(&json!({ "longUrl": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 201);
    assert_eq!(
        response.header("cache-control"),
        "no-cache, no-store, must-revalidate"
    );
}

#[tokio::test]
async fn test_shorten_falls_back_to_request_host() {
    let (state, _rx, _store) = common::create_test_state(None);
    let server = TestServer::new(routes(state)).unwrap();

    let response = server
        .post("/url")
        .add_header("Host", "inbound.example.com")
        .json(&json!({ "longUrl": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let body = response.json::<serde_json::Value>();
    let short_url = body["shortUrl"].as_str().unwrap();
    assert!(short_url.starts_with("https://inbound.example.com/"));
}

#[tokio::test]
async fn test_shorten_missing_long_url() {
    let (state, _rx, _store) = common::create_test_state(Some("links.example.com"));
    let server = TestServer::new(routes(state)).unwrap();

    let response = server.post("/url").json(&json!({})).await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "Missing or invalid longUrl" })
    );
}

#[tokio::test]
async fn test_shorten_absent_body() {
    let (state, _rx, _store) = common::create_test_state(Some("links.example.com"));
    let server = TestServer::new(routes(state)).unwrap();

    // No body and no Content-Type; must still get the contract error body.
    let response = server.post("/url").await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "Missing or invalid longUrl" })
    );
}

#[tokio::test]
async fn test_shorten_malformed_json_body() {
    let (state, _rx, _store) = common::create_test_state(Some("links.example.com"));
    let server = TestServer::new(routes(state)).unwrap();

    let response = server.post("/url").text("longUrl=https://example.com").await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "Missing or invalid longUrl" })
    );
}

#[tokio::test]
async fn test_shorten_non_string_long_url() {
    let (state, _rx, _store) = common::create_test_state(Some("links.example.com"));
    let server = TestServer::new(routes(state)).unwrap();

    let response = server.post("/url").json(&json!({ "longUrl": 42 })).await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "Missing or invalid longUrl" })
    );
}

#[tokio::test]
async fn test_shorten_invalid_scheme() {
    let (state, _rx, _store) = common::create_test_state(Some("links.example.com"));
    let server = TestServer::new(routes(state)).unwrap();

    let response = server
        .post("/url")
        .json(&json!({ "longUrl": "ftp://example.com" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "URL must start with http:// or https://" })
    );
}

#[tokio::test]
async fn test_shorten_rejection_creates_no_record() {
    let (state, _rx, store) = common::create_test_state(Some("links.example.com"));
    let server = TestServer::new(routes(state)).unwrap();

    let response = server
        .post("/url")
        .json(&json!({ "longUrl": "ftp://example.com" }))
        .await;

    response.assert_status_bad_request();

    // Nothing may be persisted for a rejected request.
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_shorten_distinct_urls_get_distinct_ids() {
    let (state, _rx, _store) = common::create_test_state(Some("links.example.com"));
    let server = TestServer::new(routes(state)).unwrap();

    let first = server
        .post("/url")
        .json(&json!({ "longUrl": "https://example.com/1" }))
        .await;
    let second = server
        .post("/url")
        .json(&json!({ "longUrl": "https://example.com/2" }))
        .await;

    let first_url = first.json::<serde_json::Value>()["shortUrl"]
        .as_str()
        .unwrap()
        .to_string();
    let second_url = second.json::<serde_json::Value>()["shortUrl"]
        .as_str()
        .unwrap()
        .to_string();

    assert_ne!(first_url, second_url);
}
