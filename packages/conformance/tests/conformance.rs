//! End-to-end conformance tests for the microstream node API.
//!
//! Each test spawns an ephemeral in-process node (real TCP, real HTTP) via
//! [`microstream_conformance::spawn_node`] and exercises the wire contract
//! with a `reqwest` HTTP client.
//!
//! # Coverage
//!
//! | Test | Contract |
//! |------|----------|
//! | `node_route_returns_descriptor` | discovery document |
//! | `node_route_typed_response` | `NodeResponse` client type |
//! | `node_route_is_idempotent` | byte-identical repeated responses |
//! | `custom_identity_is_advertised` | descriptor reflects config |
//! | `missing_route_returns_no_route` | `no_route` / 404 |
//! | `unknown_route_returns_unknown_route` | `unknown_route` / 404 |
//! | `empty_route_is_unknown` | empty name is not absence |
//! | `route_names_are_case_sensitive` | exact matching |
//! | `content_type_is_json_utf8` | single content-type header |
//! | `protocol_is_compatible` | protocol version policy |

use microstream_conformance::{spawn_node, spawn_node_with, NODE_ID, TITLE};
use microstream_node_api::{
    ErrorCode, ErrorEnvelope, NodeResponse, ProtocolVersion, PROTOCOL_VERSION,
};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn make_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .unwrap()
}

async fn get_error(url: &str) -> (reqwest::StatusCode, ErrorEnvelope) {
    let resp = make_client().get(url).send().await.unwrap();
    let status = resp.status();
    (status, resp.json().await.unwrap())
}

// ---------------------------------------------------------------------------
// Discovery
// ---------------------------------------------------------------------------

#[tokio::test]
async fn node_route_returns_descriptor() {
    let node = spawn_node().await;
    let resp = make_client().get(node.route_url("node")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["protocol"], PROTOCOL_VERSION);
    assert_eq!(body["node"]["node_id"], NODE_ID);
    assert_eq!(body["node"]["title"], TITLE);
    assert_eq!(body["node"]["url"], node.base_url);
    assert_eq!(body["node"]["api_base"], node.api_url);
    assert_eq!(body["node"]["software"]["name"], "microstream");
    assert!(body["node"]["software"]["version"].is_string());
}

#[tokio::test]
async fn node_route_typed_response() {
    let node = spawn_node().await;
    let resp: NodeResponse = make_client()
        .get(node.route_url("node"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(resp.protocol, PROTOCOL_VERSION);
    assert_eq!(resp.node.api_base, format!("{}/api.php", node.base_url));
}

#[tokio::test]
async fn node_route_is_idempotent() {
    let node = spawn_node().await;
    let client = make_client();
    let first = client
        .get(node.route_url("node"))
        .send()
        .await
        .unwrap()
        .bytes()
        .await
        .unwrap();
    for _ in 0..5 {
        let again = client
            .get(node.route_url("node"))
            .send()
            .await
            .unwrap()
            .bytes()
            .await
            .unwrap();
        assert_eq!(again, first);
    }
}

#[tokio::test]
async fn custom_identity_is_advertised() {
    let id = uuid::Uuid::parse_str("22222222-2222-2222-2222-222222222222").unwrap();
    let node = spawn_node_with(id, "Second Stream").await;
    let resp: NodeResponse = make_client()
        .get(node.route_url("node"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(resp.node.node_id, "22222222-2222-2222-2222-222222222222");
    assert_eq!(resp.node.title, "Second Stream");
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_route_returns_no_route() {
    let node = spawn_node().await;
    let (status, body) = get_error(&node.api_url).await;
    assert_eq!(status, 404);
    assert_eq!(body.protocol, PROTOCOL_VERSION);
    assert_eq!(body.status, "error");
    assert_eq!(body.error.code, ErrorCode::NoRoute);
}

#[tokio::test]
async fn unknown_route_returns_unknown_route() {
    let node = spawn_node().await;
    let (status, body) = get_error(&node.route_url("not_a_real_route")).await;
    assert_eq!(status, 404);
    assert_eq!(body.protocol, PROTOCOL_VERSION);
    assert_eq!(body.error.code, ErrorCode::UnknownRoute);
}

#[tokio::test]
async fn empty_route_is_unknown() {
    let node = spawn_node().await;
    let (status, body) = get_error(&node.route_url("")).await;
    assert_eq!(status, 404);
    assert_eq!(body.error.code, ErrorCode::UnknownRoute);
}

#[tokio::test]
async fn route_names_are_case_sensitive() {
    let node = spawn_node().await;
    let (status, body) = get_error(&node.route_url("NODE")).await;
    assert_eq!(status, 404);
    assert_eq!(body.error.code, ErrorCode::UnknownRoute);
}

// ---------------------------------------------------------------------------
// Transport
// ---------------------------------------------------------------------------

#[tokio::test]
async fn content_type_is_json_utf8() {
    let node = spawn_node().await;
    let client = make_client();
    for url in [
        node.route_url("node"),
        node.api_url.clone(),
        node.route_url("missing"),
    ] {
        let resp = client.get(&url).send().await.unwrap();
        let values: Vec<_> = resp
            .headers()
            .get_all(reqwest::header::CONTENT_TYPE)
            .iter()
            .collect();
        assert_eq!(values.len(), 1, "{url}");
        assert_eq!(values[0], "application/json; charset=utf-8", "{url}");
    }
}

#[tokio::test]
async fn protocol_is_compatible() {
    let node = spawn_node().await;
    let resp: NodeResponse = make_client()
        .get(node.route_url("node"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let advertised: ProtocolVersion = resp.protocol.parse().unwrap();
    assert!(ProtocolVersion::current().is_compatible_with(&advertised));
}
