//! Shared helpers for the microstream conformance test suite.
//!
//! Provides [`spawn_node`] — a function that binds a `TcpListener` on an
//! ephemeral port, wires up an in-process node, and returns the URL of its
//! API endpoint.

use std::sync::Arc;

use microstream_node::{build_router, NodeConfig};
use uuid::Uuid;

/// Node id used by [`spawn_node`].
pub const NODE_ID: &str = "11111111-1111-1111-1111-111111111111";

/// Title used by [`spawn_node`].
pub const TITLE: &str = "Jim's Stream";

/// A node running in the background of the current tokio runtime.
#[derive(Debug, Clone)]
pub struct SpawnedNode {
    /// Base URL of the node, e.g. `http://127.0.0.1:51234`.
    pub base_url: String,
    /// Full URL of the API endpoint, e.g. `http://127.0.0.1:51234/api.php`.
    pub api_url: String,
}

impl SpawnedNode {
    /// URL requesting `route`.
    pub fn route_url(&self, route: &str) -> String {
        format!("{}?route={route}", self.api_url)
    }
}

/// Start an ephemeral in-process node with [`NODE_ID`] and [`TITLE`].
///
/// # Panics
///
/// Panics if the TCP listener cannot be bound or the node fails to start.
pub async fn spawn_node() -> SpawnedNode {
    let node_id = Uuid::parse_str(NODE_ID).expect("NODE_ID is a valid UUID");
    spawn_node_with(node_id, TITLE).await
}

/// Start an ephemeral in-process node with the given identity.
///
/// The node runs in a background `tokio` task and is bound to an
/// OS-assigned port on `127.0.0.1`; its base URL is the bound address.
///
/// # Panics
///
/// Panics if the TCP listener cannot be bound or the node fails to start.
pub async fn spawn_node_with(node_id: Uuid, title: &str) -> SpawnedNode {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("get local addr");
    let base_url = format!("http://{addr}");

    let mut config = NodeConfig::new(node_id, title, base_url.clone());
    config.bind_addr = addr;
    let api_url = config.api_base();
    let router = build_router(Arc::new(config)).expect("built-in routes register cleanly");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("conformance node error");
    });

    SpawnedNode { base_url, api_url }
}
