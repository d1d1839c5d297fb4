//! Assembles the Axum [`Router`] for the node.

use std::sync::Arc;

use axum::{routing::any, Router};
use tower_http::trace::TraceLayer;

use crate::{
    config::NodeConfig,
    dispatch::Dispatcher,
    error::RegistryError,
    handlers::{api, AppState},
    routes::RouteTable,
};

/// Build the application router with every built-in route registered.
pub fn build_router(config: Arc<NodeConfig>) -> Result<Router, RegistryError> {
    Ok(build_router_with(config, RouteTable::with_defaults()?))
}

/// Build the application router over a caller-assembled route table.
///
/// The API endpoint is mounted at `config.api_script` and answers every
/// HTTP method with the same envelope.
pub fn build_router_with(config: Arc<NodeConfig>, table: RouteTable) -> Router {
    let path = config.api_script.clone();
    let state = AppState {
        dispatcher: Arc::new(Dispatcher::new(config, table)),
    };

    Router::new()
        .route(&path, any(api::dispatch))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
