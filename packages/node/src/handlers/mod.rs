//! HTTP request handlers for the microstream node.
//!
//! The node exposes a single endpoint at the configured API script path;
//! the `route` query parameter selects the operation. Handlers here only
//! adapt HTTP to the [`Dispatcher`], which owns routing and error mapping.

pub mod api;

use std::sync::Arc;

use crate::dispatch::Dispatcher;

/// Shared application state threaded through all Axum handlers via [`axum::extract::State`].
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
}
