//! Route registry: maps `?route=<name>` values to handlers.
//!
//! A [`RouteTable`] is filled once at startup and is read-only afterwards.
//! Lookups are exact, case-sensitive string matches.
//!
//! # Routes
//!
//! | Name | Payload key | Handler | Route-specific error codes |
//! |------|-------------|---------|----------------------------|
//! | `node` | `node` | [`node::NodeRoute`] | none |

pub mod node;

use std::collections::HashMap;
use std::sync::Arc;

use microstream_node_api::RESERVED_KEYS;
use serde_json::Value;

use crate::{
    config::NodeConfig,
    error::{HandlerError, RegistryError},
};

/// What a handler gets to see of the request.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    pub config: &'a NodeConfig,
    /// The route name that selected this handler.
    pub route: &'a str,
}

/// A named operation exposed through the `route` query parameter.
///
/// Handlers are synchronous and must not block; they build a JSON payload
/// from the request context. A returned [`HandlerError`] is converted into
/// an error envelope by the dispatcher.
pub trait RouteHandler: Send + Sync {
    /// Key under which the payload is placed in the success envelope.
    fn payload_key(&self) -> &'static str;

    fn handle(&self, ctx: RequestContext<'_>) -> Result<Value, HandlerError>;
}

/// Route name → handler.
#[derive(Default, Clone)]
pub struct RouteTable {
    routes: HashMap<String, Arc<dyn RouteHandler>>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The table with every built-in route registered.
    pub fn with_defaults() -> Result<Self, RegistryError> {
        let mut table = Self::new();
        table.register("node", Arc::new(node::NodeRoute))?;
        Ok(table)
    }

    /// Add `handler` under `name`. An existing registration is never
    /// replaced; registering the same name twice is an error, as is a
    /// payload key that would shadow an envelope key.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        handler: Arc<dyn RouteHandler>,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if self.routes.contains_key(&name) {
            return Err(RegistryError::DuplicateRoute(name));
        }
        let key = handler.payload_key();
        if RESERVED_KEYS.contains(&key) {
            return Err(RegistryError::ReservedPayloadKey { route: name, key });
        }
        tracing::debug!(route = %name, "registered route");
        self.routes.insert(name, handler);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn RouteHandler>> {
        self.routes.get(name)
    }

    /// Registered route names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.routes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl std::fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteTable")
            .field("routes", &self.names())
            .finish()
    }
}
