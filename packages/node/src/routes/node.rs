//! Node discovery route — `GET ?route=node`.

use serde_json::Value;

use super::{RequestContext, RouteHandler};
use crate::error::HandlerError;

/// Returns this node's discovery document. Peers and clients use it to learn
/// the node's stable identifier, title, API location and software version.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeRoute;

impl RouteHandler for NodeRoute {
    fn payload_key(&self) -> &'static str {
        "node"
    }

    fn handle(&self, ctx: RequestContext<'_>) -> Result<Value, HandlerError> {
        Ok(serde_json::to_value(ctx.config.descriptor())?)
    }
}
