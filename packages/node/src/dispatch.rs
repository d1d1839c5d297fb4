//! Resolves a `route` parameter to a handler and wraps the outcome in the
//! protocol envelope.
//!
//! Every failure, client-side or server-side, is converted to an
//! [`ErrorInfo`] here; nothing else reaches the client.

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use microstream_node_api::{Envelope, ErrorCode, ErrorInfo};

use crate::{
    config::NodeConfig,
    routes::{RequestContext, RouteTable},
};

/// Content type of every response body.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Routes requests through a read-only [`RouteTable`].
#[derive(Debug)]
pub struct Dispatcher {
    config: Arc<NodeConfig>,
    protocol: String,
    table: RouteTable,
}

/// HTTP status plus the envelope to send.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: StatusCode,
    pub envelope: Envelope,
}

impl Dispatcher {
    pub fn new(config: Arc<NodeConfig>, table: RouteTable) -> Self {
        let protocol = config.protocol.to_string();
        Self {
            config,
            protocol,
            table,
        }
    }

    pub fn routes(&self) -> &RouteTable {
        &self.table
    }

    /// Resolve `route` and produce the reply.
    ///
    /// `None` means the parameter was absent. An empty string is a route
    /// name like any other and normally resolves to `unknown_route`.
    pub fn handle(&self, route: Option<&str>) -> Reply {
        let Some(name) = route else {
            tracing::debug!("request without route parameter");
            return self.error(
                StatusCode::NOT_FOUND,
                ErrorCode::NoRoute,
                "Route parameter is required",
            );
        };

        let Some(handler) = self.table.get(name) else {
            tracing::debug!(route = %name, "unknown route");
            return self.error(StatusCode::NOT_FOUND, ErrorCode::UnknownRoute, "Unknown route");
        };

        let ctx = RequestContext {
            config: &self.config,
            route: name,
        };
        match handler.handle(ctx) {
            Ok(payload) => {
                tracing::debug!(route = %name, "route handled");
                Reply {
                    status: StatusCode::OK,
                    envelope: Envelope::success(&self.protocol, handler.payload_key(), payload),
                }
            }
            Err(e) => {
                let (status, code) = e.status_and_code();
                tracing::warn!(route = %name, %code, error = %e, "route handler failed");
                self.error(status, code, e.client_message())
            }
        }
    }

    fn error(&self, status: StatusCode, code: ErrorCode, message: impl Into<String>) -> Reply {
        Reply {
            status,
            envelope: Envelope::error(&self.protocol, ErrorInfo::new(code, message)),
        }
    }
}

impl Reply {
    /// The envelope encoded as compact JSON.
    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.envelope)
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        let (status, body) = match self.to_json() {
            Ok(body) => (self.status, body),
            Err(e) => {
                tracing::error!(error = %e, "failed to encode response envelope");
                let fallback = Envelope::error(
                    self.envelope.protocol(),
                    ErrorInfo::new(ErrorCode::InternalError, "Internal error"),
                );
                // Only plain strings remain, so this encoding cannot fail.
                let body = serde_json::to_vec(&fallback).unwrap_or_default();
                (StatusCode::INTERNAL_SERVER_ERROR, body)
            }
        };

        let mut response = (status, body).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(JSON_CONTENT_TYPE),
        );
        response
    }
}
