//! Error types for startup and request handling.
//!
//! Startup errors ([`ConfigError`], [`RegistryError`]) abort the process.
//! [`HandlerError`] is what a route handler returns; the dispatcher turns it
//! into an error envelope with the matching HTTP status and code.

use axum::http::StatusCode;
use microstream_node_api::ErrorCode;

/// A configuration value is missing or malformed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be set")]
    Missing { var: &'static str },

    #[error("MICROSTREAM_BIND must be a valid socket address (e.g. 0.0.0.0:3000), got {value:?}")]
    InvalidBind { value: String },

    #[error("MICROSTREAM_NODE_ID must be a UUID, got {value:?}: {source}")]
    InvalidNodeId {
        value: String,
        #[source]
        source: uuid::Error,
    },

    #[error("MICROSTREAM_API_SCRIPT must start with '/', got {value:?}")]
    InvalidApiScript { value: String },
}

/// The route table was assembled incorrectly.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A second handler was registered under an existing name.
    #[error("route {0:?} is already registered")]
    DuplicateRoute(String),

    /// The handler's payload key collides with an envelope key.
    #[error("route {route:?} uses reserved payload key {key:?}")]
    ReservedPayloadKey { route: String, key: &'static str },
}

/// A route handler failed to produce its payload.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    /// The payload could not be encoded as JSON.
    #[error("failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),

    /// Any other server-side failure. The detail is logged, not sent.
    #[error("{0}")]
    Internal(String),

    /// A failure the route reports under its own documented code.
    #[error("{code}: {message}")]
    Route { code: ErrorCode, message: String },
}

impl HandlerError {
    /// HTTP status and wire code reported to the client.
    pub fn status_and_code(&self) -> (StatusCode, ErrorCode) {
        match self {
            HandlerError::Encode(_) | HandlerError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::InternalError)
            }
            HandlerError::Route { code, .. } => (StatusCode::INTERNAL_SERVER_ERROR, *code),
        }
    }

    /// Message placed in the error envelope.
    pub fn client_message(&self) -> &str {
        match self {
            HandlerError::Encode(_) | HandlerError::Internal(_) => "Internal error",
            HandlerError::Route { message, .. } => message,
        }
    }
}
