//! The protocol envelope wrapping every response.
//!
//! Success:
//!
//! ```json
//! { "protocol": "microstream-1.0", "node": { ... } }
//! ```
//!
//! Error:
//!
//! ```json
//! {
//!   "protocol": "microstream-1.0",
//!   "status": "error",
//!   "error": { "code": "unknown_route", "message": "Unknown route" }
//! }
//! ```
//!
//! `protocol` is always the first key. The payload key of a success
//! envelope is chosen by the route that produced it.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::error::{ErrorCode, ErrorInfo};
use crate::node::NodeInfo;

/// Value of the `status` field in every error envelope.
pub const ERROR_STATUS: &str = "error";

/// Top-level keys owned by the envelope itself. A route payload key must
/// not be one of these.
pub const RESERVED_KEYS: &[&str] = &["protocol", "status", "error"];

/// A response body as produced by a node.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    protocol: String,
    body: EnvelopeBody,
}

#[derive(Debug, Clone, PartialEq)]
enum EnvelopeBody {
    /// A route payload, emitted under `key`.
    Success { key: String, payload: Value },
    /// A failure, emitted as `"status": "error"` plus the `error` object.
    Error(ErrorInfo),
}

impl Envelope {
    pub fn success(protocol: impl Into<String>, key: impl Into<String>, payload: Value) -> Self {
        Self {
            protocol: protocol.into(),
            body: EnvelopeBody::Success {
                key: key.into(),
                payload,
            },
        }
    }

    pub fn error(protocol: impl Into<String>, error: ErrorInfo) -> Self {
        Self {
            protocol: protocol.into(),
            body: EnvelopeBody::Error(error),
        }
    }

    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// The error code, if this is an error envelope.
    pub fn error_code(&self) -> Option<ErrorCode> {
        match &self.body {
            EnvelopeBody::Error(info) => Some(info.code),
            EnvelopeBody::Success { .. } => None,
        }
    }
}

impl Serialize for Envelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.body {
            EnvelopeBody::Success { key, payload } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("protocol", &self.protocol)?;
                map.serialize_entry(key, payload)?;
                map.end()
            }
            EnvelopeBody::Error(info) => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("protocol", &self.protocol)?;
                map.serialize_entry("status", ERROR_STATUS)?;
                map.serialize_entry("error", info)?;
                map.end()
            }
        }
    }
}

/// Typed client view of a successful `route=node` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodeResponse {
    pub protocol: String,
    pub node: NodeInfo,
}

/// Typed client view of any error response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorEnvelope {
    pub protocol: String,
    /// Always [`ERROR_STATUS`].
    pub status: String,
    pub error: ErrorInfo,
}
