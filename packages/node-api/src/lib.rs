//! Request and response types for the microstream node API.
//!
//! This crate encodes the wire contract of a microstream node as Rust types.
//! Every response, success or error, is wrapped in a protocol [`Envelope`]
//! whose `protocol` field names the contract version the node implements.
//!
//! # Routes covered
//!
//! | Request | Success body | Payload type |
//! |---------|--------------|--------------|
//! | `GET ?route=node` | [`NodeResponse`] | [`NodeInfo`] |
//!
//! Failures are returned as an [`ErrorEnvelope`]; see [`ErrorCode`] for the
//! closed set of codes.

pub mod envelope;
pub mod error;
pub mod node;
pub mod protocol;

pub use envelope::{Envelope, ErrorEnvelope, NodeResponse, RESERVED_KEYS};
pub use error::{ErrorCode, ErrorInfo};
pub use node::{NodeInfo, SoftwareInfo};
pub use protocol::{ProtocolVersion, ProtocolVersionError, PROTOCOL_VERSION};
