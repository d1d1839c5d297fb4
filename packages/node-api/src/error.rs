//! Error body carried inside the error envelope.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The `error` object of an [`ErrorEnvelope`](crate::ErrorEnvelope).
///
/// ```json
/// { "code": "unknown_route", "message": "Unknown route" }
/// ```
///
/// Clients identify a failure by the HTTP status together with `code`;
/// `message` is informational only and must not be parsed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorInfo {
    /// Machine-readable error code.
    pub code: ErrorCode,

    /// Human-readable description of the problem.
    pub message: String,
}

impl ErrorInfo {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// The closed set of error codes a node may return.
///
/// | `code` | HTTP status | Meaning |
/// |--------|-------------|---------|
/// | `no_route` | 404 | the `route` parameter is absent |
/// | `unknown_route` | 404 | no handler is registered under the requested name |
/// | `internal_error` | 500 | a route handler failed |
///
/// Route-specific codes are added here as new variants and documented next
/// to the route that returns them. The `node` route defines none.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ErrorCode {
    NoRoute,
    UnknownRoute,
    InternalError,
}

impl ErrorCode {
    /// The wire token for this code.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::NoRoute => "no_route",
            ErrorCode::UnknownRoute => "unknown_route",
            ErrorCode::InternalError => "internal_error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
