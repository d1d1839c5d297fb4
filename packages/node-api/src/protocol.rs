//! Protocol version strings of the form `<software>-<major>.<minor>`.
//!
//! Compatibility policy: a peer speaking the same software family and major
//! version is compatible regardless of minor version; any other major
//! version is not. Nodes advertise their version in every envelope but do
//! not enforce the policy themselves; it is provided for clients.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The wire-contract version implemented by this crate.
pub const PROTOCOL_VERSION: &str = "microstream-1.0";

/// A parsed protocol version such as `microstream-1.0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProtocolVersion {
    software: String,
    major: u32,
    minor: u32,
}

/// Why a protocol version string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolVersionError {
    /// No `-` separates the software name from the version number.
    #[error("expected <software>-<major>.<minor>")]
    MissingSeparator,
    /// The software name before the `-` is empty.
    #[error("software name is empty")]
    EmptySoftware,
    /// The version after the `-` is not `<major>.<minor>` with numeric parts.
    #[error("invalid version number {0:?}, expected <major>.<minor>")]
    InvalidNumber(String),
}

impl ProtocolVersion {
    pub fn new(software: impl Into<String>, major: u32, minor: u32) -> Self {
        Self {
            software: software.into(),
            major,
            minor,
        }
    }

    /// The version this crate implements, i.e. [`PROTOCOL_VERSION`].
    pub fn current() -> Self {
        Self::new("microstream", 1, 0)
    }

    pub fn software(&self) -> &str {
        &self.software
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    /// Whether a client implementing `self` can talk to a node advertising
    /// `other`. Minor versions never break compatibility.
    pub fn is_compatible_with(&self, other: &ProtocolVersion) -> bool {
        self.software == other.software && self.major == other.major
    }
}

impl Default for ProtocolVersion {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}.{}", self.software, self.major, self.minor)
    }
}

impl FromStr for ProtocolVersion {
    type Err = ProtocolVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Software names may themselves contain dashes; the version is
        // whatever follows the last one.
        let (software, version) = s
            .rsplit_once('-')
            .ok_or(ProtocolVersionError::MissingSeparator)?;
        if software.is_empty() {
            return Err(ProtocolVersionError::EmptySoftware);
        }
        let invalid = || ProtocolVersionError::InvalidNumber(version.to_string());
        let (major, minor) = version.split_once('.').ok_or_else(invalid)?;
        let major = parse_component(major).ok_or_else(invalid)?;
        let minor = parse_component(minor).ok_or_else(invalid)?;
        Ok(Self::new(software, major, minor))
    }
}

/// A version component: ASCII digits only, no sign, no leading zero, so
/// that parsing and display round-trip exactly.
fn parse_component(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if s.len() > 1 && s.starts_with('0') {
        return None;
    }
    s.parse().ok()
}

impl TryFrom<String> for ProtocolVersion {
    type Error = ProtocolVersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ProtocolVersion> for String {
    fn from(value: ProtocolVersion) -> Self {
        value.to_string()
    }
}
