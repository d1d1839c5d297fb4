//! Node configuration, populated from environment variables.

use std::net::SocketAddr;

use microstream_node_api::{NodeInfo, ProtocolVersion, SoftwareInfo};
use uuid::Uuid;

use crate::error::ConfigError;

/// Software name advertised in the discovery document.
pub const SOFTWARE_NAME: &str = "microstream";

/// Software version advertised in the discovery document.
pub const SOFTWARE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default path of the API script, appended to the base URL.
pub const DEFAULT_API_SCRIPT: &str = "/api.php";

const DEFAULT_BIND: &str = "0.0.0.0:3000";
const DEFAULT_TITLE: &str = "Untitled Stream";

/// Immutable identity and version facts for a microstream node.
///
/// Built once at startup and shared read-only with the dispatcher and every
/// route handler.
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | `MICROSTREAM_BIND` | `0.0.0.0:3000` | TCP socket address to listen on |
/// | `MICROSTREAM_NODE_ID` | (required) | UUID identifying this node |
/// | `MICROSTREAM_TITLE` | `Untitled Stream` | Human-readable stream title |
/// | `MICROSTREAM_BASE_URL` | derived from MICROSTREAM_BIND | Public base URL, no trailing slash |
/// | `MICROSTREAM_API_SCRIPT` | `/api.php` | Path of the API endpoint |
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Stable UUID for this node.
    pub node_id: Uuid,

    /// Title shown in the discovery document.
    pub title: String,

    /// Public base URL of the node. Must not end with `/`; see [`NodeConfig::api_base`].
    pub base_url: String,

    /// Path of the API endpoint, starting with `/`.
    pub api_script: String,

    pub software_name: String,
    pub software_version: String,

    /// Wire-contract version stamped on every response envelope.
    pub protocol: ProtocolVersion,

    /// Socket address the server binds to.
    pub bind_addr: SocketAddr,
}

impl NodeConfig {
    /// A configuration with this build's software identity and protocol
    /// version. `base_url` is taken verbatim.
    pub fn new(node_id: Uuid, title: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            node_id,
            title: title.into(),
            base_url: base_url.into(),
            api_script: DEFAULT_API_SCRIPT.into(),
            software_name: SOFTWARE_NAME.into(),
            software_version: SOFTWARE_VERSION.into(),
            protocol: ProtocolVersion::current(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
        }
    }

    /// Populate config from environment variables, applying defaults where absent.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Populate config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_raw = lookup("MICROSTREAM_BIND").unwrap_or_else(|| DEFAULT_BIND.into());
        let bind_addr: SocketAddr = bind_raw.parse().map_err(|_| ConfigError::InvalidBind {
            value: bind_raw.clone(),
        })?;

        let node_id_raw = lookup("MICROSTREAM_NODE_ID").ok_or(ConfigError::Missing {
            var: "MICROSTREAM_NODE_ID",
        })?;
        let node_id = Uuid::parse_str(&node_id_raw).map_err(|source| {
            ConfigError::InvalidNodeId {
                value: node_id_raw.clone(),
                source,
            }
        })?;

        let base_url =
            lookup("MICROSTREAM_BASE_URL").unwrap_or_else(|| format!("http://{bind_addr}"));

        let api_script =
            lookup("MICROSTREAM_API_SCRIPT").unwrap_or_else(|| DEFAULT_API_SCRIPT.into());
        if !api_script.starts_with('/') {
            return Err(ConfigError::InvalidApiScript { value: api_script });
        }

        Ok(Self {
            title: lookup("MICROSTREAM_TITLE").unwrap_or_else(|| DEFAULT_TITLE.into()),
            api_script,
            bind_addr,
            ..Self::new(node_id, String::new(), base_url)
        })
    }

    /// Full URL of the API endpoint: `base_url` followed by `api_script`.
    ///
    /// No normalization is applied. A `base_url` ending in `/` yields a
    /// double slash; [`NodeConfig::has_trailing_slash`] lets callers warn
    /// about it.
    pub fn api_base(&self) -> String {
        format!("{}{}", self.base_url, self.api_script)
    }

    pub fn has_trailing_slash(&self) -> bool {
        self.base_url.ends_with('/')
    }

    /// The discovery document for this node.
    pub fn descriptor(&self) -> NodeInfo {
        NodeInfo {
            node_id: self.node_id.hyphenated().to_string(),
            title: self.title.clone(),
            url: self.base_url.clone(),
            api_base: self.api_base(),
            software: SoftwareInfo::new(&self.software_name, &self.software_version),
        }
    }
}
