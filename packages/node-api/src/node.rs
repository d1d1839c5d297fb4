//! Node discovery types — `GET ?route=node`.

use serde::{Deserialize, Serialize};

/// The `node` payload of a discovery response.
///
/// Describes this node's identity and where its API lives. Peers and clients
/// use this document to bootstrap interaction.
///
/// # Example
///
/// ```json
/// {
///   "node_id": "11111111-1111-1111-1111-111111111111",
///   "title": "Jim's Stream",
///   "url": "https://example.com",
///   "api_base": "https://example.com/api.php",
///   "software": { "name": "microstream", "version": "0.1.0" }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodeInfo {
    /// Stable UUID identifying this node in the federation.
    pub node_id: String,

    /// Human-readable title of the stream.
    pub title: String,

    /// Public base URL of the node, without a trailing slash.
    pub url: String,

    /// Full URL of the API script (`url` followed by the script path).
    pub api_base: String,

    /// Name and version of the software running the node.
    pub software: SoftwareInfo,
}

/// Software identification advertised in [`NodeInfo::software`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SoftwareInfo {
    pub name: String,
    pub version: String,
}

impl SoftwareInfo {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_info_field_names_match_wire_contract() {
        let info = NodeInfo {
            node_id: "11111111-1111-1111-1111-111111111111".into(),
            title: "Jim's Stream".into(),
            url: "https://example.com".into(),
            api_base: "https://example.com/api.php".into(),
            software: SoftwareInfo::new("microstream", "0.1.0"),
        };
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["node_id"], "11111111-1111-1111-1111-111111111111");
        assert_eq!(value["title"], "Jim's Stream");
        assert_eq!(value["url"], "https://example.com");
        assert_eq!(value["api_base"], "https://example.com/api.php");
        assert_eq!(value["software"]["name"], "microstream");
        assert_eq!(value["software"]["version"], "0.1.0");
        assert_eq!(value.as_object().unwrap().len(), 5);
    }

    #[test]
    fn parses_document_from_a_peer() {
        let json = r#"{
            "node_id": "22222222-2222-2222-2222-222222222222",
            "title": "Other Stream",
            "url": "https://other.example",
            "api_base": "https://other.example/api.php",
            "software": { "name": "microstream", "version": "0.2.0" }
        }"#;
        let info: NodeInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.software.version, "0.2.0");
        assert_eq!(info.api_base, "https://other.example/api.php");
    }
}
