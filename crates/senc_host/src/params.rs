//! Key/path parameter models shared by the controller, the view and the URL codec.

use serde::{Deserialize, Serialize};

/// The decryption key and content path the user wants to view.
///
/// Absent values are represented by empty strings. An empty path is never a recognized content
/// path, so empty params never trigger a load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileParams {
    /// Opaque decryption key. Never parsed.
    pub key: String,
    /// Content path as typed or linked by the user (not normalized).
    pub path: String,
}

impl FileParams {
    /// Creates params from anything string-like.
    pub fn new(key: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            path: path.into(),
        }
    }

    /// Returns whether both fields equal the supplied key and path.
    pub fn matches(&self, key: &str, path: &str) -> bool {
        self.key == key && self.path == path
    }
}

/// A confirmed load, built once a changed and recognized path has been accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    /// Monotonic request number; only the latest request may render.
    pub seq: u64,
    /// Decryption key.
    pub key: String,
    /// Normalized content path.
    pub path: String,
}

/// Options forwarded unmodified to every data-access call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataOptions {
    /// Gateway base URL override.
    pub gateway: Option<String>,
    /// Forces gateway fetches even when a local node is reachable.
    pub force_gateway: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_compares_both_fields() {
        let params = FileParams::new("k", "/ipfs/Qm");
        assert!(params.matches("k", "/ipfs/Qm"));
        assert!(!params.matches("k", "/ipfs/Qx"));
        assert!(!params.matches("other", "/ipfs/Qm"));
    }

    #[test]
    fn data_options_serialize_with_js_field_names() {
        let options = DataOptions {
            gateway: Some("https://gw.example".to_string()),
            force_gateway: Some(true),
        };
        let json = serde_json::to_value(&options).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"gateway": "https://gw.example", "forceGateway": true})
        );
    }
}
