//! Decrypted tree models returned by data services and rendered by views.

use serde::{Deserialize, Serialize};

/// Entry kind inside a decrypted tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeNodeKind {
    /// Regular file.
    File,
    /// Directory entry.
    Directory,
}

/// One node of a decrypted tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Entry name relative to its parent.
    pub name: String,
    /// File or directory.
    #[serde(rename = "type")]
    pub kind: TreeNodeKind,
    /// Decrypted size in bytes (zero for directories).
    #[serde(default)]
    pub size: u64,
    /// Child entries (always empty for files).
    #[serde(default)]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Creates a file node.
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            kind: TreeNodeKind::File,
            size,
            children: Vec::new(),
        }
    }

    /// Creates a directory node with the supplied children.
    pub fn directory(name: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            name: name.into(),
            kind: TreeNodeKind::Directory,
            size: 0,
            children,
        }
    }

    /// Returns whether this node is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self.kind, TreeNodeKind::Directory)
    }

    /// Counts this node and all of its descendants.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::node_count).sum::<usize>()
    }
}

/// Result of a successful load-and-decrypt call.
///
/// The controller never inspects this value; it only forwards it to the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeResult {
    /// Normalized content path the tree was loaded from.
    pub path: String,
    /// Root of the decrypted tree.
    pub root: TreeNode,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn tree_deserializes_from_js_shape() {
        let raw = r#"{
            "path": "/ipfs/QmRoot",
            "root": {
                "name": "",
                "type": "directory",
                "children": [
                    {"name": "notes.txt", "type": "file", "size": 12},
                    {"name": "img", "type": "directory", "children": []}
                ]
            }
        }"#;

        let tree: TreeResult = serde_json::from_str(raw).expect("tree");
        assert_eq!(
            tree,
            TreeResult {
                path: "/ipfs/QmRoot".to_string(),
                root: TreeNode::directory(
                    "",
                    vec![
                        TreeNode::file("notes.txt", 12),
                        TreeNode::directory("img", vec![]),
                    ],
                ),
            }
        );
        assert_eq!(tree.root.node_count(), 3);
        assert!(tree.root.is_dir());
    }
}
