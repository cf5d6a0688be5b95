//! Structured export of a parsed tree.
//!
//! The export schema is `{name, is_dir, children?}` where `children` is
//! present, and recursively shaped, only for directories. Writing the
//! export is a post-traversal convenience; callers treat a failed write
//! as a non-fatal warning.

use crate::error::{Error, Result};
use crate::node::{NodeId, Tree};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One node of the export schema.
///
/// # Examples
///
/// ```
/// use treeforge_core::{ExportNode, Parser};
///
/// let tree = Parser::new().parse("root\n└── src/").unwrap();
/// let export = ExportNode::from_tree(&tree);
///
/// assert_eq!(export.name, "root");
/// assert!(export.is_dir);
/// assert_eq!(export.children.as_ref().unwrap().len(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportNode {
    /// Entry name (single path segment)
    pub name: String,
    /// Whether the entry is a directory
    pub is_dir: bool,
    /// Child entries; only present for directories
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ExportNode>>,
}

impl ExportNode {
    /// Builds the export view of a whole tree.
    #[must_use]
    pub fn from_tree(tree: &Tree) -> Self {
        Self::from_node(tree, tree.root())
    }

    fn from_node(tree: &Tree, id: NodeId) -> Self {
        let is_dir = tree.is_dir(id);
        Self {
            name: tree.name(id).to_owned(),
            is_dir,
            children: is_dir.then(|| {
                tree.children(id)
                    .iter()
                    .map(|&child| Self::from_node(tree, child))
                    .collect()
            }),
        }
    }
}

/// Serializes the tree and writes it to `path` as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`Error::Serialization`] if encoding fails and [`Error::Io`]
/// if the write fails. Callers report either as a warning; the
/// materialization results stand.
pub fn write_export(tree: &Tree, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let export = ExportNode::from_tree(tree);
    let json =
        serde_json::to_string_pretty(&export).map_err(|source| Error::Serialization { source })?;
    fs::write(path, json).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
