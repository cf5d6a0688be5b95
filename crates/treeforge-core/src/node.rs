//! Arena-backed node model for parsed hierarchies.
//!
//! A [`Tree`] owns every node in a flat arena; [`NodeId`] values are
//! copyable indices into it. Ownership flows one way, root to leaves,
//! through each directory's ordered child list, while each node keeps a
//! non-owning parent index used only for path reconstruction. The tree is
//! built once by the parser and is read-only afterwards.
//!
//! # Examples
//!
//! ```
//! use treeforge_core::Tree;
//!
//! let mut tree = Tree::new("root");
//! let src = tree.attach(tree.root(), "src", true);
//! let main = tree.attach(src, "main.rs", false);
//!
//! assert!(tree.is_dir(src));
//! assert!(!tree.is_dir(main));
//! assert_eq!(tree.relative_path(main), "src/main.rs");
//! ```

use std::path::PathBuf;
use tracing::debug;

/// Handle to a node inside a [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Tagged node kind. Only directories carry children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Directory entry with an ordered, first-seen child list.
    Directory {
        /// Children in insertion order
        children: Vec<NodeId>,
    },
    /// File entry; always a leaf.
    File,
}

#[derive(Debug, Clone)]
struct Node {
    name: String,
    parent: Option<NodeId>,
    kind: NodeKind,
}

/// A rooted directory/file hierarchy.
///
/// Exactly one node (the root) has no parent; every other node is
/// reachable from exactly one parent. Cycles are impossible by
/// construction: nodes are only ever attached once, top-down.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
    root: NodeId,
    duplicates_ignored: usize,
}

const NO_CHILDREN: &[NodeId] = &[];

impl Tree {
    /// Creates a tree holding a single root directory.
    #[must_use]
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            nodes: vec![Node {
                name: root_name.into(),
                parent: None,
                kind: NodeKind::Directory {
                    children: Vec::new(),
                },
            }],
            root: NodeId(0),
            duplicates_ignored: 0,
        }
    }

    /// Returns the root node.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the node's name (a single path segment).
    #[must_use]
    pub fn name(&self, id: NodeId) -> &str {
        &self.nodes[id.0].name
    }

    /// Returns `true` if the node is a directory.
    #[must_use]
    pub fn is_dir(&self, id: NodeId) -> bool {
        matches!(self.nodes[id.0].kind, NodeKind::Directory { .. })
    }

    /// Returns the node's children in insertion order (empty for files).
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match &self.nodes[id.0].kind {
            NodeKind::Directory { children } => children,
            NodeKind::File => NO_CHILDREN,
        }
    }

    /// Returns the node's parent, or `None` for the root.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Total number of nodes, root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of duplicate siblings discarded during construction.
    #[must_use]
    pub const fn duplicates_ignored(&self) -> usize {
        self.duplicates_ignored
    }

    /// Attaches a child under `parent`, enforcing sibling-name uniqueness.
    ///
    /// If `parent` already holds a child with this name, the new entry is
    /// silently discarded (logged at debug level, counted in
    /// [`Tree::duplicates_ignored`]) and the id of the surviving first
    /// occurrence is returned, whatever its kind. Otherwise the node is
    /// created and its id returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeforge_core::Tree;
    ///
    /// let mut tree = Tree::new("root");
    /// let first = tree.attach(tree.root(), "src", true);
    /// let second = tree.attach(tree.root(), "src", true);
    ///
    /// assert_eq!(first, second);
    /// assert_eq!(tree.duplicates_ignored(), 1);
    /// ```
    pub fn attach(&mut self, parent: NodeId, name: &str, is_dir: bool) -> NodeId {
        debug_assert!(self.is_dir(parent), "attach target must be a directory");
        if !self.is_dir(parent) {
            return parent;
        }

        let duplicate = self
            .children(parent)
            .iter()
            .copied()
            .find(|&c| self.nodes[c.0].name == name);
        if let Some(existing) = duplicate {
            debug!(
                name,
                parent = %self.nodes[parent.0].name,
                "ignoring duplicate sibling"
            );
            self.duplicates_ignored += 1;
            return existing;
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            name: name.to_owned(),
            parent: Some(parent),
            kind: if is_dir {
                NodeKind::Directory {
                    children: Vec::new(),
                }
            } else {
                NodeKind::File
            },
        });
        if let NodeKind::Directory { children } = &mut self.nodes[parent.0].kind {
            children.push(id);
        }
        id
    }

    /// Reconstructs the node's filesystem path.
    ///
    /// The root's path is its own name; every other node's path is its
    /// parent's path joined with its name.
    #[must_use]
    pub fn path(&self, id: NodeId) -> PathBuf {
        let mut names = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let node = &self.nodes[current.0];
            names.push(node.name.as_str());
            cursor = node.parent;
        }
        names.iter().rev().collect()
    }

    /// Returns the `/`-joined name sequence below the root.
    ///
    /// The root itself maps to an empty string. This is the form exclusion
    /// patterns are matched against.
    #[must_use]
    pub fn relative_path(&self, id: NodeId) -> String {
        let mut names = Vec::new();
        let mut cursor = id;
        while let Some(parent) = self.nodes[cursor.0].parent {
            names.push(self.nodes[cursor.0].name.as_str());
            cursor = parent;
        }
        names.reverse();
        names.join("/")
    }
}
