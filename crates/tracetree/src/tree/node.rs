//! Arena nodes of a trace tree

use std::fmt;

/// Index of a node in a [`DebugTree`](super::DebugTree) arena.
///
/// Ids are handed out in creation order and stay valid for the lifetime
/// of the tree that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of this node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One traced event.
///
/// `children` and `edges` are always the same length: `edges[i]` labels
/// the edge into `children[i]`, empty when no label was staged.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TraceNode {
    pub(crate) label: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) edges: Vec<String>,
}

impl TraceNode {
    pub(crate) fn new(label: String, parent: Option<NodeId>) -> Self {
        Self {
            label,
            parent,
            children: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub(crate) fn add_child(&mut self, child: NodeId, edge: String) {
        self.children.push(child);
        self.edges.push(edge);
    }

    /// The node's label, including everything appended to it.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The enclosing node, `None` for a root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in creation order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Edge labels, aligned with [`children`](Self::children).
    pub fn edges(&self) -> &[String] {
        &self.edges
    }

    /// Label of the edge into the `pos`-th child.
    pub fn edge_to(&self, pos: usize) -> Option<&str> {
        self.edges.get(pos).map(String::as_str)
    }

    /// Iterate `(edge_label, child)` pairs in creation order.
    pub fn branches(&self) -> impl DoubleEndedIterator<Item = (&str, NodeId)> + '_ {
        self.edges
            .iter()
            .map(String::as_str)
            .zip(self.children.iter().copied())
    }

    /// Returns `true` if this node has no parent.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
