//! Call-tree builder driven by push/pop

mod guard;
mod node;

pub use guard::NodeGuard;
pub use node::{NodeId, TraceNode};

use std::fmt;
use std::ops::Index;

use crate::error::{Result, TraceError};

/// A hierarchical debug trace.
///
/// Mirrors the structure of a recursive computation: wrap each recursive
/// call in [`push`](Self::push) / [`pop`](Self::pop) (or use
/// [`leaf`](Self::leaf) for base cases) and the tree records the call
/// tree. Several independent traces may coexist as separate roots.
///
/// Nodes live in a flat arena and refer to each other by [`NodeId`]; the
/// cursor is the id of the innermost open node.
///
/// # Example
///
/// ```
/// use tracetree::DebugTree;
///
/// let mut tree = DebugTree::new();
///
/// tree.push("sort [3, 1, 2]");
/// tree.set_edge("left");
/// tree.leaf("sort [3]");
/// tree.set_edge("right");
/// tree.leaf("sort [1, 2]");
/// tree.append(" = [1, 2, 3]");
/// tree.pop();
///
/// assert!(tree.is_balanced());
/// let root = &tree[tree.roots()[0]];
/// assert_eq!(root.label(), "sort [3, 1, 2] = [1, 2, 3]");
/// assert_eq!(root.edges(), ["left", "right"]);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DebugTree {
    /// All nodes ever pushed, indexed by `NodeId`
    nodes: Vec<TraceNode>,

    /// Top-level nodes in creation order
    roots: Vec<NodeId>,

    /// Innermost open node
    cursor: Option<NodeId>,

    /// Edge label staged for the next push
    next_edge: String,
}

impl DebugTree {
    /// Create an empty tree with nothing open.
    pub fn new() -> Self {
        Self::default()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Building
    // ═══════════════════════════════════════════════════════════════════

    /// Open a new node under the cursor, or as a new root if nothing is
    /// open, and make it the cursor.
    ///
    /// A label staged with [`set_edge`](Self::set_edge) is attached to
    /// the edge into the new node and cleared.
    pub fn push(&mut self, label: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let edge = std::mem::take(&mut self.next_edge);
        self.nodes.push(TraceNode::new(label.into(), self.cursor));

        match self.cursor {
            Some(parent) => self.nodes[parent.0].add_child(id, edge),
            None => {
                if !edge.is_empty() {
                    log::trace!("root {} has no incoming edge, dropping label {:?}", id, edge);
                }
                self.roots.push(id);
            }
        }

        self.cursor = Some(id);
        id
    }

    /// [`push`](Self::push) with a label built from `format_args!`.
    pub fn push_fmt(&mut self, args: fmt::Arguments<'_>) -> NodeId {
        self.push(fmt::format(args))
    }

    /// Extend the label of the open node.
    ///
    /// # Panics
    ///
    /// Panics if no node is open.
    pub fn append(&mut self, text: &str) {
        if let Err(err) = self.try_append(text) {
            panic!("{}", err);
        }
    }

    /// [`append`](Self::append) with text built from `format_args!`.
    ///
    /// # Panics
    ///
    /// Panics if no node is open.
    pub fn append_fmt(&mut self, args: fmt::Arguments<'_>) {
        self.append(&fmt::format(args));
    }

    /// Extend the label of the open node, or report the imbalance.
    pub fn try_append(&mut self, text: &str) -> Result<()> {
        let cursor = self.cursor.ok_or(TraceError::Unbalanced { op: "append" })?;
        self.nodes[cursor.0].label.push_str(text);
        Ok(())
    }

    /// Close the open node, moving the cursor to its parent.
    ///
    /// Any staged edge label is discarded, even if no child consumed it.
    ///
    /// # Panics
    ///
    /// Panics if no node is open: pushes and pops must balance.
    pub fn pop(&mut self) -> NodeId {
        match self.try_pop() {
            Ok(id) => id,
            Err(err) => panic!("{}", err),
        }
    }

    /// Close the open node, or report the imbalance.
    ///
    /// Returns the id of the node that was closed.
    pub fn try_pop(&mut self) -> Result<NodeId> {
        let closed = self.cursor.ok_or(TraceError::Unbalanced { op: "pop" })?;
        self.cursor = self.nodes[closed.0].parent;
        if !self.next_edge.is_empty() {
            log::trace!("pop of {} discards unused edge label {:?}", closed, self.next_edge);
            self.next_edge.clear();
        }
        Ok(closed)
    }

    /// Record a childless node under the cursor without opening it.
    pub fn leaf(&mut self, label: impl Into<String>) -> NodeId {
        let id = self.push(label);
        self.pop();
        id
    }

    /// [`leaf`](Self::leaf) with a label built from `format_args!`.
    pub fn leaf_fmt(&mut self, args: fmt::Arguments<'_>) -> NodeId {
        self.leaf(fmt::format(args))
    }

    /// Stage a label for the edge into the next pushed node.
    ///
    /// A later call before that push replaces the staged label.
    pub fn set_edge(&mut self, label: impl Into<String>) {
        self.next_edge = label.into();
    }

    // ═══════════════════════════════════════════════════════════════════
    // Inspection
    // ═══════════════════════════════════════════════════════════════════

    /// Top-level nodes in creation order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Look up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&TraceNode> {
        self.nodes.get(id.0)
    }

    /// The innermost open node, if any.
    pub fn cursor(&self) -> Option<NodeId> {
        self.cursor
    }

    /// Number of nodes currently open (length of the cursor chain).
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.cursor;
        while let Some(id) = current {
            depth += 1;
            current = self.nodes[id.0].parent;
        }
        depth
    }

    /// Returns `true` if every push has been matched by a pop.
    pub fn is_balanced(&self) -> bool {
        self.cursor.is_none()
    }

    /// The edge label waiting for the next push, if one is staged.
    pub fn pending_edge(&self) -> Option<&str> {
        if self.next_edge.is_empty() {
            None
        } else {
            Some(&self.next_edge)
        }
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if nothing has been pushed yet.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate all nodes with their ids, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &TraceNode)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index), node))
    }
}

impl Index<NodeId> for DebugTree {
    type Output = TraceNode;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}
