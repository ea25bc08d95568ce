//! Rendering a trace as a Graphviz digraph or an indented outline
//!
//! The DOT output has one statement per line, node declarations first and
//! edge statements after them:
//!
//! ```text
//! digraph debug {
//! n0 [label="A"];
//! n1 [label="B"];
//! n0 -> n1 [label="go"];
//! }
//! ```
//!
//! Both groups follow the same depth-first order: roots in creation order,
//! each node before its children, children in creation order. Edges with
//! an empty label carry no attribute list. A graph name or node prefix that
//! is not a bare DOT identifier is written as a quoted string.

use std::borrow::Cow;
use std::fmt;
use std::io::Write;

use crate::config::RenderConfig;
use crate::error::Result;
use crate::indent::IndentWriter;
use crate::tree::{DebugTree, NodeId};

/// DOT keywords, which cannot be used as bare identifiers.
const DOT_KEYWORDS: &[&str] = &["node", "edge", "graph", "digraph", "subgraph", "strict"];

/// One step of a depth-first walk over the forest.
#[derive(Debug, Clone, Copy)]
struct Visit<'a> {
    parent: Option<NodeId>,
    edge: &'a str,
    id: NodeId,
    depth: usize,
}

/// Pre-order walk; explicit stack so deep traces can't overflow.
struct Preorder<'a> {
    tree: &'a DebugTree,
    stack: Vec<Visit<'a>>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let visit = self.stack.pop()?;
        let tree = self.tree;
        self.stack
            .extend(tree[visit.id].branches().rev().map(|(edge, id)| Visit {
                parent: Some(visit.id),
                edge,
                id,
                depth: visit.depth + 1,
            }));
        Some(visit)
    }
}

/// A [`DebugTree`] paired with a [`RenderConfig`], displayable as DOT.
///
/// Obtained from [`DebugTree::dot`] or [`DebugTree::dot_with`].
pub struct DotGraph<'a> {
    tree: &'a DebugTree,
    config: Cow<'a, RenderConfig>,
    quote_ids: bool,
}

/// Node identifier as written in the graph.
struct DotId<'a> {
    prefix: &'a str,
    id: NodeId,
    quoted: bool,
}

impl fmt::Display for DotId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.quoted {
            write!(f, "\"{}{}\"", escape_label(self.prefix), self.id.index())
        } else {
            write!(f, "{}{}", self.prefix, self.id.index())
        }
    }
}

impl<'a> DotGraph<'a> {
    fn new(tree: &'a DebugTree, config: Cow<'a, RenderConfig>) -> Self {
        let prefix = &config.node_prefix;
        let quote_ids = !prefix.is_empty() && !is_bare_id(prefix);
        Self {
            tree,
            config,
            quote_ids,
        }
    }

    fn dot_id(&self, id: NodeId) -> DotId<'_> {
        DotId {
            prefix: &self.config.node_prefix,
            id,
            quoted: self.quote_ids,
        }
    }

    fn write_node(&self, f: &mut fmt::Formatter<'_>, id: NodeId) -> fmt::Result {
        writeln!(
            f,
            "{}{} [label=\"{}\"];",
            self.config.statement_indent,
            self.dot_id(id),
            escape_label(self.tree[id].label())
        )
    }

    fn write_edge(
        &self,
        f: &mut fmt::Formatter<'_>,
        from: NodeId,
        to: NodeId,
        label: &str,
    ) -> fmt::Result {
        write!(
            f,
            "{}{} -> {}",
            self.config.statement_indent,
            self.dot_id(from),
            self.dot_id(to)
        )?;
        if !label.is_empty() {
            write!(f, " [label=\"{}\"]", escape_label(label))?;
        }
        writeln!(f, ";")
    }
}

impl fmt::Display for DotGraph<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = &self.config.graph_name;
        if name.is_empty() {
            writeln!(f, "digraph {{")?;
        } else {
            writeln!(f, "digraph {} {{", graph_id(name))?;
        }

        for visit in self.tree.preorder() {
            self.write_node(f, visit.id)?;
        }
        for visit in self.tree.preorder() {
            if let Some(parent) = visit.parent {
                self.write_edge(f, parent, visit.id, visit.edge)?;
            }
        }

        writeln!(f, "}}")
    }
}

/// Returns `true` if `name` can appear unquoted as a DOT identifier.
fn is_bare_id(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// A graph name as written after `digraph`, quoted unless bare.
fn graph_id(name: &str) -> Cow<'_, str> {
    let keyword = DOT_KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(name));
    if is_bare_id(name) && !keyword {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("\"{}\"", escape_label(name)))
    }
}

/// Escape a label for use inside a double-quoted DOT string.
///
/// Backslashes and double quotes are backslash-escaped; newlines become
/// `\n`, which layout tools render as a centered line break.
pub fn escape_label(label: &str) -> Cow<'_, str> {
    if !label.contains(['\\', '"', '\n']) {
        return Cow::Borrowed(label);
    }

    let mut escaped = String::with_capacity(label.len() + 2);
    for c in label.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

impl DebugTree {
    fn preorder(&self) -> Preorder<'_> {
        let stack = self
            .roots()
            .iter()
            .rev()
            .map(|&id| Visit {
                parent: None,
                edge: "",
                id,
                depth: 0,
            })
            .collect();
        Preorder { tree: self, stack }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Graphviz
    // ═══════════════════════════════════════════════════════════════════

    /// Displayable DOT view of this tree with default settings.
    pub fn dot(&self) -> DotGraph<'_> {
        DotGraph::new(self, Cow::Owned(RenderConfig::default()))
    }

    /// Displayable DOT view of this tree with custom settings.
    pub fn dot_with<'a>(&'a self, config: &'a RenderConfig) -> DotGraph<'a> {
        DotGraph::new(self, Cow::Borrowed(config))
    }

    /// Write the tree to `sink` as a Graphviz digraph.
    ///
    /// Open nodes are rendered like any other; the tree need not be
    /// balanced. Errors from `sink` are returned as they occur and
    /// whatever was written before stays written.
    pub fn render_dot<W: Write>(&self, sink: W) -> Result<()> {
        self.render_dot_with(sink, &RenderConfig::default())
    }

    /// [`render_dot`](Self::render_dot) with custom settings.
    pub fn render_dot_with<W: Write>(&self, mut sink: W, config: &RenderConfig) -> Result<()> {
        log::debug!(
            "rendering {} nodes from {} roots as digraph {:?} ({} still open)",
            self.len(),
            self.roots().len(),
            config.graph_name,
            self.depth()
        );
        write!(sink, "{}", self.dot_with(config))?;
        Ok(())
    }

    /// Render the tree as a DOT string with default settings.
    pub fn to_dot(&self) -> String {
        self.dot().to_string()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Text outline
    // ═══════════════════════════════════════════════════════════════════

    /// Write the tree to `sink` as an indented text outline.
    ///
    /// One entry per node, depth-first, each nested level indented by
    /// two more spaces. An entry reads `edge: label` when the edge into the
    /// node is labeled. Multi-line labels stay indented on every line.
    ///
    /// ```
    /// use tracetree::DebugTree;
    ///
    /// let mut tree = DebugTree::new();
    /// tree.push("solve");
    /// tree.set_edge("left");
    /// tree.leaf("base");
    /// tree.pop();
    ///
    /// let mut out = Vec::new();
    /// tree.write_outline(&mut out)?;
    /// assert_eq!(String::from_utf8(out).unwrap(), "solve\n  left: base\n");
    /// # Ok::<(), tracetree::TraceError>(())
    /// ```
    pub fn write_outline<W: Write>(&self, sink: W) -> Result<()> {
        self.write_outline_with(sink, &RenderConfig::default())
    }

    /// [`write_outline`](Self::write_outline) with custom settings.
    pub fn write_outline_with<W: Write>(&self, mut sink: W, config: &RenderConfig) -> Result<()> {
        log::debug!(
            "writing outline of {} nodes from {} roots",
            self.len(),
            self.roots().len()
        );

        for visit in self.preorder() {
            let mut out =
                IndentWriter::new(&mut sink, config.outline_indent.repeat(visit.depth));
            if !visit.edge.is_empty() {
                write!(out, "{}: ", visit.edge)?;
            }
            out.write_all(self[visit.id].label().as_bytes())?;
            out.write_all(b"\n")?;
        }

        sink.flush()?;
        Ok(())
    }
}
