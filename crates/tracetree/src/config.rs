//! Rendering configuration

/// Settings that shape rendered output.
///
/// The defaults produce the plain `digraph debug { ... }` layout with one
/// statement per line and no leading whitespace, and a two-space outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Name written in the `digraph <name> {` header, quoted if it is not
    /// a plain identifier
    pub graph_name: String,

    /// Prefix for generated node identifiers (`n0`, `n1`, ...); ids are
    /// quoted if the prefix is not a plain identifier
    pub node_prefix: String,

    /// Leading whitespace for every statement inside the graph body
    pub statement_indent: String,

    /// Indentation added per depth level by the text outline
    pub outline_indent: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            graph_name: "debug".to_string(),
            node_prefix: "n".to_string(),
            statement_indent: String::new(),
            outline_indent: "  ".to_string(),
        }
    }
}

impl RenderConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different graph name in the header.
    pub fn with_graph_name(mut self, name: impl Into<String>) -> Self {
        self.graph_name = name.into();
        self
    }

    /// Use a different node identifier prefix.
    ///
    /// An empty prefix yields bare numeric ids, which DOT accepts.
    pub fn with_node_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.node_prefix = prefix.into();
        self
    }

    /// Indent every statement of the graph body.
    pub fn with_statement_indent(mut self, indent: impl Into<String>) -> Self {
        self.statement_indent = indent.into();
        self
    }

    /// Set the per-level indentation of the text outline.
    pub fn with_outline_indent(mut self, indent: impl Into<String>) -> Self {
        self.outline_indent = indent.into();
        self
    }
}
