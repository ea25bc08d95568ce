//! Error types for trace building and rendering

use thiserror::Error;

use crate::tree::NodeId;

/// Main error type for tracetree operations
#[derive(Error, Debug)]
pub enum TraceError {
    /// A cursor operation was issued while no node was open
    #[error("unbalanced push/pop: cannot {op} with no open node")]
    Unbalanced {
        /// The operation that found the cursor empty
        op: &'static str,
    },

    /// A scope guard was dropped while a node other than its own was open
    #[error("unbalanced push/pop: scope for {guard} closed while {} is open", open_node(.open))]
    ScopeMismatch {
        /// The node the guard opened
        guard: NodeId,
        /// The node actually open at drop time
        open: Option<NodeId>,
    },

    /// The sink behind an indent writer failed part way through a chunk
    #[error(transparent)]
    ShortWrite(#[from] ShortWrite),

    /// The render sink rejected a write
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure of an [`IndentWriter`](crate::IndentWriter) chunk.
///
/// Carries both halves of a partial write: how much input made it
/// through, and what stopped the rest.
#[derive(Error, Debug)]
#[error("indent writer failed after {written} input bytes: {source}")]
pub struct ShortWrite {
    /// Input bytes forwarded before the failure (indentation not counted)
    pub written: usize,
    /// The error reported by the underlying sink
    #[source]
    pub source: std::io::Error,
}

/// Result type alias for tracetree operations
pub type Result<T> = std::result::Result<T, TraceError>;

fn open_node(open: &Option<NodeId>) -> String {
    match open {
        Some(id) => id.to_string(),
        None => "nothing".to_string(),
    }
}
