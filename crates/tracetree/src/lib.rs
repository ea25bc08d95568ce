//! # Tracetree
//!
//! Call-tree tracing for recursive algorithms.
//!
//! A [`DebugTree`] records nested calls and decisions as they happen: each
//! recursive step is wrapped in `push`/`pop`, base cases become `leaf`s,
//! and the branch taken can be named with `set_edge` before descending.
//! The finished (or half-finished) trace renders as a Graphviz digraph or
//! as an indented text outline.
//!
//! [`IndentWriter`] is the companion for plain log output: it prefixes
//! every line written through it, so nested levels stay readable.
//!
//! ## Example
//!
//! ```
//! use tracetree::DebugTree;
//!
//! fn fib(n: u32, trace: &mut DebugTree) -> u32 {
//!     if n < 2 {
//!         trace.leaf_fmt(format_args!("fib({n}) = {n}"));
//!         return n;
//!     }
//!     trace.push_fmt(format_args!("fib({n})"));
//!     trace.set_edge("n-1");
//!     let a = fib(n - 1, trace);
//!     trace.set_edge("n-2");
//!     let b = fib(n - 2, trace);
//!     trace.append_fmt(format_args!(" = {}", a + b));
//!     trace.pop();
//!     a + b
//! }
//!
//! let mut trace = DebugTree::new();
//! assert_eq!(fib(3, &mut trace), 2);
//! assert!(trace.is_balanced());
//!
//! let dot = trace.to_dot();
//! assert!(dot.starts_with("digraph debug {\n"));
//! assert!(dot.contains("n0 [label=\"fib(3) = 2\"];"));
//! assert!(dot.contains("n0 -> n1 [label=\"n-1\"];"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod indent;
pub mod render;
pub mod tree;

// Re-export main types
pub use config::RenderConfig;
pub use error::{Result, ShortWrite, TraceError};
pub use indent::IndentWriter;
pub use render::{escape_label, DotGraph};
pub use tree::{DebugTree, NodeGuard, NodeId, TraceNode};

/// Tracetree version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
