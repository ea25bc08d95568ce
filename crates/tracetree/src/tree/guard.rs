//! RAII guard for automatic node closing

use super::{DebugTree, NodeId};
use crate::error::TraceError;

/// RAII guard that pops its node when dropped.
///
/// # Example
///
/// ```
/// use tracetree::DebugTree;
///
/// let mut tree = DebugTree::new();
///
/// {
///     let mut call = tree.scope("fib(2)");
///     call.leaf("fib(1)");
///     call.leaf("fib(0)");
/// }
/// // guard dropped, fib(2) closed
/// assert!(tree.is_balanced());
/// assert_eq!(tree[tree.roots()[0]].children().len(), 2);
/// ```
pub struct NodeGuard<'a> {
    tree: &'a mut DebugTree,
    id: NodeId,
}

impl DebugTree {
    /// Push a node now and pop it when the returned guard is dropped.
    pub fn scope(&mut self, label: impl Into<String>) -> NodeGuard<'_> {
        let id = self.push(label);
        NodeGuard { tree: self, id }
    }
}

impl NodeGuard<'_> {
    /// The node this guard keeps open.
    pub fn id(&self) -> NodeId {
        self.id
    }
}

impl Drop for NodeGuard<'_> {
    /// Closes the guarded node.
    ///
    /// # Panics
    ///
    /// Panics if the guarded node is not the open one, i.e. a push or pop
    /// made through the guard was left unmatched. While already unwinding
    /// the mismatch is only logged.
    fn drop(&mut self) {
        let open = self.tree.cursor();
        if open == Some(self.id) {
            self.tree.pop();
            return;
        }

        let err = TraceError::ScopeMismatch {
            guard: self.id,
            open,
        };
        if std::thread::panicking() {
            log::warn!("{}", err);
            return;
        }
        panic!("{}", err);
    }
}

impl std::ops::Deref for NodeGuard<'_> {
    type Target = DebugTree;

    fn deref(&self) -> &Self::Target {
        self.tree
    }
}

impl std::ops::DerefMut for NodeGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.tree
    }
}
