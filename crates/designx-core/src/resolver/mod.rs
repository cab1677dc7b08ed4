//! Handle resolution over externally owned trees.
//!
//! Every walk here goes strictly upward from a start node, one ancestor per
//! step. The start node is depth 0 and a walk bounded by `max_depth`
//! inspects depths `0..=max_depth`. Running out of depth or ancestors
//! yields `None`: absence is an expected result, not an error.
//!
//! The walks are a compatibility shim for systems that offer no direct
//! handle registration; callers reach them through
//! [`DesignerSurface`](crate::surface::DesignerSurface) and the session, so
//! a direct API can replace them without touching the orchestration.

pub mod capability;
pub mod fields;

pub use capability::{find_capability, Capability, CapabilityMatch, MatchSource};
pub use fields::{extract_fields, extract_identifier, FieldSet, FieldSpec};

use crate::model::NodeTree;

/// Iterator over `(depth, node)` pairs from a start node up to the depth bound
pub struct Ancestors<'t, T: NodeTree> {
    tree: &'t T,
    next: Option<T::Handle>,
    depth: usize,
    max_depth: usize,
}

impl<'t, T: NodeTree> Ancestors<'t, T> {
    pub fn new(tree: &'t T, start: T::Handle, max_depth: usize) -> Self {
        Self {
            tree,
            next: Some(start),
            depth: 0,
            max_depth,
        }
    }
}

impl<T: NodeTree> Iterator for Ancestors<'_, T> {
    type Item = (usize, T::Handle);

    fn next(&mut self) -> Option<Self::Item> {
        if self.depth > self.max_depth {
            return None;
        }
        let node = self.next?;
        let depth = self.depth;
        self.next = self.tree.parent(node);
        self.depth += 1;
        Some((depth, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::MemoryTree;
    use serde_json::json;

    #[test]
    fn test_ancestors_respects_inclusive_bound() {
        let mut tree = MemoryTree::new();
        let root = tree.add_root(json!({}));
        let mid = tree.add_child(root, json!({}));
        let leaf = tree.add_child(mid, json!({}));

        let all: Vec<_> = Ancestors::new(&tree, leaf, 10).collect();
        assert_eq!(all, vec![(0, leaf), (1, mid), (2, root)]);

        let bounded: Vec<_> = Ancestors::new(&tree, leaf, 1).collect();
        assert_eq!(bounded, vec![(0, leaf), (1, mid)]);

        let start_only: Vec<_> = Ancestors::new(&tree, leaf, 0).collect();
        assert_eq!(start_only, vec![(0, leaf)]);
    }
}
