use super::Ancestors;
use crate::model::props::{self, PROVIDER_VALUE_KEY};
use crate::model::NodeTree;
use serde_json::Value;

/// Where on a node the capability was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSource {
    /// The node's own property bag
    Props,
    /// The node's dependency at this position in link order
    Dependency(usize),
}

/// The first node on the ancestor path exposing a capability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilityMatch<H> {
    pub node: H,
    pub depth: usize,
    pub source: MatchSource,
}

impl<H: Copy + Eq + std::fmt::Debug> CapabilityMatch<H> {
    /// The bag the predicate accepted
    ///
    /// Returns `None` if the tree no longer has the dependency, which can
    /// only happen when the tree changed since the match was made.
    pub fn bag<'t, T>(&self, tree: &'t T) -> Option<&'t Value>
    where
        T: NodeTree<Handle = H>,
    {
        match self.source {
            MatchSource::Props => Some(tree.props(self.node)),
            MatchSource::Dependency(index) => tree.dependencies(self.node).get(index).copied(),
        }
    }
}

/// Predicate for "this bag exposes method X"
///
/// Provider nodes carry the provided object under `value`, context
/// dependencies carry it directly; both shapes are accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capability {
    method: String,
}

impl Capability {
    pub fn method(name: impl Into<String>) -> Self {
        Self {
            method: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.method
    }

    pub fn provides(&self, bag: &Value) -> bool {
        self.target(bag).is_some()
    }

    /// The object inside `bag` that holds the method, if any
    pub fn target<'a>(&self, bag: &'a Value) -> Option<&'a Value> {
        if props::has_method(bag, &self.method) {
            return Some(bag);
        }
        props::field(bag, PROVIDER_VALUE_KEY).filter(|inner| props::has_method(inner, &self.method))
    }
}

/// Find the nearest ancestor exposing a capability
///
/// Walks upward from `start`. At each node the predicate is tested on the
/// node's property bag, then on each of its dependencies in link order,
/// before moving to the parent. The first success wins, so the shallowest
/// match is returned.
///
/// # Arguments
/// * `tree` - The external tree
/// * `start` - Node to start from (depth 0)
/// * `predicate` - Reports whether a bag exposes the capability
/// * `max_depth` - Deepest depth inspected
///
/// # Returns
/// The matching node with its depth and match source, or `None`
pub fn find_capability<T, P>(
    tree: &T,
    start: T::Handle,
    predicate: P,
    max_depth: usize,
) -> Option<CapabilityMatch<T::Handle>>
where
    T: NodeTree,
    P: Fn(&Value) -> bool,
{
    for (depth, node) in Ancestors::new(tree, start, max_depth) {
        if predicate(tree.props(node)) {
            return Some(CapabilityMatch {
                node,
                depth,
                source: MatchSource::Props,
            });
        }
        if let Some(index) = tree.dependencies(node).iter().position(|dep| predicate(*dep)) {
            return Some(CapabilityMatch {
                node,
                depth,
                source: MatchSource::Dependency(index),
            });
        }
    }
    tracing::debug!(max_depth, start = ?start, "capability not found on ancestor path");
    None
}
