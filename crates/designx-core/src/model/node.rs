use serde_json::Value;

/// Read-only access to an externally owned, loosely structured tree
///
/// Implementations expose just enough of the external object graph for
/// handle resolution: the ancestor link, the property bag and the list of
/// attached context values. Nothing here may mutate the tree.
pub trait NodeTree {
    /// Cheap handle naming one node; only valid for the duration of a call
    type Handle: Copy + Eq + std::fmt::Debug;

    /// The node's parent, or `None` at the top of the tree
    fn parent(&self, node: Self::Handle) -> Option<Self::Handle>;

    /// The node's property bag; `Value::Null` when the node carries none
    fn props(&self, node: Self::Handle) -> &Value;

    /// Context values the node depends on, in link order
    fn dependencies(&self, _node: Self::Handle) -> Vec<&Value> {
        Vec::new()
    }
}
