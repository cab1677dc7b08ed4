use designx_core::model::Identifier;
use designx_core::snapshot::Snapshot;
use designx_core::tree::{MemoryTree, NodeId, COMPONENT_CLASS, CONTAINER_CLASS};
use serde_json::{json, Value};

/// Property bag of a node exposing the designer methods directly
#[allow(dead_code)]
pub fn designer_bag() -> Value {
    json!({
        "addComponent": "function",
        "deleteComponent": "function",
        "updateComponent": "function"
    })
}

/// A straight ancestor chain of `len` nodes
///
/// Returns the tree and the leaf. The node at distance `d` from the leaf
/// (the leaf being 0) exposes the designer when `capable_at == Some(d)`.
#[allow(dead_code)]
pub fn chain(len: usize, capable_at: Option<usize>) -> (MemoryTree, NodeId) {
    assert!(len > 0, "chain needs at least one node");
    let mut tree = MemoryTree::new();
    let bag_for = |distance: usize| {
        if capable_at == Some(distance) {
            designer_bag()
        } else {
            json!({"level": distance})
        }
    };
    let mut node = tree.add_root(bag_for(len - 1));
    for distance in (0..len - 1).rev() {
        node = tree.add_child(node, bag_for(distance));
    }
    (tree, node)
}

/// A designer page: provider at the top, a hidden toolbox container and
/// the root canvas holding `component_ids` as text fields
#[allow(dead_code)]
pub fn designer_page(component_ids: &[&str]) -> MemoryTree {
    let mut tree = MemoryTree::new();
    let provider = tree.add_root(json!({ "value": designer_bag() }));
    let layout = tree.add_child(provider, json!({"className": "designer-layout"}));

    let toolbox = tree.add_child(layout, json!({"containerId": "toolbox"}));
    tree.add_class(toolbox, CONTAINER_CLASS);
    tree.set_visible(toolbox, false);

    let canvas = tree.add_child(layout, json!({"containerId": "root"}));
    tree.add_class(canvas, CONTAINER_CLASS);
    tree.set_sortable(canvas, true);

    for id in component_ids {
        let comp = tree.add_child(
            canvas,
            json!({"id": id, "type": "textField", "containerId": "root"}),
        );
        tree.add_class(comp, COMPONENT_CLASS);
    }
    tree
}

#[allow(dead_code)]
pub fn ident(raw: &str) -> Identifier {
    Identifier::new(raw).unwrap()
}

#[allow(dead_code)]
pub fn snapshot_of(ids: &[&str]) -> Snapshot {
    ids.iter().map(|id| ident(id)).collect()
}
