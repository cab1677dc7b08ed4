use super::Snapshot;
use crate::model::NodeTree;
use crate::resolver::extract_identifier;
use std::time::Instant;

/// Capture the identifiers reachable from every start node
///
/// Runs [`extract_identifier`] per start node; start nodes without an
/// identifier within `max_depth` are skipped. Read-only.
pub fn capture_snapshot<T, I>(tree: &T, starts: I, max_depth: usize) -> Snapshot
where
    T: NodeTree,
    I: IntoIterator<Item = T::Handle>,
{
    let started = Instant::now();
    let mut snapshot = Snapshot::new();
    let mut start_nodes = 0usize;
    for start in starts {
        start_nodes += 1;
        if let Some(id) = extract_identifier(tree, start, max_depth) {
            snapshot.insert(id);
        }
    }
    tracing::debug!(
        op = "capture_snapshot",
        start_nodes,
        snapshot_len = snapshot.len(),
        duration_ms = started.elapsed().as_millis() as u64,
        "snapshot captured"
    );
    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Identifier;
    use crate::tree::MemoryTree;
    use serde_json::json;

    #[test]
    fn test_capture_skips_nodes_without_id_and_collapses_duplicates() {
        let mut tree = MemoryTree::new();
        let root = tree.add_root(json!({}));
        let wrapper = tree.add_child(root, json!({"id": "comp-1"}));
        let a = tree.add_child(wrapper, json!({}));
        let b = tree.add_child(wrapper, json!({}));
        let orphan = tree.add_child(root, json!({}));

        let snapshot = capture_snapshot(&tree, [a, b, orphan], 10);

        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.contains(&Identifier::new("comp-1").unwrap()));
    }
}
