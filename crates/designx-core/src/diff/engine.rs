//! Snapshot diff computation.

use crate::diff::model::{DiffClassification, SnapshotDiff};
use crate::model::Identifier;
use crate::snapshot::Snapshot;

/// Identifier present in `after` but not in `before`
///
/// With several new identifiers the last one in `after` iteration order
/// wins. `None` when nothing is new; callers should degrade to a warning,
/// not fail.
pub fn diff_new(before: &Snapshot, after: &Snapshot) -> Option<Identifier> {
    after.iter().filter(|id| !before.contains(id)).last().cloned()
}

/// Every identifier present in `after` but not in `before`, in `after` order
pub fn diff_all(before: &Snapshot, after: &Snapshot) -> Vec<Identifier> {
    after
        .iter()
        .filter(|id| !before.contains(id))
        .cloned()
        .collect()
}

/// Full structured diff of two snapshots
pub fn compute_diff(before: &Snapshot, after: &Snapshot) -> SnapshotDiff {
    let added = diff_all(before, after);
    let removed = diff_all(after, before);

    let classification = match (added.len(), removed.len()) {
        (0, 0) => DiffClassification::Unchanged,
        (1, 0) => DiffClassification::SingleInsertion,
        _ => DiffClassification::Changed,
    };

    SnapshotDiff {
        classification,
        added,
        removed,
        before_len: before.len(),
        after_len: after.len(),
    }
}
