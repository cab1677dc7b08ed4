//! Point-in-time identifier snapshots.
//!
//! A snapshot records the identifiers reachable from a set of start nodes
//! at one instant. Two snapshots taken around a mutating action are
//! compared with [`crate::diff`] to learn what the action created.

pub mod capture;

pub use capture::capture_snapshot;

use crate::model::Identifier;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Duplicate-free set of identifiers, iterated in first-seen order
///
/// Capture order is the order of the start nodes handed to
/// [`capture_snapshot`], which pins the diff tie-break to document order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Identifier>", into = "Vec<Identifier>")]
pub struct Snapshot {
    ids: Vec<Identifier>,
    index: HashSet<Identifier>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an identifier; returns `false` if it was already present
    pub(crate) fn insert(&mut self, id: Identifier) -> bool {
        if self.index.insert(id.clone()) {
            self.ids.push(id);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, id: &Identifier) -> bool {
        self.index.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Identifier> {
        self.ids.iter()
    }
}

/// Set equality; order is irrelevant
impl PartialEq for Snapshot {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for Snapshot {}

impl FromIterator<Identifier> for Snapshot {
    fn from_iter<I: IntoIterator<Item = Identifier>>(iter: I) -> Self {
        let mut snapshot = Snapshot::new();
        for id in iter {
            snapshot.insert(id);
        }
        snapshot
    }
}

impl From<Vec<Identifier>> for Snapshot {
    fn from(ids: Vec<Identifier>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<Snapshot> for Vec<Identifier> {
    fn from(snapshot: Snapshot) -> Self {
        snapshot.ids
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a Identifier;
    type IntoIter = std::slice::Iter<'a, Identifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<Identifier> {
        raw.iter().filter_map(|s| Identifier::new(*s)).collect()
    }

    #[test]
    fn test_duplicates_collapse_keeping_first_position() {
        let snapshot: Snapshot = ids(&["b", "a", "b", "c", "a"]).into_iter().collect();

        let order: Vec<&str> = snapshot.iter().map(Identifier::as_str).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
        assert_eq!(snapshot.len(), 3);
    }

    #[test]
    fn test_equality_ignores_order() {
        let a: Snapshot = ids(&["x", "y"]).into();
        let b: Snapshot = ids(&["y", "x"]).into();
        assert_eq!(a, b);
    }

    #[test]
    fn test_serializes_as_list() {
        let snapshot: Snapshot = ids(&["comp-1", "comp-2"]).into();
        let json = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(json, r#"["comp-1","comp-2"]"#);

        let back: Snapshot = serde_json::from_str(r#"["comp-1","comp-1","comp-2"]"#).unwrap();
        assert_eq!(back, snapshot);
        assert_eq!(back.len(), 2);
    }

    #[test]
    fn test_deserialize_rejects_empty_identifier() {
        assert!(serde_json::from_str::<Snapshot>(r#"["a",""]"#).is_err());
    }
}
