//! Snapshot diff output types.

use crate::model::Identifier;
use serde::{Deserialize, Serialize};

/// Structured difference between two snapshots
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SnapshotDiff {
    pub classification: DiffClassification,
    /// Identifiers in `after` but not `before`, in `after` order
    pub added: Vec<Identifier>,
    /// Identifiers in `before` but not `after`, in `before` order
    pub removed: Vec<Identifier>,
    pub before_len: usize,
    pub after_len: usize,
}

impl SnapshotDiff {
    /// The identifier `diff_new` reports: the last added one
    pub fn created(&self) -> Option<&Identifier> {
        self.added.last()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DiffClassification {
    /// Same identifiers on both sides
    Unchanged,
    /// Exactly one identifier appeared and none disappeared
    SingleInsertion,
    /// Anything else: several insertions, removals, or both
    Changed,
}
