//! Snapshot diffing.
//!
//! ```ignore
//! use designx_core::diff::{compute_diff, diff_new};
//!
//! let diff = compute_diff(&before, &after);
//! let created = diff_new(&before, &after);
//! ```
//!
//! `diff_new` assumes the action between the two captures created exactly
//! one item. The assumption is not verified: when several identifiers are
//! new it returns the last one in `after` order, which is best-effort. Use
//! `diff_all` or `compute_diff` to detect that case.

pub mod engine;
pub mod human_summary;
pub mod model;

pub use engine::{compute_diff, diff_all, diff_new};
pub use human_summary::render_human_summary;
pub use model::{DiffClassification, SnapshotDiff};
