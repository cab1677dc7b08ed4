//! Human-readable summary renderer for snapshot diffs.

use crate::diff::model::{DiffClassification, SnapshotDiff};

/// Render a short Markdown summary of a [`SnapshotDiff`]
pub fn render_human_summary(diff: &SnapshotDiff) -> String {
    let mut out = String::new();

    out.push_str("## Snapshot Diff\n\n");

    let class_label = match diff.classification {
        DiffClassification::Unchanged => "Unchanged",
        DiffClassification::SingleInsertion => "Single insertion",
        DiffClassification::Changed => "Changed",
    };
    out.push_str(&format!(
        "**Classification**: {class_label}  \n**Identifiers**: {} -> {}\n\n",
        diff.before_len, diff.after_len
    ));

    if diff.classification == DiffClassification::Unchanged {
        out.push_str("_No identifiers added or removed._\n");
        return out;
    }

    if !diff.added.is_empty() {
        out.push_str(&format!("- **Added** ({}): {}\n", diff.added.len(), join(&diff.added)));
    }
    if !diff.removed.is_empty() {
        out.push_str(&format!(
            "- **Removed** ({}): {}\n",
            diff.removed.len(),
            join(&diff.removed)
        ));
    }
    if diff.added.len() > 1 {
        if let Some(created) = diff.created() {
            out.push_str(&format!(
                "\n_More than one identifier appeared; `{}` would be reported as created._\n",
                created
            ));
        }
    }
    out
}

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|i| format!("`{}`", i))
        .collect::<Vec<_>>()
        .join(", ")
}
