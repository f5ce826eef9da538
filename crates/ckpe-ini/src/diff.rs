//! Line diff between the loaded file and the pending render.

use serde::Serialize;
use similar::{ChangeTag, TextDiff};

/// Whether a line was added or removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Removed,
}

/// A single changed line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineChange {
    pub kind: ChangeKind,
    /// Zero-based index in the old lines (removed) or the new lines (added).
    pub index: usize,
    pub line: String,
}

/// Line-by-line comparison of two line arrays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineDiff {
    pub changes: Vec<LineChange>,
    /// Similarity ratio (0.0 to 1.0)
    pub similarity: f32,
}

impl LineDiff {
    /// Compute the diff from `old` to `new`.
    pub fn compute<S: AsRef<str>, T: AsRef<str>>(old: &[S], new: &[T]) -> Self {
        let old: Vec<&str> = old.iter().map(AsRef::as_ref).collect();
        let new: Vec<&str> = new.iter().map(AsRef::as_ref).collect();

        if old == new {
            return Self {
                changes: Vec::new(),
                similarity: 1.0,
            };
        }

        let diff = TextDiff::from_slices(old.as_slice(), new.as_slice());
        let changes = diff
            .iter_all_changes()
            .filter_map(|change| {
                let (kind, index) = match change.tag() {
                    ChangeTag::Delete => (ChangeKind::Removed, change.old_index()?),
                    ChangeTag::Insert => (ChangeKind::Added, change.new_index()?),
                    ChangeTag::Equal => return None,
                };
                Some(LineChange {
                    kind,
                    index,
                    line: change.value().to_string(),
                })
            })
            .collect();

        Self {
            changes,
            similarity: diff.ratio(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}
