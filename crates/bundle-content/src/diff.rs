//! Variant diff types and computation

use similar::TextDiff;

/// Result of comparing two variants of the same bundle
#[derive(Debug, Clone, PartialEq)]
pub struct VariantDiff {
    /// Are the two variants byte-identical?
    pub is_identical: bool,
    /// Line-level changes from old to new
    pub changes: Vec<VariantChange>,
    /// Similarity ratio (0.0 to 1.0)
    pub similarity: f64,
}

/// A single line-level change between two variants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantChange {
    /// Line present only in the new variant
    Added(String),
    /// Line present only in the old variant
    Removed(String),
}

impl VariantDiff {
    /// Create a diff indicating the variants are identical
    pub fn identical() -> Self {
        Self {
            is_identical: true,
            changes: Vec::new(),
            similarity: 1.0,
        }
    }

    /// Compute a line-by-line diff between two variant texts
    ///
    /// Uses the `similar` crate's TextDiff for line-level comparison.
    pub fn compute(old: &str, new: &str) -> Self {
        if old == new {
            return Self::identical();
        }

        let text_diff = TextDiff::from_lines(old, new);
        let similarity = text_diff.ratio() as f64;

        let mut changes = Vec::new();
        for change in text_diff.iter_all_changes() {
            match change.tag() {
                similar::ChangeTag::Delete => {
                    changes.push(VariantChange::Removed(change.value().to_string()));
                }
                similar::ChangeTag::Insert => {
                    changes.push(VariantChange::Added(change.value().to_string()));
                }
                similar::ChangeTag::Equal => {}
            }
        }

        Self {
            is_identical: changes.is_empty(),
            changes,
            similarity,
        }
    }
}

impl Default for VariantDiff {
    fn default() -> Self {
        Self::identical()
    }
}
