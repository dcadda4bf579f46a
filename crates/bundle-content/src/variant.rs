//! Variant value type

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// One document extracted from a bundle.
///
/// A variant has no identity beyond its position: two bundles may hold
/// byte-identical variants at different ordinals, and a variant only means
/// something relative to the bundle it was split from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// 0-based position, in order of appearance in the raw source.
    pub ordinal: usize,
    /// The text between the surrounding cut points, unmodified.
    pub text: String,
    /// Byte range of `text` within the raw bundle source.
    pub span: Range<usize>,
}

impl Variant {
    /// Create a new variant
    pub fn new(ordinal: usize, text: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            ordinal,
            text: text.into(),
            span,
        }
    }

    /// Length of the variant text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the variant text is empty (delimiter at a bundle boundary or
    /// two adjacent delimiters).
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of lines in the variant text.
    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }
}
