//! Unified Bundle type

use crate::delimiter::Delimiter;
use crate::error::Result;
use crate::select::{self, SelectionPolicy};
use crate::split::split_variants;
use crate::variant::Variant;

/// A parsed bundle: the raw source of one source unit together with the
/// variants extracted from it.
///
/// Bundles are immutable once parsed. Re-parsing the same source with the
/// same delimiter always yields an equal bundle, and [`Bundle::pack`]
/// reconstructs the source byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    /// Raw source as provided to parse (retained for round-trip checks)
    source: String,
    delimiter: Delimiter,
    variants: Vec<Variant>,
}

impl Bundle {
    /// Parse raw bundle text with the given delimiter.
    ///
    /// A source with `k` delimiter occurrences yields exactly `k + 1`
    /// variants, in left-to-right order; a source with none yields a single
    /// variant equal to the whole source.
    pub fn parse(source: impl Into<String>, delimiter: &Delimiter) -> Self {
        let source = source.into();
        let variants = split_variants(&source, delimiter);
        Self {
            source,
            delimiter: delimiter.clone(),
            variants,
        }
    }

    /// The raw source as provided to [`Bundle::parse`].
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The delimiter this bundle was parsed with.
    pub fn delimiter(&self) -> &Delimiter {
        &self.delimiter
    }

    /// All variants, in order of appearance.
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    /// Number of variants. Always delimiter occurrences + 1, so never zero.
    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }

    /// Get the variant at `ordinal`.
    pub fn variant(&self, ordinal: usize) -> Option<&Variant> {
        self.variants.get(ordinal)
    }

    /// Select exactly one variant for publication.
    ///
    /// # Errors
    /// Returns `Error::VariantOutOfRange` for an `Index` policy outside
    /// this bundle's ordinals.
    pub fn select(&self, policy: SelectionPolicy) -> Result<&Variant> {
        select::select(&self.variants, policy)
    }

    /// Re-join the variants with the delimiter between every adjacent pair.
    ///
    /// Always reproduces [`Bundle::source`] exactly.
    pub fn pack(&self) -> String {
        self.variants
            .iter()
            .map(|v| v.text.as_str())
            .collect::<Vec<_>>()
            .join(self.delimiter.as_str())
    }
}
