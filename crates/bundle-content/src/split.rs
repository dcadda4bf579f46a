//! Bundle splitting.
//!
//! Splits raw bundle text on exact occurrences of a delimiter token:
//! ```text
//! original rendering<|bundle:sep:UUID|>revised rendering
//! ```
//! Every occurrence is a cut point; nothing between cut points is trimmed
//! or normalized, so the segments joined back with the delimiter always
//! reconstruct the input byte-for-byte.

use crate::delimiter::Delimiter;
use crate::error::{Error, Result};
use crate::variant::Variant;

/// Splits raw bundle text on a delimiter token.
///
/// Scans left to right for non-overlapping, case-sensitive, byte-for-byte
/// occurrences of `delimiter`. The segments between cut points (and before
/// the first / after the last) are returned in order of appearance, so the
/// result always has `occurrences + 1` elements. Adjacent delimiters yield
/// an empty segment between them, and a delimiter at the very start or end
/// of `raw` yields a leading or trailing empty segment.
///
/// # Arguments
/// * `raw` - The raw bundle text
/// * `delimiter` - The delimiter token; must be non-empty
///
/// # Returns
/// The ordered segments, or an error for an empty delimiter.
///
/// # Errors
/// Returns `Error::EmptyDelimiter` if `delimiter` is empty.
///
/// # Example
/// ```
/// use bundle_content::split;
///
/// let segments = split("old draft::SEP::new draft", "::SEP::").unwrap();
/// assert_eq!(segments, vec!["old draft", "new draft"]);
///
/// let segments = split("no delimiter here", "::SEP::").unwrap();
/// assert_eq!(segments, vec!["no delimiter here"]);
/// ```
pub fn split(raw: &str, delimiter: &str) -> Result<Vec<String>> {
    if delimiter.is_empty() {
        return Err(Error::EmptyDelimiter);
    }
    Ok(raw.split(delimiter).map(str::to_string).collect())
}

/// Splits raw bundle text into [`Variant`]s with ordinals and byte spans.
///
/// Same cut-point semantics as [`split`]; each segment additionally records
/// the byte range it occupies in `raw` (excluding the delimiters).
///
/// # Example
/// ```
/// use bundle_content::{Delimiter, split_variants};
///
/// let sep = Delimiter::new("::SEP::").unwrap();
/// let variants = split_variants("old::SEP::new", &sep);
/// assert_eq!(variants.len(), 2);
/// assert_eq!(variants[1].ordinal, 1);
/// assert_eq!(variants[1].text, "new");
/// ```
pub fn split_variants(raw: &str, delimiter: &Delimiter) -> Vec<Variant> {
    let token = delimiter.as_str();
    let mut variants = Vec::new();
    let mut start = 0;
    let mut ordinal = 0;

    while let Some(pos) = raw[start..].find(token) {
        let end = start + pos;
        variants.push(Variant::new(ordinal, &raw[start..end], start..end));
        start = end + token.len();
        ordinal += 1;
    }
    variants.push(Variant::new(ordinal, &raw[start..], start..raw.len()));

    variants
}
