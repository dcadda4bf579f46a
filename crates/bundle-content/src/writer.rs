//! Bundle writing.
//!
//! The writing counterpart of the splitter: packs variant texts into a
//! single bundle and appends new variants to an existing one. The writer
//! and the splitter must agree on the exact delimiter literal, and the
//! writer refuses text that embeds the delimiter, since such a bundle
//! could never split back into the same variants.

use crate::delimiter::Delimiter;
use crate::error::{Error, Result};

/// Joins variant texts into a single bundle.
///
/// # Arguments
/// * `texts` - The variant texts, in ordinal order
/// * `delimiter` - The delimiter to place between adjacent variants
///
/// # Returns
/// The packed bundle text. Splitting it with the same delimiter yields the
/// input texts unchanged.
///
/// # Errors
/// Returns `Error::DelimiterCollision` naming the first offending ordinal
/// if any text contains the delimiter.
///
/// # Example
/// ```
/// use bundle_content::{Delimiter, pack};
///
/// let sep = Delimiter::new("::SEP::").unwrap();
/// let bundle = pack(&["old draft", "new draft"], &sep).unwrap();
/// assert_eq!(bundle, "old draft::SEP::new draft");
/// ```
pub fn pack<S: AsRef<str>>(texts: &[S], delimiter: &Delimiter) -> Result<String> {
    for (ordinal, text) in texts.iter().enumerate() {
        if delimiter.occurs_in(text.as_ref()) {
            return Err(Error::DelimiterCollision { ordinal });
        }
    }
    Ok(texts
        .iter()
        .map(|t| t.as_ref())
        .collect::<Vec<_>>()
        .join(delimiter.as_str()))
}

/// Appends a new variant to an existing bundle.
///
/// The new text lands after the final existing variant, which makes it the
/// one chosen by the `last` selection policy.
///
/// # Errors
/// Returns `Error::DelimiterCollision` if `text` contains the delimiter.
/// The reported ordinal is the one the new variant would have taken.
///
/// # Example
/// ```
/// use bundle_content::{Delimiter, append_variant};
///
/// let sep = Delimiter::new("::SEP::").unwrap();
/// let bundle = append_variant("original", &sep, "revised").unwrap();
/// assert_eq!(bundle, "original::SEP::revised");
/// ```
pub fn append_variant(source: &str, delimiter: &Delimiter, text: &str) -> Result<String> {
    if delimiter.occurs_in(text) {
        let ordinal = delimiter.count_in(source) + 1;
        return Err(Error::DelimiterCollision { ordinal });
    }
    Ok(format!("{source}{delimiter}{text}"))
}
