//! Variant selection policies

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::variant::Variant;

/// Which variant of a bundle is canonical for publication.
///
/// The policy is configuration, not a property of the bundle: nothing in
/// the bundle format marks one variant as canonical, so the choice must be
/// supplied by the operator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionPolicy {
    /// The first-authored rendering (ordinal 0).
    First,
    /// The most recently appended rendering (final ordinal).
    #[default]
    Last,
    /// The rendering at a specific ordinal.
    Index(usize),
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("first"),
            Self::Last => f.write_str("last"),
            Self::Index(n) => write!(f, "index:{n}"),
        }
    }
}

impl FromStr for SelectionPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "first" => Ok(Self::First),
            "last" => Ok(Self::Last),
            _ => match s.strip_prefix("index:") {
                Some(n) => n
                    .parse::<usize>()
                    .map(Self::Index)
                    .map_err(|_| Error::invalid_policy(s)),
                None => Err(Error::invalid_policy(s)),
            },
        }
    }
}

/// Selects exactly one variant according to `policy`.
///
/// The returned reference is an element of `variants`, unmodified. An
/// out-of-range `Index` is reported rather than being coerced to another
/// ordinal; a silent fallback would mask a configuration bug in the bundle
/// or the policy.
pub fn select(variants: &[Variant], policy: SelectionPolicy) -> Result<&Variant> {
    let count = variants.len();
    let index = match policy {
        SelectionPolicy::First => 0,
        SelectionPolicy::Last => count.saturating_sub(1),
        SelectionPolicy::Index(n) => n,
    };
    variants
        .get(index)
        .ok_or(Error::VariantOutOfRange { index, count })
}
