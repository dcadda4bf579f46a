//! Manifest parsing for bundle.toml files
//!
//! The manifest carries the operator-supplied delimiter literal and the
//! selection policy. The delimiter has no default: the component that
//! packs bundles and the one that splits them must agree on the exact
//! literal, so omitting it is an error rather than a guess.

use serde::{Deserialize, Serialize};

use crate::delimiter::Delimiter;
use crate::error::Result;
use crate::select::SelectionPolicy;

/// Bundle configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleSection {
    /// The delimiter literal separating variants
    pub delimiter: String,

    /// Which variant is canonical for publication
    #[serde(default)]
    pub policy: SelectionPolicy,
}

/// Bundle configuration manifest parsed from bundle.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Bundle settings
    pub bundle: BundleSection,
}

impl Manifest {
    /// Parse a manifest from TOML content
    ///
    /// # Example
    ///
    /// ```
    /// use bundle_content::{Manifest, SelectionPolicy};
    ///
    /// let manifest = Manifest::parse(r#"
    /// [bundle]
    /// delimiter = "::SEP::"
    /// policy = "first"
    /// "#).unwrap();
    ///
    /// assert_eq!(manifest.policy(), SelectionPolicy::First);
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        let manifest: Manifest = toml::from_str(content)?;
        Ok(manifest)
    }

    /// The validated delimiter from this manifest
    ///
    /// # Errors
    /// Returns `Error::EmptyDelimiter` if the manifest carries an empty
    /// literal.
    pub fn delimiter(&self) -> Result<Delimiter> {
        Delimiter::new(self.bundle.delimiter.as_str())
    }

    /// The configured selection policy
    pub fn policy(&self) -> SelectionPolicy {
        self.bundle.policy
    }
}
