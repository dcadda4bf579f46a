//! Bundle parsing, selection, and packing for Bundle Manager
//!
//! Provides the document-bundle core: splitting delimiter-separated variant
//! documents out of a single source unit, selecting one variant for
//! publication, and packing or appending variants on the authoring side.

pub mod bundle;
pub mod delimiter;
pub mod diff;
pub mod error;
pub mod manifest;
pub mod select;
pub mod split;
pub mod variant;
pub mod writer;

pub use bundle::Bundle;
pub use delimiter::Delimiter;
pub use diff::{VariantChange, VariantDiff};
pub use error::{Error, Result};
pub use manifest::{BundleSection, Manifest};
pub use select::{SelectionPolicy, select};
pub use split::{split, split_variants};
pub use variant::Variant;
pub use writer::{append_variant, pack};
