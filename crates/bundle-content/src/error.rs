//! Error types for bundle-content

/// Result type for bundle-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in bundle-content operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Delimiter must not be empty")]
    EmptyDelimiter,

    #[error("Variant index {index} out of range for bundle with {count} variant(s)")]
    VariantOutOfRange { index: usize, count: usize },

    #[error("Variant {ordinal} contains the bundle delimiter and cannot be packed")]
    DelimiterCollision { ordinal: usize },

    #[error("Invalid selection policy: {value}")]
    InvalidPolicy { value: String },

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    pub fn invalid_policy(value: impl Into<String>) -> Self {
        Self::InvalidPolicy {
            value: value.into(),
        }
    }
}
