//! Delimiter token type and generation

use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{Error, Result};

/// The magic token that separates variants within a bundle.
///
/// Any non-empty string is a valid delimiter, but the writer and the
/// splitter must agree on the exact same literal, and the token must never
/// occur in real document content. [`Delimiter::random`] produces such a
/// token by embedding a UUID-v4 suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Delimiter(String);

impl Delimiter {
    /// Create a delimiter from a literal token.
    ///
    /// # Errors
    /// Returns `Error::EmptyDelimiter` if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.is_empty() {
            return Err(Error::EmptyDelimiter);
        }
        Ok(Self(token))
    }

    /// Generate a fresh collision-resistant delimiter.
    ///
    /// The token embeds a UUID-v4 so it cannot plausibly occur in authored
    /// content.
    pub fn random() -> Self {
        Self(format!("<|bundle:sep:{}|>", Uuid::new_v4()))
    }

    /// The delimiter token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Count non-overlapping occurrences of this delimiter in `text`.
    pub fn count_in(&self, text: &str) -> usize {
        text.matches(self.0.as_str()).count()
    }

    /// Check whether this delimiter occurs anywhere in `text`.
    pub fn occurs_in(&self, text: &str) -> bool {
        text.contains(self.0.as_str())
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Delimiter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}
