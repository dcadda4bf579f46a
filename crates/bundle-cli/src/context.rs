//! Delimiter and policy resolution shared by commands

use std::fs;
use std::path::Path;

use bundle_content::{Delimiter, Manifest, SelectionPolicy};
use tracing::debug;

use crate::error::{CliError, Result};

/// Resolved invocation context: the delimiter and policy a command runs
/// with. Flags win over the manifest; the manifest is only read when a
/// value is missing from the flags.
#[derive(Debug)]
pub struct BundleContext {
    pub delimiter: Delimiter,
    pub policy: SelectionPolicy,
}

impl BundleContext {
    /// Resolve the context from CLI flags and the manifest path.
    ///
    /// # Errors
    /// Fails when no delimiter is available from either source, or when a
    /// flag or manifest value does not parse.
    pub fn resolve(
        config: &Path,
        delimiter_flag: Option<&str>,
        policy_flag: Option<&str>,
    ) -> Result<Self> {
        let needs_manifest = delimiter_flag.is_none() || policy_flag.is_none();
        let manifest = if needs_manifest && config.exists() {
            let content = fs::read_to_string(config)?;
            Some(Manifest::parse(&content)?)
        } else {
            None
        };

        let delimiter = match delimiter_flag {
            Some(token) => Delimiter::new(token)?,
            None => match &manifest {
                Some(m) => m.delimiter()?,
                None => {
                    return Err(CliError::user(format!(
                        "no delimiter configured: pass --delimiter or create {}",
                        config.display()
                    )));
                }
            },
        };

        let policy = match policy_flag {
            Some(value) => value.parse::<SelectionPolicy>()?,
            None => manifest.as_ref().map(Manifest::policy).unwrap_or_default(),
        };

        debug!(delimiter = %delimiter, policy = %policy, "resolved bundle context");
        Ok(Self { delimiter, policy })
    }
}
