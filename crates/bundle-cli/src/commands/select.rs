//! Select command

use std::fs;
use std::path::Path;

use bundle_content::Bundle;
use tracing::debug;

use crate::context::BundleContext;
use crate::error::Result;

/// Split a bundle file and write the selected variant.
pub fn run_select(
    file: &Path,
    config: &Path,
    delimiter_flag: Option<&str>,
    policy_flag: Option<&str>,
    output: Option<&Path>,
) -> Result<()> {
    let ctx = BundleContext::resolve(config, delimiter_flag, policy_flag)?;
    let source = fs::read_to_string(file)?;

    let bundle = Bundle::parse(source, &ctx.delimiter);
    let variant = bundle.select(ctx.policy)?;
    debug!(
        ordinal = variant.ordinal,
        of = bundle.variant_count(),
        "selected variant"
    );

    match output {
        Some(path) => fs::write(path, &variant.text)?,
        None => print!("{}", variant.text),
    }
    Ok(())
}
