//! Append command

use std::fs;
use std::path::Path;

use bundle_content::{Bundle, append_variant};
use colored::Colorize;

use crate::context::BundleContext;
use crate::error::Result;

/// Append a new variant to a bundle file.
pub fn run_append(
    file: &Path,
    draft: &Path,
    config: &Path,
    delimiter_flag: Option<&str>,
) -> Result<()> {
    let ctx = BundleContext::resolve(config, delimiter_flag, None)?;
    let source = fs::read_to_string(file)?;
    let text = fs::read_to_string(draft)?;

    let updated = append_variant(&source, &ctx.delimiter, &text)?;
    fs::write(file, &updated)?;

    let count = Bundle::parse(updated, &ctx.delimiter).variant_count();
    println!(
        "{} appended variant #{} to {}",
        "ok".green().bold(),
        count - 1,
        file.display()
    );
    Ok(())
}
