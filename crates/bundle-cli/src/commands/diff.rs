//! Diff command

use std::fs;
use std::path::Path;

use bundle_content::{Bundle, SelectionPolicy, VariantChange, VariantDiff};
use colored::Colorize;

use crate::context::BundleContext;
use crate::error::Result;

/// Show a line diff between two variants of a bundle file.
pub fn run_diff(
    file: &Path,
    config: &Path,
    delimiter_flag: Option<&str>,
    old: usize,
    new: usize,
) -> Result<()> {
    let ctx = BundleContext::resolve(config, delimiter_flag, None)?;
    let source = fs::read_to_string(file)?;
    let bundle = Bundle::parse(source, &ctx.delimiter);

    let old_variant = bundle.select(SelectionPolicy::Index(old))?;
    let new_variant = bundle.select(SelectionPolicy::Index(new))?;

    let diff = VariantDiff::compute(&old_variant.text, &new_variant.text);
    if diff.is_identical {
        println!("variants #{old} and #{new} are identical");
        return Ok(());
    }

    for change in &diff.changes {
        match change {
            VariantChange::Removed(line) => print!("{}", format!("-{line}").red()),
            VariantChange::Added(line) => print!("{}", format!("+{line}").green()),
        }
    }
    println!();
    println!("similarity: {:.2}", diff.similarity);
    Ok(())
}
