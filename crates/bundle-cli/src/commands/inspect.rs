//! Inspect command

use std::fs;
use std::path::Path;

use bundle_content::Bundle;
use colored::Colorize;
use serde::Serialize;

use crate::context::BundleContext;
use crate::error::Result;

/// JSON row describing one variant
#[derive(Debug, Serialize)]
struct VariantRow {
    ordinal: usize,
    bytes: usize,
    lines: usize,
}

/// List the variants of a bundle file.
pub fn run_inspect(
    file: &Path,
    config: &Path,
    delimiter_flag: Option<&str>,
    json: bool,
) -> Result<()> {
    let ctx = BundleContext::resolve(config, delimiter_flag, None)?;
    let source = fs::read_to_string(file)?;
    let bundle = Bundle::parse(source, &ctx.delimiter);

    if json {
        let rows: Vec<VariantRow> = bundle
            .variants()
            .iter()
            .map(|v| VariantRow {
                ordinal: v.ordinal,
                bytes: v.len(),
                lines: v.line_count(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!(
            "{}: {} variant(s)",
            file.display().to_string().bold(),
            bundle.variant_count()
        );
        for v in bundle.variants() {
            println!(
                "  {}  {:>7} bytes  {:>5} lines",
                format!("#{}", v.ordinal).cyan(),
                v.len(),
                v.line_count()
            );
        }
    }
    Ok(())
}
