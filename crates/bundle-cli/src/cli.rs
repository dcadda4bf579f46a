//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Bundle Manager - Split, select, and pack document variant bundles
#[derive(Parser, Debug)]
#[command(name = "bundle")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the bundle manifest
    #[arg(short, long, global = true, default_value = "bundle.toml")]
    pub config: PathBuf,

    /// Delimiter literal, overriding the manifest
    #[arg(short, long, global = true)]
    pub delimiter: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Select one variant from a bundle for publication
    ///
    /// Splits the bundle and writes the variant chosen by the selection
    /// policy to stdout (or to a file with -o). The output is handed to
    /// the downstream renderer unchanged.
    ///
    /// Examples:
    ///   bundle select post.md                    # policy from bundle.toml
    ///   bundle select post.md --policy first     # explicit policy
    ///   bundle select post.md --policy index:1 -o out.md
    Select {
        /// Bundle file to read
        file: PathBuf,

        /// Selection policy (first, last, index:N), overriding the manifest
        #[arg(short, long)]
        policy: Option<String>,

        /// Write the selected variant to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the variants of a bundle
    Inspect {
        /// Bundle file to read
        file: PathBuf,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Append a new variant to a bundle
    ///
    /// The new variant lands after the final existing one, which makes it
    /// the variant selected by the default "last" policy.
    ///
    /// Examples:
    ///   bundle append post.md revised.md
    Append {
        /// Bundle file to modify
        file: PathBuf,

        /// File containing the new variant text
        draft: PathBuf,
    },

    /// Show a line diff between two variants of a bundle
    Diff {
        /// Bundle file to read
        file: PathBuf,

        /// Ordinal of the old variant
        old: usize,

        /// Ordinal of the new variant
        new: usize,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}
