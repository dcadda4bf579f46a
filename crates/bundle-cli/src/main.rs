//! Bundle Manager CLI
//!
//! The command-line interface for splitting, selecting, and packing
//! document variant bundles.

mod cli;
mod commands;
mod context;
mod error;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let Cli {
        config,
        delimiter,
        command,
        ..
    } = cli;

    match command {
        Some(cmd) => execute_command(cmd, &config, delimiter.as_deref()),
        None => {
            // No command provided - show help hint
            println!("{} Bundle Manager CLI", "bundle".green().bold());
            println!();
            println!("Run {} for available commands.", "bundle --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(
    cmd: Commands,
    config: &std::path::Path,
    delimiter: Option<&str>,
) -> Result<()> {
    match cmd {
        Commands::Select {
            file,
            policy,
            output,
        } => commands::run_select(&file, config, delimiter, policy.as_deref(), output.as_deref()),
        Commands::Inspect { file, json } => commands::run_inspect(&file, config, delimiter, json),
        Commands::Append { file, draft } => commands::run_append(&file, &draft, config, delimiter),
        Commands::Diff { file, old, new } => commands::run_diff(&file, config, delimiter, old, new),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "bundle", &mut std::io::stdout());
            Ok(())
        }
    }
}
