//! navtree CLI - Sidebar navigation checker and exporter.
//!
//! Provides commands for:
//! - `check`: Validate the sidebar declaration
//! - `export`: Write the sidebars for the site generator
//! - `flatten`: Print the previous/next reading order

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, ExportArgs, FlattenArgs};
use output::Output;

/// navtree - Sidebar navigation for documentation sites.
#[derive(Parser)]
#[command(name = "navtree", version, about)]
struct Cli {
    /// Enable verbose output (info-level logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the sidebar declaration.
    Check(CheckArgs),
    /// Validate and write the sidebars to the export file.
    Export(ExportArgs),
    /// Print documents in reading order.
    Flatten(FlattenArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Export(args) => args.execute(),
        Commands::Flatten(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
