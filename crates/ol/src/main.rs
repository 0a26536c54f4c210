//! OL CLI - outline-driven documentation scaffolding.
//!
//! Provides commands for:
//! - `build`: Generate topic documents and the sidebars file from outlines
//! - `validate`: Validate outline files and report duplicated labels
//! - `init`: Create a default configuration file
//! - `outline`: Create outline files from an existing docs tree

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, InitArgs, OutlineArgs, ValidateArgs};
use output::Output;

/// OL - outline-driven documentation scaffolding.
#[derive(Parser)]
#[command(name = "ol", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build topic documents and the sidebars file from outline files.
    Build(BuildArgs),
    /// Validate outline files and report duplicated sidebar labels.
    Validate(ValidateArgs),
    /// Create a default configuration file.
    Init(InitArgs),
    /// Create outline files from an existing docs tree.
    Outline(OutlineArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = match &cli.command {
        Commands::Build(args) => args.verbose,
        Commands::Validate(args) => args.verbose,
        Commands::Outline(args) => args.verbose,
        Commands::Init(_) => false,
    };

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Build(args) => args.execute(&output),
        Commands::Validate(args) => args.execute(&output),
        Commands::Init(args) => args.execute(&output),
        Commands::Outline(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
