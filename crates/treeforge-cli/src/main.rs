//! Treeforge - create project structures from ASCII tree diagrams.
//!
//! # Architecture
//!
//! The CLI is organized around subcommands:
//! - `create` - Parse a diagram and materialize it on disk
//! - `inspect` - Parse a diagram and print its structure
//! - `completions` - Generate shell completions
//!
//! # Examples
//!
//! ```bash
//! # Preview what would be created
//! treeforge create layout.txt --dry-run
//!
//! # Create for real, unattended
//! treeforge create layout.txt --yes --export structure.json
//! ```

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use treeforge_cli::cli::{Cli, Commands};
use treeforge_cli::commands;
use treeforge_core::cli::{ExitCode, OutputFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let output_format = cli
        .format
        .parse::<OutputFormat>()
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    let exit_code = execute_command(&cli.command, output_format)?;

    std::process::exit(exit_code.as_i32());
}

/// Initializes tracing with levels driven by the verbosity flag.
///
/// Diagnostics go to stderr so stdout stays clean for piped output.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Routes the parsed command to its handler and returns an exit code.
fn execute_command(command: &Commands, output_format: OutputFormat) -> Result<ExitCode> {
    match command {
        Commands::Create(args) => commands::create::run(args, output_format),
        Commands::Inspect(args) => commands::inspect::run(args, output_format),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            commands::completions::run(*shell, &mut cmd)
        }
    }
}
