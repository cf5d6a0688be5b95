//! Shell completion generation command.
//!
//! Generates shell completion scripts for bash, zsh, fish, and `PowerShell`.

use anyhow::Result;
use clap::Command;
use clap_complete::{Shell, generate};
use std::io;
use tracing::info;
use treeforge_core::cli::ExitCode;

/// Generates a completion script for the specified shell on stdout.
pub fn generate_completions(shell: Shell, cmd: &mut Command) {
    generate(shell, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

/// Runs the completions command.
///
/// # Errors
///
/// Currently infallible; returns `Ok(ExitCode::SUCCESS)`.
pub fn run(shell: Shell, cmd: &mut Command) -> Result<ExitCode> {
    info!("generating {shell} completions");
    generate_completions(shell, cmd);
    Ok(ExitCode::SUCCESS)
}
