//! Helpers shared by subcommands.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::io::{self, BufRead, IsTerminal};
use std::path::Path;

/// Reads the diagram from a file, or from stdin for `-`/no argument.
///
/// Interactive stdin is prompted on stderr and ends at the first blank
/// line; piped stdin is read to EOF.
///
/// # Errors
///
/// Returns an error when the file or stream cannot be read.
pub fn read_diagram(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("failed to read diagram from {}", path.display())),
        _ => read_stdin(),
    }
}

fn read_stdin() -> Result<String> {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        let mut buffer = String::new();
        io::Read::read_to_string(&mut stdin.lock(), &mut buffer)
            .context("failed to read diagram from stdin")?;
        return Ok(buffer);
    }

    eprintln!(
        "{}",
        "Enter the project structure (finish with an empty line):".cyan()
    );
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read diagram from stdin")?;
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}
