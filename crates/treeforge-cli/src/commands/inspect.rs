//! The `inspect` subcommand: parse a diagram and print its structure.

use crate::cli::InspectArgs;
use crate::commands::common::read_diagram;
use crate::formatters::{json, render_tree, text};
use anyhow::{Context, Result};
use treeforge_core::cli::{ExitCode, OutputFormat};
use treeforge_core::{ExportNode, Parser};

/// Runs the inspect command.
///
/// # Errors
///
/// Returns an error for unreadable input or a malformed diagram.
pub fn run(args: &InspectArgs, format: OutputFormat) -> Result<ExitCode> {
    let raw = read_diagram(args.input.as_deref())?;
    let tree = Parser::new()
        .with_indent_width(args.indent_width)
        .parse(&raw)
        .context("failed to parse diagram")?;

    let export = ExportNode::from_tree(&tree);
    let rendered = match format {
        OutputFormat::Pretty => render_tree(&export),
        OutputFormat::Json => json::format(&export)?,
        OutputFormat::Text => text::format(&export)?,
    };
    println!("{rendered}");

    Ok(ExitCode::SUCCESS)
}
