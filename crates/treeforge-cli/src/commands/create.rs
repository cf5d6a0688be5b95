//! The `create` subcommand: parse a diagram and materialize it.

use crate::cli::CreateArgs;
use crate::commands::common::read_diagram;
use crate::formatters::{json, text};
use anyhow::{Context, Result};
use colored::Colorize;
use dialoguer::Confirm;
use serde::Serialize;
use tracing::warn;
use treeforge_core::cli::{ExitCode, OutputFormat};
use treeforge_core::{
    Action, ExcludeSet, MaterializeOptions, MaterializeReport, Materializer, Parser, Summary,
    TemplateStore, Tree, write_export,
};

/// Machine-readable view of a whole run.
#[derive(Serialize)]
struct RunOutput<'a> {
    actions: &'a [Action],
    summary: Summary,
    outcome: treeforge_core::Outcome,
    duplicates_ignored: usize,
}

/// Runs the create command.
///
/// # Errors
///
/// Returns an error for unreadable input, invalid exclusion patterns, a
/// missing templates directory, or a malformed diagram. Per-node I/O
/// failures and a failed export are warnings, not errors.
pub fn run(args: &CreateArgs, format: OutputFormat) -> Result<ExitCode> {
    let raw = read_diagram(args.input.as_deref())?;

    // Configuration errors surface before any parsing.
    let excludes = ExcludeSet::compile(&args.exclude)?;
    let templates = args
        .templates
        .as_ref()
        .map(TemplateStore::load)
        .transpose()
        .context("failed to load templates")?;

    let tree = Parser::new()
        .with_indent_width(args.indent_width)
        .parse(&raw)
        .context("failed to parse diagram")?;

    let options = MaterializeOptions::new()
        .with_dry_run(args.dry_run)
        .with_confirmation(!args.yes);
    let mut materializer = Materializer::new(&tree)
        .with_options(options)
        .with_excludes(excludes)
        .with_base(&args.dest);
    if let Some(store) = templates.as_ref() {
        materializer = materializer.with_templates(store);
    }

    let entries = tree.node_count();
    let root_path = args.dest.join(tree.name(tree.root()));
    let report = materializer.run(|| {
        Confirm::new()
            .with_prompt(format!(
                "Create {entries} entries under '{}'?",
                root_path.display()
            ))
            .default(false)
            .interact()
            .unwrap_or(false)
    });

    if report.is_cancelled() {
        println!("{}", "Cancelled.".yellow());
        return Ok(ExitCode::CANCELLED);
    }

    match format {
        OutputFormat::Pretty => print_pretty(&report, &tree, args.dry_run),
        OutputFormat::Json => println!(
            "{}",
            json::format(&RunOutput {
                actions: &report.actions,
                summary: report.summary,
                outcome: report.outcome,
                duplicates_ignored: tree.duplicates_ignored(),
            })?
        ),
        OutputFormat::Text => println!(
            "{}",
            text::format(&RunOutput {
                actions: &report.actions,
                summary: report.summary,
                outcome: report.outcome,
                duplicates_ignored: tree.duplicates_ignored(),
            })?
        ),
    }

    if let Some(path) = &args.export {
        match write_export(&tree, path) {
            Ok(()) => {
                if format == OutputFormat::Pretty {
                    println!("{} export {}", "✓".green().bold(), path.display());
                }
            }
            Err(err) => {
                warn!(error = %err, "failed to write export");
                eprintln!(
                    "{} failed to write export to {}: {err}",
                    "warning:".yellow().bold(),
                    path.display()
                );
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn print_pretty(report: &MaterializeReport, tree: &Tree, dry_run: bool) {
    for action in &report.actions {
        print_action(action, dry_run);
    }

    println!();
    println!("{}", "Summary".bold().cyan());
    println!("{}", "─".repeat(40));
    println!(
        "  {} {}",
        "Directories:".bold(),
        report.summary.dirs_created.to_string().yellow()
    );
    println!(
        "  {} {}",
        "Files:      ".bold(),
        report.summary.files_created.to_string().yellow()
    );
    println!(
        "  {} {}",
        "Skipped:    ".bold(),
        report.summary.skipped.to_string().yellow()
    );
    if tree.duplicates_ignored() > 0 {
        println!(
            "  {} {}",
            "Duplicates: ".bold(),
            tree.duplicates_ignored().to_string().dimmed()
        );
    }
    if report.summary.io_errors > 0 {
        println!(
            "  {} {}",
            "Failures:   ".bold(),
            report.summary.io_errors.to_string().red()
        );
    }
}

fn print_action(action: &Action, dry_run: bool) {
    match action {
        Action::CreateDir { path } => {
            if dry_run {
                println!("{} mkdir {}", "[dry-run]".blue(), path.display());
            } else {
                println!("{} dir   {}", "✓".green().bold(), path.display());
            }
        }
        Action::CreateFile { path, templated } => {
            let verb = if *templated { "write" } else { "touch" };
            if dry_run {
                println!("{} {verb} {}", "[dry-run]".blue(), path.display());
            } else {
                println!("{} file  {}", "✓".green().bold(), path.display());
            }
        }
        Action::Skip { path } => {
            println!("{} skip  {}", "−".dimmed(), path.display().to_string().dimmed());
        }
        Action::Failed { path, message } => {
            println!("{} {} ({message})", "✗".red().bold(), path.display());
        }
    }
}
