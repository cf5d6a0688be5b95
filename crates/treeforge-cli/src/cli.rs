//! CLI argument definitions.
//!
//! Defines the command-line interface structure using clap:
//! - `Cli` - Main CLI entry point with global flags
//! - `Commands` - Available subcommands

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use treeforge_core::DEFAULT_INDENT_WIDTH;

/// Treeforge - create project structures from ASCII tree diagrams.
///
/// Reads a tree diagram (the kind `tree` prints, or plain indentation),
/// and turns it into real directories and files.
#[derive(Parser, Debug)]
#[command(name = "treeforge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (json, text, pretty)
    #[arg(long = "format", global = true, default_value = "pretty")]
    pub format: String,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the declared hierarchy on the filesystem.
    ///
    /// Parses the diagram, asks for one confirmation (unless `--yes` or
    /// `--dry-run`), then creates every directory and file depth-first.
    /// Existing entries are left alone; files with a matching template
    /// are (re)filled from it.
    ///
    /// # Examples
    ///
    /// ```bash
    /// # From a file, previewing first
    /// treeforge create layout.txt --dry-run
    ///
    /// # From stdin, unattended, with templates and an export
    /// tree | treeforge create --yes \
    ///     --templates ~/.config/treeforge/templates \
    ///     --export structure.json
    ///
    /// # Skip generated artifacts
    /// treeforge create layout.txt --exclude '^build' --exclude '\.pyc$'
    /// ```
    Create(CreateArgs),

    /// Parse a diagram and print its structure without touching the disk.
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Normalized tree view
    /// treeforge inspect layout.txt
    ///
    /// # Machine-readable
    /// treeforge inspect layout.txt --format json
    /// ```
    Inspect(InspectArgs),

    /// Generate shell completions.
    ///
    /// Generates completion scripts for various shells that can be
    /// sourced or saved to enable tab completion for this CLI.
    Completions {
        /// Target shell for completion generation
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the `create` subcommand.
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Diagram file to read; '-' or omitted reads stdin
    pub input: Option<PathBuf>,

    /// Simulate only: print intended actions without touching the disk
    #[arg(short = 'd', long)]
    pub dry_run: bool,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Exclusion pattern matched against root-relative paths (repeatable)
    #[arg(long = "exclude", value_name = "REGEX", num_args = 1)]
    pub exclude: Vec<String>,

    /// Directory of template files applied by file name
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// Write the parsed tree as JSON to this path
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Indent width for diagrams drawn without tree glyphs
    #[arg(long, value_name = "N", default_value_t = DEFAULT_INDENT_WIDTH)]
    pub indent_width: usize,

    /// Base directory the root entry is created under
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub dest: PathBuf,
}

/// Arguments for the `inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Diagram file to read; '-' or omitted reads stdin
    pub input: Option<PathBuf>,

    /// Indent width for diagrams drawn without tree glyphs
    #[arg(long, value_name = "N", default_value_t = DEFAULT_INDENT_WIDTH)]
    pub indent_width: usize,
}
