//! Treeforge CLI library.
//!
//! Exposes the argument surface, subcommand handlers, and output
//! formatters so they can be exercised from integration tests.

pub mod cli;
pub mod commands;
pub mod formatters;

pub use cli::{Cli, Commands, CreateArgs, InspectArgs};
