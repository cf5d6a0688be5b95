//! Command implementations for the treeforge CLI.
//!
//! Each command module parses nothing itself: it receives its clap
//! argument struct, runs the operation against `treeforge-core`, renders
//! output in the requested format, and returns a semantic exit code.

pub mod common;
pub mod completions;
pub mod create;
pub mod inspect;
