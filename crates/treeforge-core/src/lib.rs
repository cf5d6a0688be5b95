//! Tree diagram parsing and filesystem materialization.
//!
//! This crate is the engine behind the `treeforge` CLI: it parses an
//! ASCII tree diagram into an immutable node arena and materializes that
//! hierarchy onto a real filesystem. Directories are created idempotently,
//! files are touched or filled from templates, duplicates collapse, and
//! excluded entries are skipped.
//!
//! # Architecture
//!
//! Control flow is strictly linear:
//!
//! - [`Parser`] - raw text to a validated [`Tree`]
//! - [`Materializer`] - tree plus policy to filesystem effects and a
//!   [`MaterializeReport`]
//! - [`ExportNode`] - optional structured view of the parsed tree
//!
//! # Examples
//!
//! ```
//! use treeforge_core::{Materializer, MaterializeOptions, Parser};
//!
//! let tree = Parser::new()
//!     .parse("app\n├── src/\n│   └── main.rs\n└── Cargo.toml")
//!     .unwrap();
//!
//! let report = Materializer::new(&tree)
//!     .with_options(MaterializeOptions::new().with_dry_run(true))
//!     .run(|| true);
//!
//! assert_eq!(report.summary.dirs_created, 2);
//! assert_eq!(report.summary.files_created, 2);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod error;
mod export;
mod materialize;
mod node;
mod parser;
mod templates;

pub mod cli;

pub use error::{Error, Result};
pub use export::{ExportNode, write_export};
pub use materialize::{
    Action, ExcludeSet, MaterializeOptions, MaterializeReport, Materializer, Outcome, Summary,
};
pub use node::{NodeId, NodeKind, Tree};
pub use parser::{
    DEFAULT_COMMENT_MARKER, DEFAULT_INDENT_WIDTH, GLYPH_BRANCH, GLYPH_BRANCH_LAST,
    GLYPH_HORIZONTAL, GLYPH_VERTICAL, Parser,
};
pub use templates::TemplateStore;
