//! Filesystem materialization of a parsed [`Tree`].
//!
//! A single synchronous depth-first pre-order traversal turns the tree
//! into real directories and files. The engine never prints or colors
//! anything itself: it returns ordered [`Action`] records and a
//! [`Summary`] so presentation stays a caller concern. Per-node I/O
//! failures degrade to warnings; siblings and deeper entries are still
//! attempted.
//!
//! # Examples
//!
//! ```
//! use treeforge_core::{Materializer, MaterializeOptions, Parser};
//!
//! let tree = Parser::new().parse("root\n├── src/\n└── README.md").unwrap();
//! let report = Materializer::new(&tree)
//!     .with_options(MaterializeOptions::new().with_dry_run(true))
//!     .run(|| true);
//!
//! assert_eq!(report.summary.dirs_created, 2);
//! assert_eq!(report.summary.files_created, 1);
//! ```

use crate::error::{Error, Result};
use crate::node::{NodeId, Tree};
use crate::templates::TemplateStore;
use regex::Regex;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Policy switches for a materialization run.
#[derive(Debug, Clone, Copy)]
pub struct MaterializeOptions {
    /// Describe intended actions without touching the filesystem.
    pub dry_run: bool,
    /// Require one affirmative response before mutating anything.
    pub require_confirmation: bool,
}

impl MaterializeOptions {
    /// Creates the default policy: real run, confirmation required.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            dry_run: false,
            require_confirmation: true,
        }
    }

    /// Sets the dry-run flag.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Sets whether a confirmation is required before mutation.
    #[must_use]
    pub const fn with_confirmation(mut self, required: bool) -> Self {
        self.require_confirmation = required;
        self
    }
}

impl Default for MaterializeOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordered set of exclusion patterns.
///
/// Patterns are regular expressions matched against each node's
/// root-relative path (`/`-joined, empty for the root itself).
///
/// # Examples
///
/// ```
/// use treeforge_core::ExcludeSet;
///
/// let excludes = ExcludeSet::compile(["^build/", r"\.pyc$"]).unwrap();
/// assert!(excludes.matches("build/out.o"));
/// assert!(excludes.matches("src/cache.pyc"));
/// assert!(!excludes.matches("src/main.py"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExcludeSet {
    patterns: Vec<Regex>,
}

impl ExcludeSet {
    /// Compiles patterns in caller order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] for the first pattern that fails
    /// to compile; this is a configuration error raised before parsing.
    pub fn compile<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| {
                Regex::new(p.as_ref()).map_err(|source| Error::InvalidPattern {
                    pattern: p.as_ref().to_owned(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// Returns `true` when no patterns are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Returns `true` if any pattern matches the root-relative path.
    #[must_use]
    pub fn matches(&self, relative_path: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(relative_path))
    }
}

/// One record per visited node, in traversal (pre-)order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    /// A directory was created (or would be, on a dry run).
    CreateDir {
        /// Filesystem path of the directory
        path: PathBuf,
    },
    /// A file was created or filled (or would be, on a dry run).
    CreateFile {
        /// Filesystem path of the file
        path: PathBuf,
        /// Whether template content was written
        templated: bool,
    },
    /// The node matched an exclusion pattern; no creation was attempted.
    Skip {
        /// Filesystem path of the excluded node
        path: PathBuf,
    },
    /// The node's creation failed; traversal continued.
    Failed {
        /// Filesystem path of the failing node
        path: PathBuf,
        /// Rendered cause
        message: String,
    },
}

/// How a run ended.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Traversal ran to completion.
    Completed,
    /// The confirmation gate was declined; zero mutations happened.
    Cancelled,
}

/// Counters reported after a traversal.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct Summary {
    /// Directories created (or planned, on a dry run)
    pub dirs_created: usize,
    /// Files created or filled (or planned, on a dry run)
    pub files_created: usize,
    /// Entries skipped by exclusion patterns
    pub skipped: usize,
    /// Per-node I/O failures tolerated during the traversal
    pub io_errors: usize,
}

/// Result of a materialization run.
#[derive(Debug, Clone, Serialize)]
pub struct MaterializeReport {
    /// Per-node records in traversal order
    pub actions: Vec<Action>,
    /// Aggregated counters
    pub summary: Summary,
    /// Completion state
    pub outcome: Outcome,
}

impl MaterializeReport {
    /// Returns `true` if the run was declined at the confirmation gate.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.outcome == Outcome::Cancelled
    }
}

/// Depth-first materialization engine.
///
/// Built over a parsed, read-only [`Tree`]; the confirmation capability is
/// injected as a closure so the engine is testable without interactive
/// input.
///
/// # Examples
///
/// ```
/// use treeforge_core::{ExcludeSet, Materializer, MaterializeOptions, Parser};
///
/// let tree = Parser::new().parse("app\n└── target/").unwrap();
/// let report = Materializer::new(&tree)
///     .with_options(MaterializeOptions::new().with_dry_run(true))
///     .with_excludes(ExcludeSet::compile(["^target$"]).unwrap())
///     .run(|| true);
///
/// assert_eq!(report.summary.skipped, 1);
/// ```
#[derive(Debug)]
pub struct Materializer<'a> {
    tree: &'a Tree,
    options: MaterializeOptions,
    excludes: ExcludeSet,
    templates: Option<&'a TemplateStore>,
    base: PathBuf,
}

impl<'a> Materializer<'a> {
    /// Creates an engine with default policy over `tree`.
    ///
    /// Defaults: real run, confirmation required, no exclusions, no
    /// templates, current directory as base.
    #[must_use]
    pub fn new(tree: &'a Tree) -> Self {
        Self {
            tree,
            options: MaterializeOptions::new(),
            excludes: ExcludeSet::default(),
            templates: None,
            base: PathBuf::from("."),
        }
    }

    /// Replaces the policy switches.
    #[must_use]
    pub fn with_options(mut self, options: MaterializeOptions) -> Self {
        self.options = options;
        self
    }

    /// Installs compiled exclusion patterns.
    #[must_use]
    pub fn with_excludes(mut self, excludes: ExcludeSet) -> Self {
        self.excludes = excludes;
        self
    }

    /// Installs a template store consulted per file name.
    #[must_use]
    pub fn with_templates(mut self, templates: &'a TemplateStore) -> Self {
        self.templates = Some(templates);
        self
    }

    /// Sets the base directory the root node materializes under.
    #[must_use]
    pub fn with_base(mut self, base: impl Into<PathBuf>) -> Self {
        self.base = base.into();
        self
    }

    /// Runs the traversal.
    ///
    /// When confirmation is required and this is not a dry run, `confirm`
    /// is invoked exactly once before any mutation; anything but `true`
    /// aborts with [`Outcome::Cancelled`] and an empty report. Dry runs
    /// never consult the gate.
    pub fn run(&self, mut confirm: impl FnMut() -> bool) -> MaterializeReport {
        if self.options.require_confirmation && !self.options.dry_run && !confirm() {
            return MaterializeReport {
                actions: Vec::new(),
                summary: Summary::default(),
                outcome: Outcome::Cancelled,
            };
        }

        let mut report = MaterializeReport {
            actions: Vec::new(),
            summary: Summary::default(),
            outcome: Outcome::Completed,
        };
        self.visit(self.tree.root(), &mut report);
        report
    }

    fn visit(&self, id: NodeId, report: &mut MaterializeReport) {
        let path = self.base.join(self.tree.path(id));
        if self.excludes.matches(&self.tree.relative_path(id)) {
            report.summary.skipped += 1;
            report.actions.push(Action::Skip { path });
        } else if self.tree.is_dir(id) {
            self.create_dir(&path, report);
        } else {
            self.create_file(id, &path, report);
        }

        // Children are always attempted, even beneath an excluded or
        // failed directory.
        for &child in self.tree.children(id) {
            self.visit(child, report);
        }
    }

    fn create_dir(&self, path: &Path, report: &mut MaterializeReport) {
        if !self.options.dry_run {
            if let Err(err) = fs::create_dir_all(path) {
                warn!(path = %path.display(), error = %err, "failed to create directory");
                report.summary.io_errors += 1;
                report.actions.push(Action::Failed {
                    path: path.to_path_buf(),
                    message: err.to_string(),
                });
                return;
            }
        }
        report.summary.dirs_created += 1;
        report.actions.push(Action::CreateDir {
            path: path.to_path_buf(),
        });
    }

    fn create_file(&self, id: NodeId, path: &Path, report: &mut MaterializeReport) {
        let template = self
            .templates
            .and_then(|store| store.content_for(self.tree.name(id)));

        if !self.options.dry_run {
            if let Err(err) = self.write_file(path, template) {
                warn!(path = %path.display(), error = %err, "failed to create file");
                report.summary.io_errors += 1;
                report.actions.push(Action::Failed {
                    path: path.to_path_buf(),
                    message: err.to_string(),
                });
                return;
            }
        }
        report.summary.files_created += 1;
        report.actions.push(Action::CreateFile {
            path: path.to_path_buf(),
            templated: template.is_some(),
        });
    }

    /// Writes template content, or touches the file without truncating it.
    fn write_file(&self, path: &Path, template: Option<&str>) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        match template {
            Some(body) => fs::write(path, body),
            None => OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map(|_| ()),
        }
    }
}
