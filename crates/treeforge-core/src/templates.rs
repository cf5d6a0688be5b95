//! Per-filename template bodies.
//!
//! A [`TemplateStore`] maps final path-segment names (`README.md`,
//! `main.py`) to file bodies. The materializer consults it for every file
//! node: a hit is written verbatim, a miss degrades to a bare touch.
//!
//! # Examples
//!
//! ```
//! use treeforge_core::TemplateStore;
//!
//! let mut store = TemplateStore::new();
//! store.insert("README.md", "# New Project\n");
//!
//! assert_eq!(store.content_for("README.md"), Some("# New Project\n"));
//! assert_eq!(store.content_for("main.py"), None);
//! ```

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Template bodies keyed by file name.
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    templates: HashMap<String, String>,
}

impl TemplateStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every regular file under `dir`, keyed by its file name.
    ///
    /// The walk is recursive; nested layout inside the templates directory
    /// is ignored, only final names matter. When two files share a name,
    /// the first one encountered wins and the duplicate is logged at debug
    /// level. Files that cannot be read are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplatesDirNotFound`] when `dir` is missing or
    /// not a directory, a configuration error raised before parsing.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(Error::TemplatesDirNotFound {
                path: dir.to_path_buf(),
            });
        }

        let mut store = Self::new();
        for entry in WalkDir::new(dir).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(error = %err, "skipping unreadable templates entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            match fs::read_to_string(entry.path()) {
                Ok(body) => {
                    if !store.insert(name.clone(), body) {
                        debug!(name, "ignoring duplicate template; first occurrence wins");
                    }
                }
                Err(err) => {
                    warn!(path = %entry.path().display(), error = %err, "skipping unreadable template");
                }
            }
        }
        Ok(store)
    }

    /// Inserts a template body, keeping the first occurrence on conflict.
    ///
    /// Returns `true` when the body was stored, `false` when an earlier
    /// entry with the same name already existed.
    pub fn insert(&mut self, name: impl Into<String>, body: impl Into<String>) -> bool {
        let name = name.into();
        if self.templates.contains_key(&name) {
            return false;
        }
        self.templates.insert(name, body.into());
        true
    }

    /// Looks up the body for a file name.
    #[must_use]
    pub fn content_for(&self, name: &str) -> Option<&str> {
        self.templates.get(name).map(String::as_str)
    }

    /// Number of stored templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns `true` when no templates are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
