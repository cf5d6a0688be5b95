//! Error types for tree parsing and materialization.
//!
//! Structure errors (malformed input) and configuration errors (bad
//! exclusion patterns, missing templates directory) are the only fatal
//! failures in the system; both are raised before any filesystem mutation.
//! Per-node I/O failures during materialization are deliberately *not*
//! represented here: the materializer degrades them to warnings and
//! counters so a single failed entry never aborts the traversal.
//!
//! # Examples
//!
//! ```
//! use treeforge_core::Parser;
//!
//! let err = Parser::new().parse("").unwrap_err();
//! assert!(err.is_structure_error());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for treeforge operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Input contained no entries.
    ///
    /// Raised when the diagram is empty, or reduced to nothing after
    /// comment stripping and art-line filtering.
    #[error("structure error: input contains no entries")]
    EmptyInput,

    /// The root line produced an empty name.
    #[error("structure error: line {line}: root name is empty")]
    EmptyRootName {
        /// 1-based line number in the raw input
        line: usize,
    },

    /// A line's indentation level exceeds the current nesting depth.
    ///
    /// A line at level `n` requires an open directory at level `n - 1`;
    /// skipping levels is malformed input.
    #[error(
        "structure error: line {line}: level {level} exceeds maximum permitted level {max_level}"
    )]
    DepthExceeded {
        /// 1-based line number in the raw input
        line: usize,
        /// Level the line attempted to occupy
        level: usize,
        /// Deepest level currently permitted
        max_level: usize,
    },

    /// An exclusion pattern failed to compile.
    #[error("invalid exclusion pattern '{pattern}'")]
    InvalidPattern {
        /// The pattern as supplied by the caller
        pattern: String,
        /// Underlying regex compilation error
        #[source]
        source: regex::Error,
    },

    /// The configured templates directory does not exist.
    #[error("templates directory not found: {path}")]
    TemplatesDirNotFound {
        /// The missing directory path
        path: PathBuf,
    },

    /// Invalid CLI argument value.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Serializing the structured export failed.
    #[error("failed to serialize tree export")]
    Serialization {
        /// Underlying serde error
        #[source]
        source: serde_json::Error,
    },

    /// An I/O failure outside the best-effort traversal.
    ///
    /// Covers writing the export file; callers decide whether it is
    /// fatal.
    #[error("I/O error on {path}")]
    Io {
        /// The path the operation targeted
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Returns `true` if this is a structure error (malformed input).
    ///
    /// # Examples
    ///
    /// ```
    /// use treeforge_core::Error;
    ///
    /// assert!(Error::EmptyInput.is_structure_error());
    /// ```
    #[must_use]
    pub const fn is_structure_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput | Self::EmptyRootName { .. } | Self::DepthExceeded { .. }
        )
    }

    /// Returns `true` if this is a configuration error.
    ///
    /// Configuration errors are detected before parsing begins.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeforge_core::ExcludeSet;
    ///
    /// let err = ExcludeSet::compile(["("]).unwrap_err();
    /// assert!(err.is_config_error());
    /// ```
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidPattern { .. } | Self::TemplatesDirNotFound { .. }
        )
    }
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structure_error_detection() {
        let err = Error::DepthExceeded {
            line: 4,
            level: 3,
            max_level: 1,
        };
        assert!(err.is_structure_error());
        assert!(!err.is_config_error());
    }

    #[test]
    fn test_config_error_detection() {
        let err = Error::TemplatesDirNotFound {
            path: PathBuf::from("/nope"),
        };
        assert!(err.is_config_error());
        assert!(!err.is_structure_error());
    }

    #[test]
    fn test_depth_exceeded_display_names_the_line() {
        let err = Error::DepthExceeded {
            line: 7,
            level: 2,
            max_level: 0,
        };
        let display = format!("{err}");
        assert!(display.contains("line 7"));
        assert!(display.contains("level 2"));
        assert!(display.contains("maximum permitted level 0"));
    }

    #[test]
    fn test_io_error_is_neither_structure_nor_config() {
        let err = Error::Io {
            path: PathBuf::from("tree.txt"),
            source: std::io::Error::other("boom"),
        };
        assert!(!err.is_structure_error());
        assert!(!err.is_config_error());
    }
}
