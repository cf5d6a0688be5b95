//! ASCII tree diagram parser.
//!
//! Turns a multi-line tree diagram into a [`Tree`]. Nesting depth is read
//! from the box-drawing prefix when one is present (`│`, `├`, `└`, `─`),
//! falling back to plain leading-whitespace indentation otherwise. A line
//! may declare a whole nested chain at once (`services/auth/controllers`),
//! and a trailing `/` marks an entry as a directory.
//!
//! # Examples
//!
//! ```
//! use treeforge_core::Parser;
//!
//! let tree = Parser::new()
//!     .parse("root\n├── src/\n│   └── main.py\n└── README.md")
//!     .unwrap();
//!
//! assert_eq!(tree.name(tree.root()), "root");
//! assert_eq!(tree.children(tree.root()).len(), 2);
//! ```

use crate::error::{Error, Result};
use crate::node::{NodeId, Tree};
use tracing::warn;

/// Vertical continuation glyph (`│`).
pub const GLYPH_VERTICAL: char = '│';
/// Branch glyph for an entry with more siblings below (`├`).
pub const GLYPH_BRANCH: char = '├';
/// Branch glyph for the last sibling at its depth (`└`).
pub const GLYPH_BRANCH_LAST: char = '└';
/// Horizontal fill glyph (`─`).
pub const GLYPH_HORIZONTAL: char = '─';

/// Default indent width for diagrams drawn without glyphs.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Default inline comment marker.
pub const DEFAULT_COMMENT_MARKER: char = '#';

fn is_tree_glyph(c: char) -> bool {
    matches!(
        c,
        GLYPH_VERTICAL | GLYPH_BRANCH | GLYPH_BRANCH_LAST | GLYPH_HORIZONTAL
    )
}

/// Parser for ASCII tree diagrams.
///
/// Stateless between runs; configuration covers the indent width used for
/// glyph-free input and the inline comment marker.
///
/// # Examples
///
/// ```
/// use treeforge_core::Parser;
///
/// let parser = Parser::new().with_indent_width(2);
/// let tree = parser.parse("root\nsrc/\n  lib.rs").unwrap();
/// assert_eq!(tree.node_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Parser {
    indent_width: usize,
    comment_marker: char,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Creates a parser with the default indent width (4) and comment
    /// marker (`#`).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
            comment_marker: DEFAULT_COMMENT_MARKER,
        }
    }

    /// Sets the indent width used when a line carries no branch glyph.
    ///
    /// Widths below 1 are clamped to 1.
    #[must_use]
    pub const fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = if width == 0 { 1 } else { width };
        self
    }

    /// Sets the inline comment marker.
    #[must_use]
    pub const fn with_comment_marker(mut self, marker: char) -> Self {
        self.comment_marker = marker;
        self
    }

    /// Parses a diagram into a [`Tree`].
    ///
    /// # Errors
    ///
    /// Returns a structure error when the input is empty (or reduced to
    /// nothing by comment/art filtering), when the root name is empty, or
    /// when a line's level exceeds the current nesting depth. All structure
    /// errors carry 1-based line numbers referring to the raw input.
    pub fn parse(&self, input: &str) -> Result<Tree> {
        let mut lines = input.lines().enumerate().filter_map(|(idx, raw)| {
            let line = self.strip_comment(raw);
            if line.trim().is_empty() || is_pure_art(line) {
                None
            } else {
                Some((idx + 1, line))
            }
        });

        let (root_lineno, root_line) = lines.next().ok_or(Error::EmptyInput)?;
        let root_name = root_line.trim().trim_end_matches(['/', ' ']);
        if root_name.is_empty() {
            return Err(Error::EmptyRootName { line: root_lineno });
        }

        let mut tree = Tree::new(root_name);
        let mut stack: Vec<NodeId> = vec![tree.root()];

        for (lineno, line) in lines {
            self.insert_line(&mut tree, &mut stack, lineno, line)?;
        }

        Ok(tree)
    }

    /// Inserts one surviving line's entries into the tree.
    fn insert_line(
        &self,
        tree: &mut Tree,
        stack: &mut Vec<NodeId>,
        lineno: usize,
        line: &str,
    ) -> Result<()> {
        let (level, rest) = self.split_level(line);
        let is_dir = line.trim_end().ends_with('/');

        let name = rest
            .trim_start_matches(|c: char| is_tree_glyph(c) || c.is_whitespace())
            .trim_end();
        let name = name.strip_suffix('/').unwrap_or(name);
        if name.is_empty() {
            return Ok(());
        }

        if level + 1 > stack.len() {
            return Err(Error::DepthExceeded {
                line: lineno,
                level,
                max_level: stack.len() - 1,
            });
        }
        stack.truncate(level + 1);
        let mut parent = stack[level];

        // Inline nested paths: every segment but the last is an implied
        // intermediate directory.
        let segments: Vec<&str> = name
            .split('/')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        let Some((&last, intermediates)) = segments.split_last() else {
            return Ok(());
        };

        for &segment in intermediates {
            let id = tree.attach(parent, segment, true);
            if !tree.is_dir(id) {
                warn!(
                    line = lineno,
                    segment, "cannot descend through an existing file; dropping rest of line"
                );
                return Ok(());
            }
            stack.push(id);
            parent = id;
        }

        let id = tree.attach(parent, last, is_dir);
        if tree.is_dir(id) {
            stack.push(id);
        }
        Ok(())
    }

    /// Splits off the level prefix, returning `(level, remainder)`.
    ///
    /// With a branch glyph present, the cut sits at the first `├`/`└` and
    /// the level is the count of `│` before it. Without one, the cut is the
    /// leading-whitespace run and the level is its length divided by the
    /// configured indent width.
    fn split_level<'a>(&self, line: &'a str) -> (usize, &'a str) {
        if let Some((cut, _)) = line
            .char_indices()
            .find(|&(_, c)| c == GLYPH_BRANCH || c == GLYPH_BRANCH_LAST)
        {
            let level = line[..cut].chars().filter(|&c| c == GLYPH_VERTICAL).count();
            (level, &line[cut..])
        } else {
            let mut chars = 0usize;
            let mut cut = line.len();
            for (byte, c) in line.char_indices() {
                if c.is_whitespace() {
                    chars += 1;
                } else {
                    cut = byte;
                    break;
                }
            }
            (chars / self.indent_width, &line[cut..])
        }
    }

    /// Removes an inline comment suffix, if any.
    fn strip_comment<'a>(&self, line: &'a str) -> &'a str {
        match line.find(self.comment_marker) {
            Some(idx) => &line[..idx],
            None => line,
        }
    }
}

/// Returns `true` for lines carrying no entry: only glyphs and whitespace.
fn is_pure_art(line: &str) -> bool {
    line.chars().all(|c| c.is_whitespace() || is_tree_glyph(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names_of_children(tree: &Tree, id: NodeId) -> Vec<String> {
        tree.children(id)
            .iter()
            .map(|&c| tree.name(c).to_owned())
            .collect()
    }

    #[test]
    fn test_parse_glyph_diagram() {
        let input = "root\n\
                     ├── src/\n\
                     │   ├── main.py\n\
                     │   └── utils.py\n\
                     └── README.md";
        let tree = Parser::new().parse(input).unwrap();

        assert_eq!(tree.name(tree.root()), "root");
        assert_eq!(names_of_children(&tree, tree.root()), ["src", "README.md"]);

        let src = tree.children(tree.root())[0];
        assert!(tree.is_dir(src));
        assert_eq!(names_of_children(&tree, src), ["main.py", "utils.py"]);

        let readme = tree.children(tree.root())[1];
        assert!(!tree.is_dir(readme));
    }

    #[test]
    fn test_parse_whitespace_indent_fallback() {
        // Without glyphs, the root's children sit at zero indentation and
        // each indent step opens one more level.
        let input = "root\nsrc/\n    lib.rs\nCargo.toml";
        let tree = Parser::new().parse(input).unwrap();
        assert_eq!(
            names_of_children(&tree, tree.root()),
            ["src", "Cargo.toml"]
        );
        let src = tree.children(tree.root())[0];
        assert_eq!(names_of_children(&tree, src), ["lib.rs"]);
    }

    #[test]
    fn test_custom_indent_width() {
        let input = "root\nsrc/\n  deep.txt";
        let tree = Parser::new().with_indent_width(2).parse(input).unwrap();
        let src = tree.children(tree.root())[0];
        assert_eq!(names_of_children(&tree, src), ["deep.txt"]);
    }

    #[test]
    fn test_indent_exceeding_depth_is_rejected() {
        // An indented child directly under the root skips level 0.
        let input = "root\n    orphan.txt";
        let err = Parser::new().parse(input).unwrap_err();
        assert!(matches!(
            err,
            Error::DepthExceeded {
                line: 2,
                level: 1,
                max_level: 0
            }
        ));
    }

    #[test]
    fn test_trailing_separator_forces_directory() {
        let tree = Parser::new().parse("root\n├── data.v2/").unwrap();
        let child = tree.children(tree.root())[0];
        assert_eq!(tree.name(child), "data.v2");
        assert!(tree.is_dir(child));
    }

    #[test]
    fn test_no_separator_is_a_file_even_without_suffix() {
        let tree = Parser::new().parse("root\n├── Dockerfile\n└── notes.txt").unwrap();
        let dockerfile = tree.children(tree.root())[0];
        let notes = tree.children(tree.root())[1];
        assert!(!tree.is_dir(dockerfile));
        assert!(!tree.is_dir(notes));
    }

    #[test]
    fn test_inline_nested_path() {
        let tree = Parser::new()
            .parse("root\n└── services/auth/controllers/")
            .unwrap();
        let services = tree.children(tree.root())[0];
        assert!(tree.is_dir(services));
        let auth = tree.children(services)[0];
        let controllers = tree.children(auth)[0];
        assert_eq!(tree.name(controllers), "controllers");
        assert!(tree.is_dir(controllers));
    }

    #[test]
    fn test_inline_nested_path_last_segment_file() {
        let tree = Parser::new().parse("root\n└── src/bin/main.rs").unwrap();
        let src = tree.children(tree.root())[0];
        let bin = tree.children(src)[0];
        let main = tree.children(bin)[0];
        assert!(tree.is_dir(bin));
        assert!(!tree.is_dir(main));
        assert_eq!(tree.relative_path(main), "src/bin/main.rs");
    }

    #[test]
    fn test_deeper_lines_nest_under_inline_tail() {
        let input = "root\n├── src/api/\n│   │   └── mod.rs";
        let tree = Parser::new().parse(input).unwrap();
        let src = tree.children(tree.root())[0];
        let api = tree.children(src)[0];
        assert_eq!(names_of_children(&tree, api), ["mod.rs"]);
    }

    #[test]
    fn test_comments_are_stripped() {
        let input = "root  # project root\n├── src/   # sources\n# a full-line comment\n└── README.md";
        let tree = Parser::new().parse(input).unwrap();
        assert_eq!(names_of_children(&tree, tree.root()), ["src", "README.md"]);
        assert_eq!(tree.name(tree.root()), "root");
    }

    #[test]
    fn test_pure_art_lines_are_ignored() {
        let input = "root\n│\n├── src/\n│   │\n└── README.md";
        let tree = Parser::new().parse(input).unwrap();
        assert_eq!(names_of_children(&tree, tree.root()), ["src", "README.md"]);
    }

    #[test]
    fn test_empty_input_is_a_structure_error() {
        let err = Parser::new().parse("").unwrap_err();
        assert!(matches!(err, Error::EmptyInput));
        assert!(err.is_structure_error());
    }

    #[test]
    fn test_all_comment_input_is_a_structure_error() {
        let err = Parser::new().parse("# one\n# two\n│\n").unwrap_err();
        assert!(matches!(err, Error::EmptyInput));
    }

    #[test]
    fn test_empty_root_name_is_a_structure_error() {
        let err = Parser::new().parse("/\n├── src/").unwrap_err();
        assert!(matches!(err, Error::EmptyRootName { line: 1 }));
    }

    #[test]
    fn test_over_deep_line_reports_line_number_and_levels() {
        let input = "root\n├── src/\n│   │   │   └── too_deep.rs";
        let err = Parser::new().parse(input).unwrap_err();
        match err {
            Error::DepthExceeded {
                line,
                level,
                max_level,
            } => {
                assert_eq!(line, 3);
                assert_eq!(level, 3);
                assert_eq!(max_level, 1);
            }
            other => panic!("expected DepthExceeded, got {other:?}"),
        }
    }

    #[test]
    fn test_line_numbers_count_filtered_lines() {
        // Comment and art lines still advance the reported line number.
        let input = "root\n# comment\n│\n│   │   └── deep.rs";
        let err = Parser::new().parse(input).unwrap_err();
        assert!(matches!(err, Error::DepthExceeded { line: 4, .. }));
    }

    #[test]
    fn test_children_under_file_are_rejected() {
        // `src` has no trailing separator, so it is a file and never joins
        // the directory stack.
        let input = "root\n├── src\n│   └── main.py";
        let err = Parser::new().parse(input).unwrap_err();
        assert!(matches!(err, Error::DepthExceeded { line: 3, .. }));
    }

    #[test]
    fn test_duplicate_siblings_collapse() {
        let input = "root\n├── src/\n│   └── a.py\n├── src/\n│   └── b.py";
        let tree = Parser::new().parse(input).unwrap();
        assert_eq!(names_of_children(&tree, tree.root()), ["src"]);
        let src = tree.children(tree.root())[0];
        assert_eq!(names_of_children(&tree, src), ["a.py", "b.py"]);
        assert_eq!(tree.duplicates_ignored(), 1);
    }

    #[test]
    fn test_root_trailing_separators_trimmed() {
        let tree = Parser::new().parse("root///  \n├── a.txt").unwrap();
        assert_eq!(tree.name(tree.root()), "root");
    }

    #[test]
    fn test_line_with_no_entry_is_skipped() {
        // A bare separator survives art filtering but yields no name.
        let input = "root\n├── src/\n├── /\n└── README.md";
        let tree = Parser::new().parse(input).unwrap();
        assert_eq!(names_of_children(&tree, tree.root()), ["src", "README.md"]);
    }

    #[test]
    fn test_custom_comment_marker() {
        let parser = Parser::new().with_comment_marker(';');
        let tree = parser.parse("root ; the root\n└── main.c").unwrap();
        assert_eq!(tree.name(tree.root()), "root");
        assert_eq!(names_of_children(&tree, tree.root()), ["main.c"]);
    }
}
