//! Output formatters for CLI commands.
//!
//! JSON and text modes serialize through serde for machine consumption;
//! the pretty mode re-renders a parsed tree as a colorized diagram.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use treeforge_core::ExportNode;

/// JSON output formatting.
pub mod json {
    use super::{Result, Serialize};

    /// Format data as pretty-printed JSON.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let json = serde_json::to_string_pretty(data)?;
        Ok(json)
    }

    /// Format data as compact JSON (no formatting).
    pub fn format_compact<T: Serialize>(data: &T) -> Result<String> {
        let json = serde_json::to_string(data)?;
        Ok(json)
    }
}

/// Plain text output formatting.
pub mod text {
    use super::{Result, Serialize, json};

    /// Format data as a single machine-readable line.
    ///
    /// Suitable for piping to other commands or scripts.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        json::format_compact(data)
    }
}

/// Renders a parsed tree back into a colorized diagram.
///
/// Directories are shown bold blue with a trailing `/`; files plain.
/// The output carries no trailing newline.
#[must_use]
pub fn render_tree(root: &ExportNode) -> String {
    let mut out = String::new();
    out.push_str(&entry_label(root));
    if let Some(children) = &root.children {
        render_children(children, "", &mut out);
    }
    out
}

fn render_children(children: &[ExportNode], prefix: &str, out: &mut String) {
    for (index, child) in children.iter().enumerate() {
        let last = index + 1 == children.len();
        out.push('\n');
        out.push_str(prefix);
        out.push_str(if last { "└── " } else { "├── " });
        out.push_str(&entry_label(child));
        if let Some(grandchildren) = &child.children {
            let deeper = format!("{prefix}{}", if last { "    " } else { "│   " });
            render_children(grandchildren, &deeper, out);
        }
    }
}

fn entry_label(node: &ExportNode) -> String {
    if node.is_dir {
        format!("{}/", node.name).blue().bold().to_string()
    } else {
        node.name.clone()
    }
}
