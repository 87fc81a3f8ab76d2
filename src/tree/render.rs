//! Prefixed line construction and the rendered result

use std::path::{Path, PathBuf};

use super::node::{self, TreeNode};

pub(crate) const BRANCH: &str = "├── ";
pub(crate) const LAST_BRANCH: &str = "└── ";
pub(crate) const PIPE_INDENT: &str = "│   ";
pub(crate) const BLANK_INDENT: &str = "    ";

const LINE_SEPARATOR: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Build one diagram line: accumulated indent, connector, name, and the
/// trailing `/` for directories.
pub(crate) fn entry_line(indent: &str, is_last: bool, name: &str, is_directory: bool) -> String {
    let connector = if is_last { LAST_BRANCH } else { BRANCH };
    let suffix = if is_directory { "/" } else { "" };
    format!("{indent}{connector}{name}{suffix}")
}

/// Indent carried to a directory's children: four spaces under a last
/// branch, a continuation bar otherwise.
pub(crate) fn child_indent(indent: &str, is_last: bool) -> String {
    if is_last {
        format!("{indent}{BLANK_INDENT}")
    } else {
        format!("{indent}{PIPE_INDENT}")
    }
}

fn root_line(root: &Path, print_root: bool) -> String {
    if print_root {
        format!("{}/", root.display())
    } else {
        "/".to_string()
    }
}

/// The outcome of one `generate` call: the ordered line buffer and the
/// materialized node hierarchy, both rooted at the generation root.
///
/// Append-only while the walk runs, immutable afterwards.
#[derive(Debug)]
pub struct RenderedTree {
    root_path: PathBuf,
    lines: Vec<String>,
    root: TreeNode,
}

impl RenderedTree {
    pub(crate) fn new(root_path: PathBuf, print_root: bool, root: TreeNode) -> Self {
        let lines = vec![root_line(&root_path, print_root)];
        Self {
            root_path,
            lines,
            root,
        }
    }

    pub(crate) fn push_line(&mut self, line: String) {
        self.lines.push(line);
    }

    pub(crate) fn attach(&mut self, path: &Path, is_directory: bool, is_expandable: bool) {
        node::create_or_get(
            &mut self.root,
            &self.root_path,
            path,
            is_directory,
            is_expandable,
        );
    }

    /// All lines joined with the platform line separator.
    pub fn text(&self) -> String {
        self.lines.join(LINE_SEPARATOR)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// Translate an absolute path to a `/`-separated path relative to the
    /// generation root (`.` for the root itself).
    pub fn relative_path(&self, absolute: impl AsRef<Path>) -> String {
        node::relative_to(&self.root_path, absolute.as_ref())
    }

    /// Translate a root-relative path back to an absolute one.
    pub fn absolute_path(&self, relative: &str) -> PathBuf {
        let relative = relative.trim();
        if relative.is_empty() || relative == "." {
            return self.root_path.clone();
        }
        let relative = relative.trim_start_matches("./");
        self.root_path.join(
            relative
                .replace('\\', "/")
                .split('/')
                .collect::<PathBuf>(),
        )
    }
}
