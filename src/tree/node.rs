//! Materialized tree nodes

use std::path::{Component, Path, PathBuf};

use serde::Serialize;

/// One filesystem entry in the materialized result.
///
/// Children are owned exclusively by their parent and kept in discovery
/// order (directories before files, each alphabetically sorted). Nodes are
/// created on first visit and never removed.
#[derive(Debug, Clone, Serialize)]
pub struct TreeNode {
    pub name: String,
    #[serde(rename = "path")]
    pub full_path: PathBuf,
    pub relative_path: String,
    pub is_directory: bool,
    /// Directory with at least one visible child under the filters active
    /// when the node was created; never re-evaluated afterwards.
    pub is_expandable: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub(crate) fn new(
        name: String,
        full_path: PathBuf,
        relative_path: String,
        is_directory: bool,
        is_expandable: bool,
    ) -> Self {
        Self {
            name,
            full_path,
            relative_path,
            is_directory,
            is_expandable,
            children: Vec::new(),
        }
    }

    /// Look up a direct child by name, case-insensitively.
    pub fn child(&self, name: &str) -> Option<&TreeNode> {
        self.children
            .iter()
            .find(|child| child.name.to_lowercase() == name.to_lowercase())
    }

    /// Resolve a `/`-separated relative path below this node. `.` and the
    /// empty string resolve to the node itself.
    pub fn find(&self, relative_path: &str) -> Option<&TreeNode> {
        let mut current = self;
        for segment in relative_path
            .replace('\\', "/")
            .split('/')
            .filter(|s| !s.is_empty() && *s != ".")
        {
            current = current.child(segment)?;
        }
        Some(current)
    }
}

/// Resolve or create the node for `path`, returning a mutable handle to it.
///
/// The parent chain is materialized from the root downwards, so a parent
/// node always exists before any of its children. Intermediate directories
/// created on the way are marked expandable. An existing same-named child
/// (case-insensitive) is returned as-is rather than duplicated.
pub(crate) fn create_or_get<'t>(
    root: &'t mut TreeNode,
    root_path: &Path,
    path: &Path,
    is_directory: bool,
    is_expandable: bool,
) -> &'t mut TreeNode {
    let segments: Vec<String> = match path.strip_prefix(root_path) {
        Ok(relative) => relative
            .components()
            .filter_map(|component| match component {
                Component::Normal(segment) => Some(segment.to_string_lossy().to_string()),
                _ => None,
            })
            .collect(),
        Err(_) => return root,
    };

    if segments.is_empty() {
        return root;
    }

    let total = segments.len();
    let mut current = root;
    let mut partial = root_path.to_path_buf();

    for (depth, segment) in segments.into_iter().enumerate() {
        partial.push(&segment);

        let position = current
            .children
            .iter()
            .position(|child| child.name.to_lowercase() == segment.to_lowercase());

        let index = match position {
            Some(index) => index,
            None => {
                let is_leaf = depth + 1 == total;
                let node = TreeNode::new(
                    segment,
                    partial.clone(),
                    relative_to(root_path, &partial),
                    if is_leaf { is_directory } else { true },
                    if is_leaf { is_expandable } else { true },
                );
                current.children.push(node);
                current.children.len() - 1
            }
        };

        current = &mut current.children[index];
    }

    current
}

/// Path relative to `root` with separators normalized to `/`; the root
/// itself maps to the literal `.` marker.
pub(crate) fn relative_to(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(relative) if relative.as_os_str().is_empty() => ".".to_string(),
        Ok(relative) => relative.to_string_lossy().replace('\\', "/"),
        Err(_) => path.to_string_lossy().replace('\\', "/"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root_node(root: &Path) -> TreeNode {
        TreeNode::new(
            "root".to_string(),
            root.to_path_buf(),
            ".".to_string(),
            true,
            true,
        )
    }

    #[test]
    fn test_root_path_resolves_to_root_node() {
        let root_path = PathBuf::from("/data/project");
        let mut root = root_node(&root_path);
        let node = create_or_get(&mut root, &root_path, &root_path, true, true);
        assert_eq!(node.relative_path, ".");
    }

    #[test]
    fn test_create_builds_parent_chain() {
        let root_path = PathBuf::from("/data/project");
        let mut root = root_node(&root_path);

        create_or_get(
            &mut root,
            &root_path,
            &root_path.join("src/lib/util.rs"),
            false,
            false,
        );

        let src = root.child("src").expect("src node");
        assert!(src.is_directory);
        assert!(src.is_expandable);
        assert_eq!(src.relative_path, "src");

        let lib = src.child("lib").expect("lib node");
        let util = lib.child("util.rs").expect("leaf node");
        assert!(!util.is_directory);
        assert_eq!(util.relative_path, "src/lib/util.rs");
    }

    #[test]
    fn test_lookup_is_idempotent() {
        let root_path = PathBuf::from("/data/project");
        let mut root = root_node(&root_path);
        let target = root_path.join("src");

        create_or_get(&mut root, &root_path, &target, true, false);
        create_or_get(&mut root, &root_path, &target, true, false);

        assert_eq!(root.children.len(), 1, "no duplicate sibling");
    }

    #[test]
    fn test_lookup_ignores_case() {
        let root_path = PathBuf::from("/data/project");
        let mut root = root_node(&root_path);

        create_or_get(&mut root, &root_path, &root_path.join("Src"), true, true);
        let node = create_or_get(&mut root, &root_path, &root_path.join("SRC"), true, true);

        assert_eq!(node.name, "Src", "first-created node wins");
        assert_eq!(root.children.len(), 1);
    }

    #[test]
    fn test_existing_node_keeps_its_flags() {
        let root_path = PathBuf::from("/data/project");
        let mut root = root_node(&root_path);

        create_or_get(&mut root, &root_path, &root_path.join("dir"), true, true);
        let again = create_or_get(&mut root, &root_path, &root_path.join("dir"), true, false);

        assert!(again.is_expandable, "flags are set at creation time only");
    }

    #[test]
    fn test_path_outside_root_returns_root() {
        let root_path = PathBuf::from("/data/project");
        let mut root = root_node(&root_path);
        let node = create_or_get(
            &mut root,
            &root_path,
            &PathBuf::from("/elsewhere"),
            true,
            true,
        );
        assert_eq!(node.relative_path, ".");
        assert!(root.children.is_empty());
    }

    #[test]
    fn test_find_resolves_relative_paths() {
        let root_path = PathBuf::from("/data/project");
        let mut root = root_node(&root_path);
        create_or_get(
            &mut root,
            &root_path,
            &root_path.join("a/b/c.txt"),
            false,
            false,
        );

        assert!(root.find(".").is_some());
        assert_eq!(root.find("a/b/c.txt").unwrap().name, "c.txt");
        assert_eq!(root.find("A/B").unwrap().name, "b");
        assert!(root.find("a/missing").is_none());
    }

    #[test]
    fn test_relative_to_normalizes() {
        let root = PathBuf::from("/data/project");
        assert_eq!(relative_to(&root, &root), ".");
        assert_eq!(relative_to(&root, &root.join("src").join("lib")), "src/lib");
    }
}
