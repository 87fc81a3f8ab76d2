//! Visibility predicates and the include-path index

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::config::{self, FilterOptions};
use super::matcher;

/// Per-generation filter state: the configured [`FilterOptions`] plus the
/// include-path index derived from them for one root.
///
/// The index holds normalized absolute paths of directories that satisfied
/// an include spec. Visibility then reduces to an either-direction prefix
/// test, so a matched directory implicitly exposes its whole subtree.
pub struct PathFilter<'a> {
    options: &'a FilterOptions,
    included_paths: Vec<String>,
}

impl<'a> PathFilter<'a> {
    /// Build the filter for a single `generate` call. The index is only
    /// constructed when include-list mode is active for directories.
    pub fn prepare(options: &'a FilterOptions, root: &Path) -> Self {
        let included_paths = if options.has_include_directories() {
            build_index(options, root)
        } else {
            Vec::new()
        };
        Self {
            options,
            included_paths,
        }
    }

    /// The traversal-level name check. Evaluated independently of
    /// [`PathFilter::is_directory_visible`]; both call sites are kept.
    pub fn is_directory_name_excluded(&self, name: &str) -> bool {
        self.options.is_directory_excluded(name)
    }

    pub fn is_directory_visible(&self, path: &Path) -> bool {
        let name = base_name(path);

        if !self.options.has_include_directories() {
            return !self.options.is_directory_excluded(&name);
        }

        // Include-list mode: a literal name match wins outright.
        if self.options.is_directory_included_by_name(&name) {
            return true;
        }

        let normalized = matcher::normalize_path(path);
        self.included_paths
            .iter()
            .any(|included| included.starts_with(&normalized) || normalized.starts_with(included))
    }

    pub fn is_file_visible(&self, path: &Path) -> bool {
        self.options.is_extension_visible(&config::file_extension(path))
    }
}

/// Breadth-first walk recording every directory that satisfies an include
/// spec. A directory matched by literal name is recorded without being
/// expanded; its descendants are covered by the prefix rule. All other
/// directories are expanded and tested against each spec, first match wins.
fn build_index(options: &FilterOptions, root: &Path) -> Vec<String> {
    let mut index = Vec::new();
    let mut queue = VecDeque::from([root.to_path_buf()]);

    while let Some(dir) = queue.pop_front() {
        for subdir in list_subdirectories(&dir) {
            let name = base_name(&subdir);

            if options.is_directory_included_by_name(&name) {
                index.push(matcher::normalize_path(&subdir));
                continue;
            }

            queue.push_back(subdir.clone());
            for spec in options.include_directories() {
                if matcher::matches_spec(&subdir, spec) {
                    index.push(matcher::normalize_path(&subdir));
                    break;
                }
            }
        }
    }

    debug!(paths = index.len(), "built include-path index");
    index
}

fn list_subdirectories(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(dir = %dir.display(), %err, "skipping unreadable directory");
            return Vec::new();
        }
    };

    entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect()
}

/// Base name of a path as an owned string; empty for paths without one.
pub(crate) fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default()
}
