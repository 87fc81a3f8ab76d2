//! Filter configuration for tree generation

use std::collections::HashSet;
use std::path::Path;

use super::matcher;

/// The four filter sets consulted during a walk.
///
/// Directory names and extensions are stored case-folded; extension entries
/// always carry their leading dot. Registering any include spec switches the
/// corresponding visibility check from exclude-list to include-list mode.
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    excluded_directories: HashSet<String>,
    excluded_extensions: HashSet<String>,
    included_directories: HashSet<String>,
    included_extensions: HashSet<String>,
}

impl FilterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exclude_directory(&mut self, name: &str) {
        let name = name.trim().to_lowercase();
        if !name.is_empty() {
            self.excluded_directories.insert(name);
        }
    }

    pub fn exclude_extension(&mut self, ext: &str) {
        if let Some(ext) = normalize_extension(ext) {
            self.excluded_extensions.insert(ext);
        }
    }

    pub fn include_directory(&mut self, spec: &str) {
        let spec = matcher::normalize_spec(spec);
        if !spec.is_empty() {
            self.included_directories.insert(spec);
        }
    }

    pub fn include_extension(&mut self, ext: &str) {
        if let Some(ext) = normalize_extension(ext) {
            self.included_extensions.insert(ext);
        }
    }

    pub fn is_directory_excluded(&self, name: &str) -> bool {
        self.excluded_directories.contains(&name.to_lowercase())
    }

    /// Literal name match against the include specs (subpath specs like
    /// `src/lib` never equal a plain name).
    pub fn is_directory_included_by_name(&self, name: &str) -> bool {
        self.included_directories.contains(&name.to_lowercase())
    }

    pub fn has_include_directories(&self) -> bool {
        !self.included_directories.is_empty()
    }

    pub fn include_directories(&self) -> impl Iterator<Item = &str> {
        self.included_directories.iter().map(String::as_str)
    }

    /// File visibility by extension: exclusion always wins, then the
    /// include list (when non-empty) must contain the extension.
    pub fn is_extension_visible(&self, ext: &str) -> bool {
        let ext = ext.to_lowercase();
        if self.excluded_extensions.contains(&ext) {
            return false;
        }
        self.included_extensions.is_empty() || self.included_extensions.contains(&ext)
    }
}

/// Fold case and prepend the leading dot when missing.
/// Returns `None` for blank input.
pub fn normalize_extension(ext: &str) -> Option<String> {
    let ext = ext.trim().to_lowercase();
    if ext.is_empty() || ext == "." {
        return None;
    }
    if ext.starts_with('.') {
        Some(ext)
    } else {
        Some(format!(".{ext}"))
    }
}

/// Extension of a file path with its leading dot, lowercased; empty string
/// when the file has none.
pub fn file_extension(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_extension_normalization() {
        assert_eq!(normalize_extension("txt"), Some(".txt".to_string()));
        assert_eq!(normalize_extension(".TXT"), Some(".txt".to_string()));
        assert_eq!(normalize_extension("  cs "), Some(".cs".to_string()));
        assert_eq!(normalize_extension(""), None);
        assert_eq!(normalize_extension("."), None);
    }

    #[test]
    fn test_dot_normalized_filters_are_equivalent() {
        let mut with_dot = FilterOptions::new();
        with_dot.include_extension(".TXT");

        let mut without_dot = FilterOptions::new();
        without_dot.include_extension("txt");

        let ext = file_extension(&PathBuf::from("a.txt"));
        assert!(with_dot.is_extension_visible(&ext));
        assert!(without_dot.is_extension_visible(&ext));
    }

    #[test]
    fn test_exclusion_wins_over_inclusion_for_files() {
        let mut options = FilterOptions::new();
        options.include_extension("txt");
        options.exclude_extension("txt");
        assert!(!options.is_extension_visible(".txt"));
    }

    #[test]
    fn test_empty_include_list_shows_all_extensions() {
        let options = FilterOptions::new();
        assert!(options.is_extension_visible(".rs"));
        assert!(options.is_extension_visible(""));
    }

    #[test]
    fn test_include_list_hides_unlisted_extensions() {
        let mut options = FilterOptions::new();
        options.include_extension("rs");
        assert!(options.is_extension_visible(".rs"));
        assert!(!options.is_extension_visible(".py"));
        assert!(!options.is_extension_visible(""));
    }

    #[test]
    fn test_directory_exclusion_is_case_insensitive() {
        let mut options = FilterOptions::new();
        options.exclude_directory("Node_Modules");
        assert!(options.is_directory_excluded("node_modules"));
        assert!(options.is_directory_excluded("NODE_MODULES"));
        assert!(!options.is_directory_excluded("src"));
    }

    #[test]
    fn test_file_extension_extraction() {
        assert_eq!(file_extension(&PathBuf::from("a/b/report.TXT")), ".txt");
        assert_eq!(file_extension(&PathBuf::from("Makefile")), "");
        assert_eq!(file_extension(&PathBuf::from("archive.tar.gz")), ".gz");
    }
}
