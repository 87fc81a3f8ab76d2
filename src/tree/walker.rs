//! Tree generation: fluent filter configuration and the recursive walk

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

use super::config::FilterOptions;
use super::filter::{PathFilter, base_name};
use super::node::TreeNode;
use super::render::{self, RenderedTree};

/// Fatal conditions reported before any traversal begins. Everything that
/// goes wrong during the walk itself is downgraded per-directory instead.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The root path argument was empty or whitespace.
    #[error("root path must not be empty")]
    EmptyRootPath,
    /// The root path does not refer to an existing directory.
    #[error("not a directory: {}", .0.display())]
    RootNotFound(PathBuf),
}

/// Filtered directory tree generator.
///
/// Filter mutators return `&mut Self` for chaining. A configured generator
/// may be reused across roots sequentially; the include-path index is
/// rebuilt at the start of every [`TreeGenerator::generate`] call.
///
/// ```no_run
/// use treeline::TreeGenerator;
///
/// let mut generator = TreeGenerator::new();
/// let tree = generator
///     .exclude_directories(["target", ".git"])
///     .include_only_extensions(["rs", "toml"])
///     .generate("/data/project")?;
/// println!("{}", tree.text());
/// # Ok::<(), treeline::GenerateError>(())
/// ```
#[derive(Debug)]
pub struct TreeGenerator {
    options: FilterOptions,
    print_root: bool,
}

impl Default for TreeGenerator {
    fn default() -> Self {
        Self {
            options: FilterOptions::new(),
            print_root: true,
        }
    }
}

impl TreeGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hide directories with any of these names (case-insensitive).
    pub fn exclude_directories<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.options.exclude_directory(name.as_ref());
        }
        self
    }

    /// Hide files with any of these extensions; a missing leading dot is
    /// supplied automatically.
    pub fn exclude_extensions<I, S>(&mut self, exts: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for ext in exts {
            self.options.exclude_extension(ext.as_ref());
        }
        self
    }

    /// Switch directory filtering to include-list mode. Specs are plain
    /// names or `/`-delimited relative subpaths such as `src/lib`; once a
    /// directory matches, its whole subtree is visible.
    pub fn include_only_directories<I, S>(&mut self, specs: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for spec in specs {
            self.options.include_directory(spec.as_ref());
        }
        self
    }

    /// Switch file filtering to include-list mode for these extensions.
    pub fn include_only_extensions<I, S>(&mut self, exts: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for ext in exts {
            self.options.include_extension(ext.as_ref());
        }
        self
    }

    /// Whether line 0 carries the root's absolute path (default) or the
    /// bare `/` placeholder.
    pub fn print_root(&mut self, enabled: bool) -> &mut Self {
        self.print_root = enabled;
        self
    }

    /// Walk `root` and produce the rendered diagram plus the node tree.
    pub fn generate(&mut self, root: impl AsRef<Path>) -> Result<RenderedTree, GenerateError> {
        let raw = root.as_ref();
        if raw.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(GenerateError::EmptyRootPath);
        }
        if !raw.is_dir() {
            return Err(GenerateError::RootNotFound(raw.to_path_buf()));
        }

        let root = fs::canonicalize(raw).unwrap_or_else(|_| raw.to_path_buf());
        let filter = PathFilter::prepare(&self.options, &root);

        let root_name = match base_name(&root) {
            name if name.is_empty() => ".".to_string(),
            name => name,
        };
        let walk = Walk { filter: &filter };
        let root_node = TreeNode::new(
            root_name,
            root.clone(),
            ".".to_string(),
            true,
            walk.has_visible_child(&root),
        );

        let mut result = RenderedTree::new(root.clone(), self.print_root, root_node);
        walk.visit(&root, "", &mut result);
        Ok(result)
    }
}

/// One traversal session over a prepared filter.
struct Walk<'a> {
    filter: &'a PathFilter<'a>,
}

#[derive(Default)]
struct Listing {
    directories: Vec<PathBuf>,
    files: Vec<PathBuf>,
}

impl Walk<'_> {
    fn visit(&self, dir: &Path, indent: &str, result: &mut RenderedTree) {
        let listing = self.list(dir);

        let visible: Vec<&PathBuf> = listing
            .directories
            .iter()
            .filter(|subdir| self.filter.is_directory_visible(subdir))
            .collect();

        for (i, subdir) in visible.iter().enumerate() {
            let is_last = i + 1 == visible.len() && listing.files.is_empty();
            let name = base_name(subdir);

            result.push_line(render::entry_line(indent, is_last, &name, true));
            result.attach(subdir, true, self.has_visible_child(subdir));

            let child_indent = render::child_indent(indent, is_last);
            self.visit(subdir, &child_indent, result);
        }

        for (i, file) in listing.files.iter().enumerate() {
            let is_last = i + 1 == listing.files.len();
            let name = base_name(file);

            result.push_line(render::entry_line(indent, is_last, &name, false));
            result.attach(file, false, false);
        }
    }

    /// List one directory's children: subdirectories with excluded names
    /// dropped, files gated by extension visibility, both sorted ordinally
    /// by name. Any listing error downgrades the directory to "no entries".
    fn list(&self, dir: &Path) -> Listing {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(dir = %dir.display(), %err, "listing failed, treating as empty");
                return Listing::default();
            }
        };

        let mut listing = Listing::default();
        for entry in entries.filter_map(|entry| entry.ok()) {
            let path = entry.path();
            if path.is_dir() {
                if !self.filter.is_directory_name_excluded(&base_name(&path)) {
                    listing.directories.push(path);
                }
            } else if path.is_file() && self.filter.is_file_visible(&path) {
                listing.files.push(path);
            }
        }

        listing.directories.sort_by_key(|path| base_name(path));
        listing.files.sort_by_key(|path| base_name(path));
        listing
    }

    /// Peek one level down without touching walk state: does the directory
    /// have at least one visible file or subdirectory under the filters?
    fn has_visible_child(&self, dir: &Path) -> bool {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(_) => return false,
        };

        for entry in entries.filter_map(|entry| entry.ok()) {
            let path = entry.path();
            if path.is_dir() {
                if !self.filter.is_directory_name_excluded(&base_name(&path))
                    && self.filter.is_directory_visible(&path)
                {
                    return true;
                }
            } else if path.is_file() && self.filter.is_file_visible(&path) {
                return true;
            }
        }
        false
    }
}
