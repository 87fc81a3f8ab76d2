//! Treeline - directory tree diagrams with include/exclude filtering

pub mod output;
#[cfg(feature = "test-utils")]
pub mod test_utils;
pub mod tree;

pub use output::{print_json, print_text};
pub use tree::{FilterOptions, GenerateError, RenderedTree, TreeGenerator, TreeNode};
