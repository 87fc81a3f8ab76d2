//! Filtered directory tree generation
//!
//! The walk applies two independent filter axes at every level: directory
//! names (exclude-list, or include-list once any spec is registered) and
//! file extensions. Each visible entry produces one prefixed diagram line
//! and one node in the materialized hierarchy, so the text and the node
//! tree always describe the same filtered view.

mod config;
mod filter;
mod matcher;
mod node;
mod render;
mod walker;

// Re-export public types
pub use config::FilterOptions;
pub use node::TreeNode;
pub use render::RenderedTree;
pub use walker::{GenerateError, TreeGenerator};
