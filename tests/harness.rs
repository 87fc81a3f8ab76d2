//! Test harness for treeline integration tests

use std::path::Path;
use std::process::Command;

pub use treeline::test_utils::TempTree;

/// Run the treeline binary against `dir` and collect its output.
pub fn run_treeline(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_treeline");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run treeline");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let tree = TempTree::new();
        assert!(tree.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let tree = TempTree::new();
        let file_path = tree.add_file("sub/test.rs", "fn main() {}");
        assert!(file_path.exists());
    }

    #[test]
    fn test_harness_add_dir() {
        let tree = TempTree::new();
        let dir_path = tree.add_dir("a/b");
        assert!(dir_path.is_dir());
    }
}
