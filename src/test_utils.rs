//! Test utilities for creating temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The tree is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// `root/` containing `a.txt` and `b/c.txt`.
    pub fn sample() -> Self {
        let tree = Self::new();
        tree.add_file("root/a.txt", "a");
        tree.add_file("root/b/c.txt", "c");
        tree
    }

    /// A balanced tree `width` entries wide and `depth` directories deep.
    pub fn balanced(width: usize, depth: usize) -> Self {
        let tree = Self::new();
        tree.fill(Path::new("root"), width, depth);
        tree
    }

    fn fill(&self, rel: &Path, width: usize, depth: usize) {
        self.add_dir(&rel.to_string_lossy());
        for i in 0..width {
            self.add_file(&rel.join(format!("file_{}.txt", i)).to_string_lossy(), "x");
            if depth > 0 {
                self.fill(&rel.join(format!("dir_{}", i)), width, depth - 1);
            }
        }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an (empty) directory, creating parents as needed.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
