//! TreeBuilder - walks a directory into an in-memory tree

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, trace};

use crate::error::ScanError;

use super::config::ScanConfig;
use super::entry::{Counters, Entry, ScanResult};

/// Builds the full tree for a path, counting every visited entry.
///
/// The walk is all-or-nothing: the first stat or listing failure at any
/// depth aborts it and no partial tree is returned.
pub struct TreeBuilder {
    config: ScanConfig,
}

impl TreeBuilder {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn build(&self, root: &Path) -> Result<ScanResult, ScanError> {
        let mut counters = Counters::default();
        let tree = self
            .build_entry(root, self.config.max_depth, &mut counters)
            .inspect_err(|e| debug!(path = %e.path().display(), "scan aborted: {}", e))?;
        info!(
            root = %root.display(),
            files = counters.file_count,
            dirs = counters.dir_count,
            "scan complete"
        );
        Ok(ScanResult::new(tree, counters))
    }

    /// `budget` is the number of levels still allowed below `path`.
    fn build_entry(
        &self,
        path: &Path,
        budget: Option<usize>,
        counters: &mut Counters,
    ) -> Result<Entry, ScanError> {
        let metadata = fs::metadata(path).map_err(|e| ScanError::from_io(path, e))?;
        let name = entry_name(path);

        if !metadata.is_dir() {
            counters.record_file();
            trace!(path = %path.display(), "file");
            return Ok(Entry::file(name));
        }
        counters.record_dir();

        let remaining = match budget {
            Some(0) => {
                debug!(path = %path.display(), "depth exhausted, not expanding");
                return Ok(Entry::directory(name, Vec::new()));
            }
            Some(n) => Some(n - 1),
            None => None,
        };

        debug!(path = %path.display(), "expanding directory");
        let mut children = Vec::new();
        for child_path in self.read_entries(path)? {
            children.push(self.build_entry(&child_path, remaining, counters)?);
        }

        Ok(Entry::directory(name, children))
    }

    fn read_entries(&self, path: &Path) -> Result<Vec<PathBuf>, ScanError> {
        let mut entries = fs::read_dir(path)
            .map_err(|e| ScanError::from_io(path, e))?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ScanError::from_io(path, e))?;

        if self.config.sort {
            entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        Ok(entries)
    }
}

/// Scan `path`, where a negative `depth_limit` means no limit.
pub fn build(path: impl AsRef<Path>, depth_limit: i64) -> Result<ScanResult, ScanError> {
    TreeBuilder::new(ScanConfig::from_depth_arg(depth_limit)).build(path.as_ref())
}

/// Final path component (`..`, `.` and `/` included), or the path as given.
fn entry_name(path: &Path) -> String {
    path.file_name()
        .or_else(|| path.components().next_back().map(|c| c.as_os_str()))
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::EntryKind;
    use tempfile::TempDir;

    /// root/{a.txt, b/c.txt}
    fn sample_tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("root");
        fs::create_dir_all(root.join("b")).unwrap();
        fs::write(root.join("a.txt"), "a").unwrap();
        fs::write(root.join("b").join("c.txt"), "c").unwrap();
        dir
    }

    fn builder() -> TreeBuilder {
        TreeBuilder::new(ScanConfig::default())
    }

    #[test]
    fn test_unbounded_walk() {
        let dir = sample_tree();
        let result = builder().build(&dir.path().join("root")).unwrap();

        assert_eq!(result.tree.name, "root");
        assert_eq!(result.tree.kind, EntryKind::Directory);
        assert_eq!(result.meta.file_count, 2);
        assert_eq!(result.meta.dir_count, 2);

        let names: Vec<_> = result.tree.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["a.txt", "b"]);
        assert_eq!(result.tree.children[1].children, vec![Entry::file("c.txt")]);
    }

    #[test]
    fn test_counters_match_tree() {
        let dir = sample_tree();
        let result = build(dir.path(), -1).unwrap();
        assert_eq!(result.meta, result.tree.count());
        // tempdir + root + b, plus a.txt and c.txt
        assert_eq!(result.meta.total(), 5);
    }

    #[test]
    fn test_depth_zero_records_only_root() {
        let dir = sample_tree();
        let result = build(dir.path().join("root"), 0).unwrap();
        assert!(result.tree.is_dir());
        assert!(result.tree.children.is_empty());
        assert_eq!(result.meta, Counters { file_count: 0, dir_count: 1 });
    }

    #[test]
    fn test_depth_one_truncates_subdirectories() {
        let dir = sample_tree();
        let result = builder().build(&dir.path().join("root")).unwrap();
        let truncated = TreeBuilder::new(ScanConfig {
            max_depth: Some(1),
            sort: true,
        })
        .build(&dir.path().join("root"))
        .unwrap();

        assert_eq!(truncated.tree.children.len(), result.tree.children.len());
        let b = &truncated.tree.children[1];
        assert!(b.is_dir());
        assert!(b.children.is_empty());
        assert_eq!(truncated.meta, Counters { file_count: 1, dir_count: 2 });
    }

    #[test]
    fn test_file_root_is_a_file_entry() {
        let dir = sample_tree();
        let result = build(dir.path().join("root").join("a.txt"), 0).unwrap();
        assert_eq!(result.tree, Entry::file("a.txt"));
        assert_eq!(result.meta, Counters { file_count: 1, dir_count: 0 });
    }

    #[test]
    fn test_kinds_are_not_inverted() {
        let dir = sample_tree();
        let result = builder().build(&dir.path().join("root")).unwrap();
        assert_eq!(result.tree.kind, EntryKind::Directory);
        assert_eq!(result.tree.children[0].kind, EntryKind::File);
        assert_eq!(result.tree.children[1].kind, EntryKind::Directory);
        assert_eq!(result.tree.children[1].children[0].kind, EntryKind::File);
    }

    #[test]
    fn test_missing_path_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let err = build(&missing, -1).unwrap_err();
        assert!(matches!(err, ScanError::NotFound { .. }));
        assert_eq!(err.path(), missing);
    }

    #[cfg(unix)]
    #[test]
    fn test_broken_symlink_aborts_walk() {
        let dir = sample_tree();
        let root = dir.path().join("root");
        std::os::unix::fs::symlink("does-not-exist", root.join("b").join("dangling")).unwrap();

        let err = build(&root, -1).unwrap_err();
        assert!(matches!(err, ScanError::NotFound { .. }));
    }

    #[test]
    fn test_entry_name_without_final_component() {
        assert_eq!(entry_name(Path::new(".")), ".");
        assert_eq!(entry_name(Path::new("/")), "/");
        assert_eq!(entry_name(Path::new("some/root/")), "root");
        assert_eq!(entry_name(Path::new("some/root/..")), "..");
        assert_eq!(entry_name(Path::new("..")), "..");
    }

    #[test]
    fn test_parent_dir_root_is_named_dot_dot() {
        let dir = sample_tree();
        let result = build(dir.path().join("root").join("b").join(".."), 0).unwrap();
        assert_eq!(result.tree.name, "..");
        assert!(result.tree.is_dir());
    }

    #[test]
    fn test_default_order_is_by_name() {
        let dir = TempDir::new().unwrap();
        for name in ["zeta", "alpha", "Mid", "beta.txt"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }
        let result = build(dir.path(), -1).unwrap();
        let names: Vec<_> = result.tree.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Mid", "alpha", "beta.txt", "zeta"]);
    }

    #[test]
    fn test_unsorted_keeps_every_entry() {
        let dir = sample_tree();
        let result = TreeBuilder::new(ScanConfig::default().with_sort(false))
            .build(&dir.path().join("root"))
            .unwrap();
        let mut names: Vec<_> = result.tree.children.iter().map(|c| c.name.clone()).collect();
        names.sort();
        assert_eq!(names, ["a.txt", "b"]);
        assert_eq!(result.meta, Counters { file_count: 2, dir_count: 2 });
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_subdirectory_aborts_walk() {
        use std::os::unix::fs::PermissionsExt;

        let dir = sample_tree();
        let locked = dir.path().join("root").join("b");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users can still list the directory; nothing to check then.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let result = build(dir.path().join("root"), -1);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        let err = result.unwrap_err();
        assert!(matches!(err, ScanError::PermissionDenied { .. }), "{:?}", err);
        assert_eq!(err.path(), locked);
    }
}
