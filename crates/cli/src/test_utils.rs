//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the jobtag crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Temp dir marked as a git root so config discovery never escapes it.
pub fn git_root() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    dir
}

/// Git root holding a jobtag.toml with the given content.
pub fn git_root_with_config(config: &str) -> TempDir {
    let dir = git_root();
    fs::write(dir.path().join("jobtag.toml"), config).unwrap();
    dir
}

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
///
/// # Example
///
/// ```ignore
/// let tmp = git_root();
/// create_tree(tmp.path(), &[
///     ("data/raw/postings.jsonl", "{\"title\": \"SRE\"}"),
///     ("jobtag.toml", "version = 1\n"),
/// ]);
/// ```
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}
