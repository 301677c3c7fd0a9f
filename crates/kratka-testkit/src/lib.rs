//! Test utilities for kratka
//!
//! Shared helpers for the kratka workspace: temporary directories under
//! `.tmp/` and fake `pdflatex` executables.

mod fake;

pub use fake::{FakeBehavior, FakeCompiler, expected_artifact};

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Prefix of every workspace directory created by kratka
pub const WORKSPACE_PREFIX: &str = "kratka";

/// Creates a temporary directory within `.tmp/` at the current directory
///
/// The directory is removed when the returned `TempDir` is dropped.
///
/// # Panics
///
/// Panics if the current directory cannot be determined or `.tmp/` cannot be
/// created.
///
/// # Examples
///
/// ```rust
/// use kratka_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("test.txt");
/// std::fs::write(&file_path, "test data").unwrap();
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    try_temp_dir_in_workspace().expect("Failed to create temporary directory in .tmp/")
}

fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let tmp_base = std::env::current_dir()?.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}

/// List kratka workspace directories directly under `root`, sorted
///
/// Point `TMPDIR` of a kratka process at `root` to observe which workspaces
/// it leaves behind.
pub fn list_workspaces(root: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(root) else {
        return Vec::new();
    };

    let mut found: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_dir()
                && path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(WORKSPACE_PREFIX))
        })
        .collect();
    found.sort();
    found
}
