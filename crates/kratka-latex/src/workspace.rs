//! Per-invocation temporary directory
//!
//! Holds `kratka.tex`, the compiler's `kratka.log` and its `kratka.pdf`.
//! Dropping a [`Workspace`] deletes it; callers end its life explicitly with
//! [`Workspace::remove`] or [`Workspace::preserve`].

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use kratka_core::KratkaError;
use log::debug;
use tempfile::{Builder, TempDir};

use crate::Result;

/// Base name of every file in the workspace, and the directory prefix
pub const BASENAME: &str = "kratka";

pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Create a uniquely named workspace in the system temp directory
    pub fn create() -> Result<Self> {
        let dir = Builder::new()
            .prefix(BASENAME)
            .tempdir()
            .map_err(|e| KratkaError::WorkspaceCreate(e.to_string()))?;
        debug!("Created workspace {}", dir.path().display());
        Ok(Self { dir })
    }

    /// Create a uniquely named workspace under `root`
    pub fn create_in(root: &Path) -> Result<Self> {
        let dir = Builder::new()
            .prefix(BASENAME)
            .tempdir_in(root)
            .map_err(|e| {
                KratkaError::WorkspaceCreate(format!("in '{}': {}", root.display(), e))
            })?;
        debug!("Created workspace {}", dir.path().display());
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    fn file(&self, extension: &str) -> PathBuf {
        self.path().join(format!("{BASENAME}.{extension}"))
    }

    /// `kratka.tex`
    pub fn source_path(&self) -> PathBuf {
        self.file("tex")
    }

    /// `kratka.log`, written by the compiler
    pub fn log_path(&self) -> PathBuf {
        self.file("log")
    }

    /// `kratka.pdf`, written by the compiler on success
    pub fn artifact_path(&self) -> PathBuf {
        self.file("pdf")
    }

    /// Write (create or truncate) the LaTeX source and return its path
    pub fn write_source(&self, text: &str) -> Result<PathBuf> {
        let path = self.source_path();
        let write_failed = |e: std::io::Error| KratkaError::SourceWrite {
            path: path.clone(),
            reason: e.to_string(),
        };

        let mut file = File::create(&path).map_err(write_failed)?;
        file.write_all(text.as_bytes()).map_err(write_failed)?;
        file.flush().map_err(write_failed)?;

        debug!("Wrote {} bytes to {}", text.len(), path.display());
        Ok(path)
    }

    /// Keep the directory on disk and return its path
    pub fn preserve(self) -> PathBuf {
        self.dir.keep()
    }

    /// Delete the directory and everything in it
    pub fn remove(self) -> Result<()> {
        let path = self.path().to_path_buf();
        self.dir
            .close()
            .map_err(|e| KratkaError::WorkspaceRemove {
                path: path.clone(),
                reason: e.to_string(),
            })?;
        debug!("Removed workspace {}", path.display());
        Ok(())
    }
}
