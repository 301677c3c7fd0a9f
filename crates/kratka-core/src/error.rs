use std::path::PathBuf;
use thiserror::Error;

use crate::template::TemplateError;

#[derive(Error, Debug)]
pub enum KratkaError {
    // Config errors
    #[error("CONFIG_READ_ERROR: failed to read '{}': {reason}", .path.display())]
    ConfigRead { path: PathBuf, reason: String },

    #[error("CONFIG_INVALID: failed to parse '{}': {reason}", .path.display())]
    ConfigInvalid { path: PathBuf, reason: String },

    // Template errors (fixed template, so these are internal defects)
    #[error("TEMPLATE_ERROR: {0}")]
    Template(#[from] TemplateError),

    // Compiler errors
    #[error("COMPILER_NOT_FOUND: '{program}' not found: {reason}")]
    CompilerNotFound { program: String, reason: String },

    #[error("COMPILER_SPAWN_FAILED: failed to run '{}': {reason}", .program.display())]
    CompilerSpawn { program: PathBuf, reason: String },

    #[error("COMPILATION_FAILED: {reason}; log file: {}", .log.display())]
    CompilationFailed { reason: String, log: PathBuf },

    #[error("ARTIFACT_MISSING: compiler reported success but '{}' was not produced", .path.display())]
    ArtifactMissing { path: PathBuf },

    // Workspace errors
    #[error("WORKSPACE_CREATE_FAILED: {0}")]
    WorkspaceCreate(String),

    #[error("WORKSPACE_WRITE_FAILED: '{}': {reason}", .path.display())]
    SourceWrite { path: PathBuf, reason: String },

    #[error("WORKSPACE_REMOVE_FAILED: '{}': {reason}", .path.display())]
    WorkspaceRemove { path: PathBuf, reason: String },

    // Delivery errors
    #[error("COPY_FAILED: {destination}: {reason}")]
    CopyFailed { destination: String, reason: String },
}

pub type Result<T> = std::result::Result<T, KratkaError>;
