//! LaTeX compiler resolution, workspaces and invocation for kratka.
//!
//! # Architecture
//!
//! - [`resolve`]: find the compiler binary (explicit path or `PATH` lookup)
//! - [`workspace`]: the per-invocation temporary directory
//! - [`exec`]: run the compiler against the workspace source
//!
//! # Compile Flow
//!
//! ```text
//! resolve_compiler("pdflatex")
//!     ↓
//! Workspace::create()            → /tmp/kratkaXXXXXX/
//!     ↓
//! workspace.write_source(text)   → kratka.tex
//!     ↓
//! exec_compiler(options)         → kratka.log, kratka.pdf
//!     ↓
//! workspace.remove() | workspace.preserve()
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use kratka_latex::{exec_compiler, resolve_compiler, ExecOptions, Workspace};
//!
//! # fn main() -> kratka_core::Result<()> {
//! let compiler = resolve_compiler("pdflatex")?;
//! let workspace = Workspace::create()?;
//! let source = workspace.write_source("\\documentclass{article}...")?;
//!
//! let result = exec_compiler(&ExecOptions::new(&compiler.path, &workspace, source))?;
//! if result.success {
//!     println!("PDF at {}", workspace.artifact_path().display());
//!     workspace.remove()?;
//! } else {
//!     println!("See {}", workspace.log_path().display());
//!     workspace.preserve();
//! }
//! # Ok(())
//! # }
//! ```

pub mod exec;
pub mod info;
pub mod resolve;
pub mod workspace;

// Re-export commonly used types
pub use exec::{ExecOptions, ExecResult, compiler_args, exec_compiler};
pub use info::{CompilerInfo, CompilerSource};
pub use resolve::{resolve_compiler, resolve_compiler_in};
pub use workspace::{BASENAME, Workspace};

// Type alias for convenience
pub type Result<T> = kratka_core::Result<T>;
