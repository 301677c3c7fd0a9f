use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::Instant;

use kratka_core::KratkaError;
use log::debug;

use crate::Result;
use crate::workspace::Workspace;

/// Options for running the compiler once
#[derive(Debug, Clone)]
pub struct ExecOptions {
    pub compiler: PathBuf,
    /// Working directory and `-output-directory`
    pub output_dir: PathBuf,
    pub source: PathBuf,
}

impl ExecOptions {
    pub fn new(compiler: impl Into<PathBuf>, workspace: &Workspace, source: PathBuf) -> Self {
        Self {
            compiler: compiler.into(),
            output_dir: workspace.path().to_path_buf(),
            source,
        }
    }
}

/// Result of a compiler run that managed to start
#[derive(Debug, Clone)]
pub struct ExecResult {
    /// `None` when the process was killed by a signal
    pub exit_code: Option<i32>,
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
    pub duration_ms: u64,
}

impl ExecResult {
    /// Human-readable exit status
    pub fn status_text(&self) -> String {
        match self.exit_code {
            Some(code) => format!("exit code {}", code),
            None => "terminated by signal".to_string(),
        }
    }

    /// Last `lines` lines of stdout followed by stderr
    pub fn output_tail(&self, lines: usize) -> String {
        let all: Vec<&str> = self.stdout.lines().chain(self.stderr.lines()).collect();
        let start = all.len().saturating_sub(lines);
        all[start..].join("\n")
    }
}

/// Arguments passed to the compiler
///
/// Non-interactive, stops at the first error, writes everything into the
/// output directory.
pub fn compiler_args(options: &ExecOptions) -> Vec<OsString> {
    vec![
        OsString::from("-interaction=nonstopmode"),
        OsString::from("-halt-on-error"),
        OsString::from("-output-directory"),
        options.output_dir.clone().into_os_string(),
        options.source.clone().into_os_string(),
    ]
}

/// Run the compiler and wait for it to exit
///
/// Only a failure to start the process is an `Err`; a non-zero exit is
/// reported through [`ExecResult::success`].
pub fn exec_compiler(options: &ExecOptions) -> Result<ExecResult> {
    let args = compiler_args(options);
    debug!(
        "Running {} {}",
        options.compiler.display(),
        args.iter()
            .map(|a| a.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    );

    let start = Instant::now();
    let output = Command::new(&options.compiler)
        .args(&args)
        .current_dir(&options.output_dir)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| KratkaError::CompilerSpawn {
            program: options.compiler.clone(),
            reason: e.to_string(),
        })?;
    let duration_ms = start.elapsed().as_millis() as u64;

    let result = ExecResult {
        exit_code: output.status.code(),
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        duration_ms,
    };
    debug!(
        "Compiler finished with {} in {}ms",
        result.status_text(),
        duration_ms
    );

    Ok(result)
}
