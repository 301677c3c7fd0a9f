//! Render command - typeset the grid page and deliver the PDF

use std::path::Path;

use anyhow::Result;
use kratka_core::{KratkaError, deliver, render_document};
use kratka_latex::{ExecOptions, Workspace, exec_compiler, resolve_compiler};
use log::{debug, warn};

use crate::context::Context;
use crate::output;

/// Compiler output lines echoed to stderr when compilation fails
const OUTPUT_TAIL_LINES: usize = 20;

/// Render, compile and deliver one grid page
///
/// The workspace is removed only when everything succeeded and preservation
/// was not requested. On any failure after it was created it stays on disk
/// and its path is reported.
pub fn run(ctx: &Context) -> Result<()> {
    let source = render_document(&ctx.params).map_err(KratkaError::from)?;
    debug!("Rendered {} bytes of LaTeX", source.len());

    let compiler = resolve_compiler(&ctx.compiler)?;
    if ctx.verbose {
        output::step(&format!(
            "Using {} ({})",
            compiler.path.display(),
            compiler.source
        ));
    }

    let workspace = Workspace::create()?;
    if ctx.verbose {
        output::step(&format!("Workspace {}", workspace.path().display()));
    }

    match build(ctx, &workspace, &compiler.path, &source) {
        Ok(bytes) => {
            if ctx.preserve_workspace {
                let kept = workspace.preserve();
                output::step(&format!("Workspace preserved at {}", kept.display()));
            } else {
                workspace.remove()?;
            }
            output::done(&format!("Wrote {} ({} bytes)", ctx.destination, bytes));
            Ok(())
        }
        Err(e) => {
            let kept = workspace.preserve();
            warn!("Keeping workspace {} after failure", kept.display());
            output::step(&format!("Workspace preserved at {}", kept.display()));
            Err(e)
        }
    }
}

/// Write the source, run the compiler and copy the PDF out
fn build(ctx: &Context, workspace: &Workspace, compiler: &Path, source: &str) -> Result<u64> {
    let source_path = workspace.write_source(source)?;

    if ctx.verbose {
        output::step("Compiling grid to PDF");
    }
    let result = exec_compiler(&ExecOptions::new(compiler, workspace, source_path)).map_err(
        |e| match e {
            KratkaError::CompilerSpawn { program, reason } => KratkaError::CompilationFailed {
                reason: format!("failed to run '{}': {}", program.display(), reason),
                log: workspace.log_path(),
            },
            other => other,
        },
    )?;

    if !result.success {
        output::failed("Compilation failed");
        let tail = result.output_tail(OUTPUT_TAIL_LINES);
        if !tail.is_empty() {
            eprintln!("{}", tail);
        }
        return Err(KratkaError::CompilationFailed {
            reason: format!("{} exited with {}", compiler.display(), result.status_text()),
            log: workspace.log_path(),
        }
        .into());
    }
    debug!("Compiled in {}ms", result.duration_ms);

    let artifact = workspace.artifact_path();
    if !artifact.is_file() {
        return Err(KratkaError::ArtifactMissing { path: artifact }.into());
    }

    Ok(deliver(&artifact, &ctx.destination)?)
}
