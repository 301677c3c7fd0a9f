use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use kratka_core::KratkaError;
use log::debug;

use crate::Result;
use crate::info::{CompilerInfo, CompilerSource};

/// A program containing a path separator names a file, not a `PATH` entry
fn is_path_like(program: &str) -> bool {
    program.contains('/') || program.contains(std::path::MAIN_SEPARATOR)
}

fn resolve_explicit(program: &str) -> Result<CompilerInfo> {
    let path = PathBuf::from(program);
    if !path.is_file() {
        return Err(KratkaError::CompilerNotFound {
            program: program.to_string(),
            reason: "no such file".to_string(),
        });
    }

    // The child runs inside the workspace directory
    let path = std::path::absolute(&path).map_err(|e| KratkaError::CompilerNotFound {
        program: program.to_string(),
        reason: e.to_string(),
    })?;

    Ok(CompilerInfo {
        source: CompilerSource::Explicit,
        path,
    })
}

fn not_found(program: &str, err: which::Error) -> KratkaError {
    KratkaError::CompilerNotFound {
        program: program.to_string(),
        reason: err.to_string(),
    }
}

/// Resolve the compiler binary
///
/// Resolution:
/// 1. A program containing a path separator must be an existing file
/// 2. Anything else is looked up on `PATH`
pub fn resolve_compiler(program: &str) -> Result<CompilerInfo> {
    let info = if is_path_like(program) {
        resolve_explicit(program)?
    } else {
        let path = which::which(program).map_err(|e| not_found(program, e))?;
        CompilerInfo {
            source: CompilerSource::System,
            path,
        }
    };

    debug!("Resolved compiler {} ({})", info.path.display(), info.source);
    Ok(info)
}

/// [`resolve_compiler`] against an explicit search path instead of `PATH`
pub fn resolve_compiler_in(
    program: &str,
    search_path: impl AsRef<OsStr>,
    cwd: &Path,
) -> Result<CompilerInfo> {
    if is_path_like(program) {
        return resolve_explicit(program);
    }

    let path =
        which::which_in(program, Some(search_path), cwd).map_err(|e| not_found(program, e))?;
    Ok(CompilerInfo {
        source: CompilerSource::System,
        path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use kratka_testkit::{FakeCompiler, temp_dir_in_workspace};

    #[test]
    fn test_is_path_like() {
        assert!(!is_path_like("pdflatex"));
        assert!(is_path_like("./pdflatex"));
        assert!(is_path_like("/usr/bin/pdflatex"));
        assert!(is_path_like("bin/pdflatex"));
    }

    #[test]
    fn test_explicit_missing_file() {
        let temp = temp_dir_in_workspace();
        let program = temp.path().join("nope").display().to_string();

        match resolve_compiler(&program) {
            Err(KratkaError::CompilerNotFound { program: p, .. }) => assert_eq!(p, program),
            other => panic!("Expected CompilerNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_explicit_directory_is_not_a_compiler() {
        let temp = temp_dir_in_workspace();
        let program = temp.path().display().to_string();
        assert!(resolve_compiler(&program).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_explicit_existing_file() {
        let temp = temp_dir_in_workspace();
        let path = FakeCompiler::succeeding().install(temp.path());

        let info = resolve_compiler(&path.display().to_string()).unwrap();
        assert_eq!(info.source, CompilerSource::Explicit);
        assert_eq!(info.path, path);
    }

    #[cfg(unix)]
    #[test]
    fn test_search_path_lookup() {
        let temp = temp_dir_in_workspace();
        let bin = temp.path().join("bin");
        let path = FakeCompiler::succeeding().install(&bin);

        let info = resolve_compiler_in("pdflatex", &bin, temp.path()).unwrap();
        assert_eq!(info.source, CompilerSource::System);
        assert_eq!(info.path, path);
    }

    #[test]
    fn test_search_path_miss() {
        let temp = temp_dir_in_workspace();
        let result = resolve_compiler_in("pdflatex", temp.path(), temp.path());

        let err = result.unwrap_err();
        assert!(err.to_string().starts_with("COMPILER_NOT_FOUND"));
    }

    #[test]
    fn test_unknown_program_on_path() {
        let result = resolve_compiler("kratka-definitely-not-a-real-compiler");
        assert!(matches!(result, Err(KratkaError::CompilerNotFound { .. })));
    }
}
