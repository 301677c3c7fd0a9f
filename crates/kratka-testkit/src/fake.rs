//! Fake `pdflatex` executables
//!
//! A POSIX shell script that understands the `-output-directory DIR` option
//! and the trailing source file, like the real engine. It always writes
//! `<base>.log` (including the arguments it received) into the output
//! directory, then behaves according to [`FakeBehavior`].

use std::path::{Path, PathBuf};

/// What the fake compiler does after writing its log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeBehavior {
    /// Write `<base>.pdf` (a `%PDF-1.5` line followed by the source) and exit 0
    Succeed,
    /// Print a LaTeX-style error and exit 1
    Fail,
    /// Exit 0 without producing a PDF
    NoArtifact,
}

/// Builder for a fake compiler script
#[derive(Debug, Clone)]
pub struct FakeCompiler {
    name: String,
    behavior: FakeBehavior,
}

const PROLOGUE: &str = r#"#!/bin/sh
args="$*"
outdir=.
src=
while [ $# -gt 0 ]; do
  case "$1" in
    -output-directory) outdir="$2"; shift 2 ;;
    -*) shift ;;
    *) src="$1"; shift ;;
  esac
done
base=$(basename "$src" .tex)
log="$outdir/$base.log"
echo "This is fake pdflatex" > "$log"
echo "args: $args" >> "$log"
"#;

const SUCCEED: &str = r#"printf '%%PDF-1.5\n' > "$outdir/$base.pdf"
cat "$src" >> "$outdir/$base.pdf"
echo "Output written on $outdir/$base.pdf."
exit 0
"#;

const FAIL: &str = r#"echo "! Undefined control sequence." | tee -a "$log"
echo "No pages of output."
exit 1
"#;

const NO_ARTIFACT: &str = r#"echo "No pages of output."
exit 0
"#;

impl FakeCompiler {
    pub fn new(behavior: FakeBehavior) -> Self {
        Self {
            name: "pdflatex".to_string(),
            behavior,
        }
    }

    pub fn succeeding() -> Self {
        Self::new(FakeBehavior::Succeed)
    }

    pub fn failing() -> Self {
        Self::new(FakeBehavior::Fail)
    }

    pub fn without_artifact() -> Self {
        Self::new(FakeBehavior::NoArtifact)
    }

    /// File name of the installed script (default `pdflatex`)
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Full script text
    pub fn script(&self) -> String {
        let body = match self.behavior {
            FakeBehavior::Succeed => SUCCEED,
            FakeBehavior::Fail => FAIL,
            FakeBehavior::NoArtifact => NO_ARTIFACT,
        };
        format!("{PROLOGUE}{body}")
    }

    /// Write the script into `dir` as an executable and return its path
    ///
    /// # Panics
    ///
    /// Panics if the script cannot be written or made executable.
    pub fn install(&self, dir: &Path) -> PathBuf {
        std::fs::create_dir_all(dir).expect("Failed to create fake compiler directory");
        let path = dir.join(&self.name);
        std::fs::write(&path, self.script()).expect("Failed to write fake compiler");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
                .expect("Failed to make fake compiler executable");
        }

        path
    }
}

/// Expected artifact bytes for a source processed by [`FakeBehavior::Succeed`]
pub fn expected_artifact(source: &str) -> Vec<u8> {
    let mut bytes = b"%PDF-1.5\n".to_vec();
    bytes.extend_from_slice(source.as_bytes());
    bytes
}
