//! Output delivery - copy the compiled artifact to its destination

use std::fmt;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{KratkaError, Result};

/// Where the finished document goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// The literal `-` argument
    Stdout,
    File(PathBuf),
}

impl Destination {
    pub fn is_stdout(&self) -> bool {
        matches!(self, Destination::Stdout)
    }
}

impl From<&str> for Destination {
    fn from(arg: &str) -> Self {
        if arg == "-" {
            Destination::Stdout
        } else {
            Destination::File(PathBuf::from(arg))
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Stdout => write!(f, "<stdout>"),
            Destination::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn copy_failed(destination: &Destination, err: io::Error) -> KratkaError {
    KratkaError::CopyFailed {
        destination: destination.to_string(),
        reason: err.to_string(),
    }
}

/// Copy everything from `reader` into `writer` and flush it
pub fn copy_into<R: Read, W: Write>(reader: &mut R, writer: &mut W) -> io::Result<u64> {
    let copied = io::copy(reader, writer)?;
    writer.flush()?;
    Ok(copied)
}

/// Copy `artifact` to `destination`, returning the number of bytes written
///
/// A file destination is created or truncated and synced to disk before
/// returning. Parent directories are not created. A failure part way through
/// may leave a truncated file behind.
pub fn deliver(artifact: &Path, destination: &Destination) -> Result<u64> {
    let mut input = File::open(artifact).map_err(|e| KratkaError::CopyFailed {
        destination: destination.to_string(),
        reason: format!("cannot open '{}': {}", artifact.display(), e),
    })?;

    let copied = match destination {
        Destination::Stdout => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            copy_into(&mut input, &mut out).map_err(|e| copy_failed(destination, e))?
        }
        Destination::File(path) => {
            let mut out = File::create(path).map_err(|e| copy_failed(destination, e))?;
            let copied =
                copy_into(&mut input, &mut out).map_err(|e| copy_failed(destination, e))?;
            out.sync_all().map_err(|e| copy_failed(destination, e))?;
            copied
        }
    };

    debug!("Copied {} bytes to {}", copied, destination);
    Ok(copied)
}
