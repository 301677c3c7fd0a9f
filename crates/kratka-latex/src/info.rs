use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompilerSource {
    /// Given as a path on the command line or in the config file
    Explicit,
    /// Found by name on `PATH`
    System,
}

impl fmt::Display for CompilerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompilerSource::Explicit => write!(f, "explicit path"),
            CompilerSource::System => write!(f, "system PATH"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerInfo {
    pub source: CompilerSource,
    pub path: PathBuf,
}
