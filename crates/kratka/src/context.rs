//! Resolved settings for one invocation

use anyhow::{Context as _, Result, anyhow};
use kratka_core::config::{Config, consts};
use kratka_core::{Destination, RenderParameters};
use log::debug;

use crate::cli::Cli;

/// Everything the render command needs, built once from the command line
#[derive(Debug, Clone)]
pub struct Context {
    pub params: RenderParameters,
    pub destination: Destination,
    /// Program name or path, not yet resolved
    pub compiler: String,
    pub preserve_workspace: bool,
    pub verbose: bool,
}

impl Context {
    /// Merge defaults, the optional config file and the command line
    ///
    /// Precedence, highest first: flags and `KRATKA_*` variables, the
    /// `--config` file, built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No output destination was given
    /// - The config file cannot be read or parsed
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let output = cli
            .output
            .as_deref()
            .ok_or_else(|| anyhow!("No output file given"))?;

        let config = match &cli.config {
            Some(path) => {
                debug!("Loading config {}", path.display());
                Config::from_file(path).context("Failed to load configuration")?
            }
            None => Config::default(),
        };

        let params = RenderParameters::default()
            .with(&config.overrides())
            .with(&cli.overrides());
        debug!("Render parameters: {:?}", params);

        let compiler = cli
            .compiler
            .clone()
            .or(config.compiler.program)
            .unwrap_or_else(|| consts::compiler::PROGRAM.to_string());

        Ok(Self {
            params,
            destination: Destination::from(output),
            compiler,
            preserve_workspace: cli.preserve_workspace,
            verbose: cli.verbose,
        })
    }
}
