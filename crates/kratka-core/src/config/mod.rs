//! Configuration file support
//!
//! `kratka.toml` only ever supplies defaults: every key is optional and the
//! command line wins over anything set here.

pub mod consts;
pub mod model;

pub use model::{CompilerConfig, Config, GridConfig, LineConfig, PageConfig};
