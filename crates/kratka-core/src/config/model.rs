use serde::Deserialize;
use std::path::Path;

use crate::error::{KratkaError, Result};
use crate::params::ParameterOverrides;

/// kratka.toml schema
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub line: LineConfig,
    #[serde(default)]
    pub compiler: CompilerConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageConfig {
    #[serde(default)]
    pub margin: Option<String>,
    #[serde(default)]
    pub horizontal_offset: Option<String>,
    #[serde(default)]
    pub vertical_offset: Option<String>,
    #[serde(default)]
    pub show_frame: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridConfig {
    #[serde(default)]
    pub cell_width: Option<String>,
    #[serde(default)]
    pub cell_height: Option<String>,
    #[serde(default)]
    pub step: Option<String>,
    #[serde(default)]
    pub columns: Option<i64>,
    #[serde(default)]
    pub rows: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LineConfig {
    #[serde(default)]
    pub width: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompilerConfig {
    /// Program name looked up on PATH, or a path to the binary
    #[serde(default)]
    pub program: Option<String>,
}

impl Config {
    /// Read and parse a kratka.toml file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| KratkaError::ConfigRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| KratkaError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Parameter values set by this file, as an override layer
    pub fn overrides(&self) -> ParameterOverrides {
        ParameterOverrides {
            margin: self.page.margin.clone(),
            horizontal_offset: self.page.horizontal_offset.clone(),
            vertical_offset: self.page.vertical_offset.clone(),
            show_frame: self.page.show_frame,
            cell_width: self.grid.cell_width.clone(),
            cell_height: self.grid.cell_height.clone(),
            step: self.grid.step.clone(),
            line_width: self.line.width.clone(),
            line_color: self.line.color.clone(),
            line_style: self.line.style.clone(),
            grid_columns: self.grid.columns,
            grid_rows: self.grid.rows,
        }
    }
}
