//! Document parameters
//!
//! [`RenderParameters`] is the flat record substituted into the grid template.
//! Values are opaque: lengths, TikZ styles and colors are forwarded verbatim
//! and only the LaTeX compiler decides whether they are valid.

use toml::map::Map;
use toml::Value;

use crate::config::consts::{grid, line, page};
use crate::template::TemplateContext;

/// Geometric and stylistic knobs of the grid document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderParameters {
    pub margin: String,
    pub horizontal_offset: String,
    pub vertical_offset: String,
    pub show_frame: bool,
    pub cell_width: String,
    pub cell_height: String,
    pub step: String,
    pub line_width: String,
    pub line_color: String,
    pub line_style: String,
    pub grid_columns: i64,
    pub grid_rows: i64,
}

impl Default for RenderParameters {
    fn default() -> Self {
        Self {
            margin: page::MARGIN.to_string(),
            horizontal_offset: page::HORIZONTAL_OFFSET.to_string(),
            vertical_offset: page::VERTICAL_OFFSET.to_string(),
            show_frame: page::SHOW_FRAME,
            cell_width: grid::CELL_WIDTH.to_string(),
            cell_height: grid::CELL_HEIGHT.to_string(),
            step: grid::STEP.to_string(),
            line_width: line::WIDTH.to_string(),
            line_color: line::COLOR.to_string(),
            line_style: line::STYLE.to_string(),
            grid_columns: grid::COLUMNS,
            grid_rows: grid::ROWS,
        }
    }
}

/// One layer of optional parameter values (config file, command line)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterOverrides {
    pub margin: Option<String>,
    pub horizontal_offset: Option<String>,
    pub vertical_offset: Option<String>,
    pub show_frame: Option<bool>,
    pub cell_width: Option<String>,
    pub cell_height: Option<String>,
    pub step: Option<String>,
    pub line_width: Option<String>,
    pub line_color: Option<String>,
    pub line_style: Option<String>,
    pub grid_columns: Option<i64>,
    pub grid_rows: Option<i64>,
}

fn set<T: Clone>(target: &mut T, value: &Option<T>) {
    if let Some(v) = value {
        *target = v.clone();
    }
}

impl RenderParameters {
    /// Replace every field the layer sets, keeping the rest
    pub fn apply(&mut self, overrides: &ParameterOverrides) {
        set(&mut self.margin, &overrides.margin);
        set(&mut self.horizontal_offset, &overrides.horizontal_offset);
        set(&mut self.vertical_offset, &overrides.vertical_offset);
        set(&mut self.show_frame, &overrides.show_frame);
        set(&mut self.cell_width, &overrides.cell_width);
        set(&mut self.cell_height, &overrides.cell_height);
        set(&mut self.step, &overrides.step);
        set(&mut self.line_width, &overrides.line_width);
        set(&mut self.line_color, &overrides.line_color);
        set(&mut self.line_style, &overrides.line_style);
        set(&mut self.grid_columns, &overrides.grid_columns);
        set(&mut self.grid_rows, &overrides.grid_rows);
    }

    /// Builder-style [`apply`](Self::apply)
    pub fn with(mut self, overrides: &ParameterOverrides) -> Self {
        self.apply(overrides);
        self
    }

    /// Template data: `page.*`, `grid.*` and `line.*` tables
    pub fn to_context(&self) -> TemplateContext {
        let mut page = Map::new();
        page.insert("margin".into(), Value::String(self.margin.clone()));
        page.insert(
            "hoffset".into(),
            Value::String(self.horizontal_offset.clone()),
        );
        page.insert("voffset".into(), Value::String(self.vertical_offset.clone()));
        page.insert("showframe".into(), Value::Boolean(self.show_frame));

        let mut grid = Map::new();
        grid.insert("cell_width".into(), Value::String(self.cell_width.clone()));
        grid.insert("cell_height".into(), Value::String(self.cell_height.clone()));
        grid.insert("step".into(), Value::String(self.step.clone()));
        grid.insert("columns".into(), Value::Integer(self.grid_columns));
        grid.insert("rows".into(), Value::Integer(self.grid_rows));

        let mut line = Map::new();
        line.insert("width".into(), Value::String(self.line_width.clone()));
        line.insert("color".into(), Value::String(self.line_color.clone()));
        line.insert("style".into(), Value::String(self.line_style.clone()));

        let mut root = Map::new();
        root.insert("page".into(), Value::Table(page));
        root.insert("grid".into(), Value::Table(grid));
        root.insert("line".into(), Value::Table(line));

        TemplateContext::new(Value::Table(root))
    }
}
