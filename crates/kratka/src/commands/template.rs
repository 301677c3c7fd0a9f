//! Template command - print the built-in LaTeX template

use anyhow::Result;
use kratka_core::GRID_TEMPLATE;

use crate::output::print_raw;

/// Print the unrendered template, placeholders included
pub fn run() -> Result<()> {
    print_raw(GRID_TEMPLATE)?;
    Ok(())
}
