//! Template module - Pure text substitution template engine
//!
//! The grid document is a LaTeX source with `@@key@@` placeholders. The
//! delimiter never occurs in LaTeX, so the many literal braces of the document
//! pass through untouched.
//!
//! ## Syntax
//!
//! - Placeholders: `@@key@@` or `@@ key @@` (spaces optional)
//! - Nested access: `@@grid.columns@@`
//! - No loops, conditionals or escapes: pick other delimiters if a document
//!   needs a literal `@@`

pub mod engine;
pub mod error;
pub mod grid;

pub use engine::{render, Delimiters, Placeholder, TemplateContext, TemplateEngine};
pub use error::TemplateError;
pub use grid::{render_document, GRID_TEMPLATE};
