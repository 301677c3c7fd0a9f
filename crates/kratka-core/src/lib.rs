// Core modules
pub mod config;
pub mod deliver;
pub mod error;
pub mod params;
pub mod template;

// Re-export commonly used types
pub use deliver::{deliver, Destination};
pub use error::{KratkaError, Result};
pub use params::{ParameterOverrides, RenderParameters};
pub use template::{render_document, GRID_TEMPLATE};
