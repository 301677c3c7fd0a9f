//! Shared test helpers for template engine tests

use crate::template::engine::TemplateContext;
use toml::{toml, Value};

/// Create a simple test context with basic scalar values
pub(super) fn simple_context() -> TemplateContext {
    let data = toml! {
        title = "My Title"
        count = 42
        price = 9.99
        enabled = true
        date = 2026-01-15
    };
    TemplateContext::new(Value::Table(data))
}

/// Create a nested test context shaped like the grid document data
pub(super) fn nested_context() -> TemplateContext {
    let data = toml! {
        [page]
        margin = "1cm"
        showframe = false

        [grid]
        columns = 43
        rows = 64
        sizes = ["4mm", "5mm"]

        [line]
        style = "densely dotted"
    };
    TemplateContext::new(Value::Table(data))
}
