//! Template engine implementation

mod helpers;
mod tokenize;

use crate::template::error::TemplateError;
use toml::Value;

use helpers::{resolve_key, stringify_value};
use tokenize::{Segment, Tokenizer};

/// Placeholder delimiter pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiters {
    pub open: String,
    pub close: String,
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            open: "@@".to_string(),
            close: "@@".to_string(),
        }
    }
}

/// A placeholder found in a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub key: String,
    pub line: usize,
}

/// Template context holding TOML data for rendering
#[derive(Debug, Clone)]
pub struct TemplateContext {
    data: Value,
}

impl TemplateContext {
    /// Create a new template context from TOML value
    pub fn new(data: Value) -> Self {
        Self { data }
    }

    /// Get the underlying TOML value
    pub fn data(&self) -> &Value {
        &self.data
    }
}

/// Template engine for rendering templates with TOML data
#[derive(Debug, Clone, Default)]
pub struct TemplateEngine {
    delimiters: Delimiters,
}

impl TemplateEngine {
    /// Create a new template engine using `@@` delimiters
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom delimiters
    pub fn with_delimiters(
        open: impl Into<String>,
        close: impl Into<String>,
    ) -> Result<Self, TemplateError> {
        let delimiters = Delimiters {
            open: open.into(),
            close: close.into(),
        };
        if delimiters.open.is_empty() || delimiters.close.is_empty() {
            return Err(TemplateError::EmptyDelimiter);
        }
        Ok(Self { delimiters })
    }

    pub fn delimiters(&self) -> &Delimiters {
        &self.delimiters
    }

    fn tokenize<'t>(&self, template: &'t str) -> Tokenizer<'t, '_> {
        Tokenizer::new(template, &self.delimiters.open, &self.delimiters.close)
    }

    /// Render a template with the given context
    pub fn render(
        &self,
        template: &str,
        context: &TemplateContext,
    ) -> Result<String, TemplateError> {
        let mut output = String::with_capacity(template.len());

        for segment in self.tokenize(template) {
            match segment? {
                Segment::Text(text) => output.push_str(text),
                Segment::Placeholder { key, line } => {
                    let value = resolve_key(context.data(), key).ok_or_else(|| {
                        TemplateError::UndefinedKey {
                            key: key.to_string(),
                            line,
                        }
                    })?;
                    output.push_str(&stringify_value(value, key)?);
                }
            }
        }

        Ok(output)
    }

    /// List the placeholders of a template in order of appearance
    pub fn placeholders(&self, template: &str) -> Result<Vec<Placeholder>, TemplateError> {
        let mut found = Vec::new();
        for segment in self.tokenize(template) {
            if let Segment::Placeholder { key, line } = segment? {
                found.push(Placeholder {
                    key: key.to_string(),
                    line,
                });
            }
        }
        Ok(found)
    }
}

/// Convenience function to render a template with `@@` delimiters
pub fn render(template: &str, context: &TemplateContext) -> Result<String, TemplateError> {
    TemplateEngine::new().render(template, context)
}

#[cfg(test)]
mod tests;
