//! Tokenization for template engine
//!
//! Splits a template into literal text and placeholders in a single forward
//! pass. Every byte is visited once.

use crate::template::error::TemplateError;

use super::helpers::{count_newlines, is_valid_key};

/// A piece of a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment<'t> {
    /// Literal text copied to the output unchanged
    Text(&'t str),

    /// `@@key@@` with surrounding whitespace trimmed from the key
    Placeholder {
        key: &'t str,
        /// Line number where the placeholder starts
        line: usize,
    },
}

/// Iterator over the segments of a template
///
/// Yields at most one error and stops afterwards.
pub(crate) struct Tokenizer<'t, 'd> {
    template: &'t str,
    open: &'d str,
    close: &'d str,
    pos: usize,
    line: usize,
    done: bool,
}

impl<'t, 'd> Tokenizer<'t, 'd> {
    pub(crate) fn new(template: &'t str, open: &'d str, close: &'d str) -> Self {
        Self {
            template,
            open,
            close,
            pos: 0,
            line: 1,
            done: false,
        }
    }

    fn fail(&mut self, message: String) -> Option<Result<Segment<'t>, TemplateError>> {
        self.done = true;
        Some(Err(TemplateError::MalformedSyntax {
            message,
            line: self.line,
        }))
    }

    fn placeholder(&mut self) -> Option<Result<Segment<'t>, TemplateError>> {
        let content_start = self.pos + self.open.len();
        let Some(close_offset) = self.template[content_start..].find(self.close) else {
            return self.fail("Unclosed placeholder".to_string());
        };

        let raw = &self.template[content_start..content_start + close_offset];
        let key = raw.trim();
        if !is_valid_key(key) {
            return self.fail(format!("Invalid placeholder key '{}'", key));
        }

        let line = self.line;
        self.line += count_newlines(raw);
        self.pos = content_start + close_offset + self.close.len();
        Some(Ok(Segment::Placeholder { key, line }))
    }
}

impl<'t> Iterator for Tokenizer<'t, '_> {
    type Item = Result<Segment<'t>, TemplateError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.pos >= self.template.len() {
            return None;
        }

        let remaining = &self.template[self.pos..];
        match remaining.find(self.open) {
            Some(0) => self.placeholder(),
            Some(offset) => {
                let text = &remaining[..offset];
                self.line += count_newlines(text);
                self.pos += offset;
                Some(Ok(Segment::Text(text)))
            }
            None => {
                self.pos = self.template.len();
                Some(Ok(Segment::Text(remaining)))
            }
        }
    }
}
