//! Field-substitution renderer for `{{.key}}` templates.
//!
//! Supports the subset of Go `text/template` syntax the service templates
//! use: field references with optional surrounding whitespace and the
//! `{{- ` / ` -}}` trim markers. Anything else inside an action is rejected
//! rather than passed through.

use svcgen_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::{TemplateData, TemplateRef},
    error::SvcgenResult,
};
use thiserror::Error;
use tracing::{instrument, trace};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Why a template source could not be rendered.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("unterminated action starting on line {line}")]
    Unterminated { line: usize },

    #[error("unsupported action '{{{{{action}}}}}' on line {line}; only field references like {{{{.name}}}} are allowed")]
    UnsupportedAction { action: String, line: usize },

    #[error("no value for key '{key}' on line {line}")]
    UnknownKey { key: String, line: usize },
}

/// Simple renderer using field substitution.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }

    /// Render `source` against `data` without the port's error wrapping.
    pub fn render_str(&self, source: &str, data: &TemplateData) -> Result<String, RenderError> {
        let mut out = String::with_capacity(source.len());
        let mut rest = source;

        while let Some(open) = rest.find(OPEN) {
            let line = line_of(source, rest, open);
            let mut text = &rest[..open];
            let mut after = &rest[open + OPEN.len()..];

            if let Some(stripped) = strip_left_trim(after) {
                text = text.trim_end();
                after = stripped;
            }

            let close = after.find(CLOSE).ok_or(RenderError::Unterminated { line })?;
            let mut action = &after[..close];
            rest = &after[close + CLOSE.len()..];

            if let Some(stripped) = strip_right_trim(action) {
                action = stripped;
                rest = rest.trim_start();
            }

            out.push_str(text);
            let key = field_name(action).ok_or_else(|| RenderError::UnsupportedAction {
                action: action.trim().to_string(),
                line,
            })?;
            let value = data.get(key).ok_or_else(|| RenderError::UnknownKey {
                key: key.to_string(),
                line,
            })?;
            trace!(key, line, "substituted field");
            out.push_str(value);
        }

        out.push_str(rest);
        Ok(out)
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip(self, source, data), fields(template = %template))]
    fn render(
        &self,
        template: TemplateRef,
        source: &str,
        data: &TemplateData,
    ) -> SvcgenResult<String> {
        self.render_str(source, data).map_err(|e| {
            ApplicationError::TemplateRenderFailed {
                template,
                reason: e.to_string(),
            }
            .into()
        })
    }
}

/// `{{- ` trims preceding whitespace; the marker needs a space after it.
fn strip_left_trim(after_open: &str) -> Option<&str> {
    let stripped = after_open.strip_prefix('-')?;
    stripped
        .starts_with(|c: char| c.is_ascii_whitespace())
        .then_some(stripped)
}

/// ` -}}` trims following whitespace; the marker needs a space before it.
fn strip_right_trim(action: &str) -> Option<&str> {
    let stripped = action.strip_suffix('-')?;
    stripped
        .ends_with(|c: char| c.is_ascii_whitespace())
        .then_some(stripped)
}

/// `.key` with an identifier key, or `None` for any other action.
fn field_name(action: &str) -> Option<&str> {
    let key = action.trim().strip_prefix('.')?;
    let mut chars = key.chars();
    let first = chars.next()?;
    let valid = (first.is_alphabetic() || first == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_');
    valid.then_some(key)
}

/// 1-based line of the action starting at `rest[offset]`.
fn line_of(source: &str, rest: &str, offset: usize) -> usize {
    let consumed = source.len() - rest.len() + offset;
    source[..consumed].matches('\n').count() + 1
}
