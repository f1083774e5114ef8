//! Application layer errors.
//!
//! These errors represent failures while materializing plans, not rule
//! violations. Rule violations are `DomainError` from `crate::domain`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::TemplateRef;
use crate::error::ErrorCategory;

/// Errors that occur while materializing a file plan.
///
/// I/O variants carry the underlying [`io::Error`] as their source so the
/// CLI can print the full cause chain.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The output directory could not be created.
    #[error("failed to create directory {}: {source}", .path.display())]
    DirCreateFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output file could not be created or truncated.
    #[error("failed to create file {}: {source}", .path.display())]
    FileCreateFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the rendered buffer failed; the file may be left truncated.
    #[error("failed to write file {}: {source}", .path.display())]
    FileWriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The template asset is missing or unreadable.
    #[error("failed to load template {template} from {}: {source}", .location.display())]
    TemplateLoadFailed {
        template: TemplateRef,
        location: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The template asset is malformed or references unknown data.
    #[error("failed to render template {template}: {reason}")]
    TemplateRenderFailed {
        template: TemplateRef,
        reason: String,
    },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DirCreateFailed { path, .. } => vec![
                format!("Could not create: {}", path.display()),
                "Check that you have write permissions".into(),
                "Make sure no regular file sits where a directory is expected".into(),
            ],
            Self::FileCreateFailed { path, .. } => vec![
                format!("Could not open for writing: {}", path.display()),
                "Check that you have write permissions".into(),
                "Make sure the path is not a directory".into(),
            ],
            Self::FileWriteFailed { path, .. } => vec![
                format!("The file may be incomplete: {}", path.display()),
                "Check available disk space".into(),
                "Re-run once the problem is fixed; output files are overwritten".into(),
            ],
            Self::TemplateLoadFailed { location, .. } => vec![
                format!("Expected a template at: {}", location.display()),
                "Point --templates-dir (or SVCGEN_TEMPLATES_DIR) at the templates directory"
                    .into(),
            ],
            Self::TemplateRenderFailed { template, .. } => vec![
                format!("Template '{template}' is malformed"),
                "Templates may only reference {{.name}}".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DirCreateFailed { .. }
            | Self::FileCreateFailed { .. }
            | Self::FileWriteFailed { .. } => ErrorCategory::Internal,
            Self::TemplateLoadFailed { .. } | Self::TemplateRenderFailed { .. } => {
                ErrorCategory::Configuration
            }
        }
    }
}
