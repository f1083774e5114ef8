//! Unified error handling for svcgen core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with categories and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for svcgen core operations.
#[derive(Debug, Error)]
pub enum SvcgenError {
    /// Rule violations detected before any I/O (name, kind).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Failures while loading, rendering or writing a plan.
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl SvcgenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// Check if this error is retryable.
    ///
    /// Every failure is bad input or a bad local environment; nothing is
    /// worth retrying.
    pub fn is_retryable(&self) -> bool {
        false
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad service name.
    Validation,
    /// Unknown kind, missing or malformed template.
    Configuration,
    /// Filesystem failure.
    Internal,
}

/// Convenient result type alias.
pub type SvcgenResult<T> = Result<T, SvcgenError>;
