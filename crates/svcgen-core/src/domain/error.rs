// ============================================================================
// domain/error.rs - NAME AND KIND RULE VIOLATIONS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Everything here is detected before any I/O happens, so all variants are:
/// - Cloneable and comparable (tests match on them directly)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Service name validation
    // ========================================================================
    #[error("name should not be empty")]
    EmptyName,

    #[error("service name '{name}' should not contain underscores")]
    ContainsUnderscore { name: String },

    #[error("service name '{name}' should not contain hyphens")]
    ContainsHyphen { name: String },

    #[error("service name '{name}' should be all lowercase")]
    NotLowercase { name: String },

    #[error("service name '{name}' should not be a path")]
    PathLike { name: String },

    // ========================================================================
    // File kind resolution
    // ========================================================================
    #[error("unknown file kind '{kind}'")]
    UnknownKind { kind: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyName => vec![
                "Pass the service name as the only argument".into(),
                "Example: svcgen billing".into(),
            ],
            Self::ContainsUnderscore { name } | Self::ContainsHyphen { name } => vec![
                "Service names are single lowercase words without separators".into(),
                format!("Try: {}", name.replace(['_', '-'], "").to_lowercase()),
            ],
            Self::NotLowercase { name } => vec![
                "Service names must be entirely lowercase".into(),
                format!("Try: {}", name.to_lowercase()),
            ],
            Self::PathLike { .. } => vec![
                "The name becomes a file and directory name under api/ and cmd/".into(),
                "Use a plain word such as: billing".into(),
            ],
            Self::UnknownKind { .. } => vec![
                format!(
                    "Supported kinds: {}",
                    crate::domain::registry::KIND_REGISTRY
                        .iter()
                        .map(|def| def.kind.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
                "Check --kind flags and the generate.kinds config value".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyName
            | Self::ContainsUnderscore { .. }
            | Self::ContainsHyphen { .. }
            | Self::NotLowercase { .. }
            | Self::PathLike { .. } => ErrorCategory::Validation,
            Self::UnknownKind { .. } => ErrorCategory::Configuration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
}
