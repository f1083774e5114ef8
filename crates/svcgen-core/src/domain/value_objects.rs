//! Domain value objects: ServiceName, FileKind, TemplateRef.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity. They
//! hold no layout knowledge: which template, directory and file name belong
//! to a kind lives in `registry.rs`. This file defines the types, their
//! string representations, and their parsers.

use crate::domain::{common::title_case, error::DomainError, validation::validate_name};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ServiceName ──────────────────────────────────────────────────────────────

/// A validated service name.
///
/// Invariant: non-empty, no `_`, no `-`, entirely lowercase. The only way to
/// obtain one is [`ServiceName::parse`], so holding a `ServiceName` is proof
/// the name passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ServiceName(String);

impl ServiceName {
    /// Validate `name` and wrap it.
    pub fn parse(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Title-cased form used as the `name` template variable.
    pub fn title(&self) -> String {
        title_case(&self.0)
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ServiceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ServiceName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ── FileKind ─────────────────────────────────────────────────────────────────

/// The category of stub being generated.
///
/// Closed set. To add a kind: add a variant here, its `as_str`/`FromStr`
/// arms, and one [`KindDef`](crate::domain::registry::KindDef) row in
/// `registry.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// OpenAPI YAML stub.
    Api,
    /// Program entry-point stub.
    Main,
}

impl FileKind {
    pub const ALL: [FileKind; 2] = [FileKind::Api, FileKind::Main];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Main => "main",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "api" => Ok(Self::Api),
            "main" => Ok(Self::Main),
            other => Err(DomainError::UnknownKind { kind: other.into() }),
        }
    }
}

// ── TemplateRef ──────────────────────────────────────────────────────────────

/// Name of a template asset inside the templates directory.
///
/// The asset's contents are owned by the surrounding project; this is only
/// the key used to load it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TemplateRef(&'static str);

impl TemplateRef {
    pub const fn new(file_name: &'static str) -> Self {
        Self(file_name)
    }

    pub const fn file_name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for TemplateRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_name_parses_valid_input() {
        let name = ServiceName::parse("billing").unwrap();
        assert_eq!(name.as_str(), "billing");
        assert_eq!(name.to_string(), "billing");
        assert_eq!(name.title(), "Billing");
    }

    #[test]
    fn service_name_rejects_invalid_input() {
        assert_eq!(ServiceName::parse(""), Err(DomainError::EmptyName));
        assert!("Billing".parse::<ServiceName>().is_err());
    }

    #[test]
    fn file_kind_round_trips_through_str() {
        for kind in FileKind::ALL {
            assert_eq!(kind.as_str().parse::<FileKind>().unwrap(), kind);
        }
    }

    #[test]
    fn file_kind_is_case_sensitive() {
        assert_eq!(
            "API".parse::<FileKind>(),
            Err(DomainError::UnknownKind { kind: "API".into() })
        );
    }

    #[test]
    fn unknown_kind_carries_value() {
        match "grpc".parse::<FileKind>() {
            Err(DomainError::UnknownKind { kind }) => assert_eq!(kind, "grpc"),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
