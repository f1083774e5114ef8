// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for svcgen.
//!
//! Pure logic with no I/O: service name rules, the closed set of file kinds,
//! and the plan builder that turns (name, kind) into a [`FilePlan`].
//! Loading templates, rendering them and touching the filesystem are handled
//! via ports defined in the application layer.
//!
//! - **No async**: everything is synchronous
//! - **No I/O**: no filesystem, network, or environment access
//! - **Immutable values**: `ServiceName` and `FilePlan` never change after
//!   construction
pub mod common;
pub mod entities;
pub mod error;
pub mod registry;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use entities::file_plan::{FilePlan, TemplateData};

pub use error::{DomainError, ErrorCategory};

pub use registry::{DirLayout, FileNaming, KIND_REGISTRY, KindDef, kind_def};

pub use value_objects::{FileKind, ServiceName, TemplateRef};

pub use common::title_case;
pub use validation::validate_name;
