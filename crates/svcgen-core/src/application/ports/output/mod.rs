//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `svcgen-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{TemplateData, TemplateRef};
use crate::error::SvcgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `svcgen_adapters::filesystem::LocalFilesystem` (production)
/// - `svcgen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// `true` if `path` exists and is a directory.
    fn dir_exists(&self, path: &Path) -> bool;

    /// Create a directory and all missing parents.
    ///
    /// Errors map to `ApplicationError::DirCreateFailed`.
    fn create_dir_all(&self, path: &Path) -> SvcgenResult<()>;

    /// Create or truncate `path` and write `content` in full.
    ///
    /// Errors map to `ApplicationError::FileCreateFailed` when the file
    /// cannot be opened and `ApplicationError::FileWriteFailed` when writing
    /// fails. Implementations must release the file handle on every path.
    fn write_file(&self, path: &Path, content: &[u8]) -> SvcgenResult<()>;
}

/// Port for template asset retrieval.
///
/// Implemented by:
/// - `svcgen_adapters::template_store::DirTemplateStore` (templates directory)
/// - `svcgen_adapters::template_store::InMemoryTemplates` (testing, embedding)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Load the raw source of a template asset.
    ///
    /// Errors map to `ApplicationError::TemplateLoadFailed`.
    fn load(&self, template: TemplateRef) -> SvcgenResult<String>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `svcgen_adapters::renderer::SimpleRenderer` (`{{.key}}` substitution)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Substitute `data` into `source`.
    ///
    /// `template` is only used for error reporting. Errors map to
    /// `ApplicationError::TemplateRenderFailed`.
    fn render(
        &self,
        template: TemplateRef,
        source: &str,
        data: &TemplateData,
    ) -> SvcgenResult<String>;
}
