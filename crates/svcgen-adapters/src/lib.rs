//! Infrastructure adapters for svcgen.
//!
//! This crate implements the ports defined in `svcgen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod renderer;
pub mod template_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::{RenderError, SimpleRenderer};
pub use template_store::{
    DirTemplateStore, InMemoryTemplates, LEGACY_TEMPLATES_DIR, TEMPLATES_DIR_ENV,
    resolve_templates_dir,
};
