//! Template store adapters.

mod dir;
mod memory;

pub use dir::{DirTemplateStore, LEGACY_TEMPLATES_DIR, TEMPLATES_DIR_ENV, resolve_templates_dir};
pub use memory::InMemoryTemplates;
