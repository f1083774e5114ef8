//! In-memory template store.

use std::{
    collections::HashMap,
    io,
    path::PathBuf,
    sync::{Arc, PoisonError, RwLock},
};

use svcgen_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::TemplateRef,
    error::SvcgenResult,
};

/// Thread-safe map of template sources keyed by template reference.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTemplates {
    inner: Arc<RwLock<HashMap<TemplateRef, String>>>,
}

impl InMemoryTemplates {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(self, template: TemplateRef, source: impl Into<String>) -> Self {
        self.insert(template, source);
        self
    }

    /// Add or replace a template source.
    pub fn insert(&self, template: TemplateRef, source: impl Into<String>) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(template, source.into());
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TemplateStore for InMemoryTemplates {
    fn load(&self, template: TemplateRef) -> SvcgenResult<String> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);

        inner.get(&template).cloned().ok_or_else(|| {
            ApplicationError::TemplateLoadFailed {
                template,
                location: PathBuf::from(template.file_name()),
                source: io::Error::new(io::ErrorKind::NotFound, "template not registered"),
            }
            .into()
        })
    }
}
