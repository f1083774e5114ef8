use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{
    error::DomainError,
    registry::{KindDef, kind_def},
    value_objects::{FileKind, ServiceName, TemplateRef},
};

/// Key → value substitutions handed to the renderer.
///
/// `BTreeMap` keeps iteration order stable so dry-run and JSON output are
/// deterministic.
pub type TemplateData = BTreeMap<String, String>;

/// Resolved instructions for producing one output file.
///
/// Created per (service name, kind) pair and consumed once by the
/// materializer. The output directory is relative; the generate service
/// anchors it under its output root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilePlan {
    pub kind: FileKind,
    pub template: TemplateRef,
    pub output_dir: PathBuf,
    pub file_name: String,
    pub data: TemplateData,
}

impl FilePlan {
    /// Build the plan for a kind given by its string tag.
    ///
    /// Fails with [`DomainError::UnknownKind`] carrying `kind` when the tag is
    /// not one of the registered kinds.
    pub fn build(name: &ServiceName, kind: &str) -> Result<Self, DomainError> {
        let kind: FileKind = kind.parse()?;
        Ok(Self::for_kind(name, kind))
    }

    /// Build the plan for an already-parsed kind.
    pub fn for_kind(name: &ServiceName, kind: FileKind) -> Self {
        Self::from_def(name, kind_def(kind))
    }

    fn from_def(name: &ServiceName, def: &KindDef) -> Self {
        let mut data = TemplateData::new();
        data.insert("name".into(), name.title());

        Self {
            kind: def.kind,
            template: def.template,
            output_dir: def.dir.resolve(name),
            file_name: def.file.resolve(name),
            data,
        }
    }

    /// `output_dir/file_name`, still relative.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.file_name)
    }

    /// Output directory anchored under `root`.
    pub fn dir_under(&self, root: &Path) -> PathBuf {
        root.join(&self.output_dir)
    }
}
