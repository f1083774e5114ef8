//! Generate Service - main application orchestrator.
//!
//! This service coordinates the whole generation workflow:
//! 1. Validate the service name
//! 2. Build one plan per requested kind
//! 3. Materialize each plan (ensure directory, render, write)
//!
//! Validation and plan building happen before any I/O, so a bad name or an
//! unknown kind never touches the filesystem. Materialization stops at the
//! first failure; files already written stay on disk.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{Filesystem, TemplateRenderer, TemplateStore},
    domain::{FileKind, FilePlan, ServiceName},
    error::SvcgenResult,
};

/// One file written by [`GenerateService::generate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    pub kind: FileKind,
    pub path: PathBuf,
}

/// Outcome of a successful generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Generated {
    pub service: ServiceName,
    pub files: Vec<GeneratedFile>,
}

/// Main generation service.
///
/// Owns the adapters and the output root every plan is anchored under.
pub struct GenerateService {
    templates: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    output_root: PathBuf,
}

impl GenerateService {
    /// Create a new generate service writing under the current directory.
    pub fn new(
        templates: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            templates,
            renderer,
            filesystem,
            output_root: PathBuf::from("."),
        }
    }

    /// Anchor generated paths under `root` instead of `.`.
    pub fn with_output_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.output_root = root.into();
        self
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// Validate `name` and build one plan per kind, in order.
    ///
    /// Repeated kinds are planned once. No I/O happens here.
    pub fn plan<K: AsRef<str>>(
        &self,
        name: &str,
        kinds: &[K],
    ) -> SvcgenResult<(ServiceName, Vec<FilePlan>)> {
        let service = ServiceName::parse(name)?;

        let mut plans: Vec<FilePlan> = Vec::with_capacity(kinds.len());
        for kind in kinds {
            let plan = FilePlan::build(&service, kind.as_ref())?;
            if plans.iter().any(|p| p.kind == plan.kind) {
                debug!(kind = %plan.kind, "kind requested twice, skipping");
                continue;
            }
            debug!(
                kind = %plan.kind,
                template = %plan.template,
                path = %plan.output_path().display(),
                "plan resolved"
            );
            plans.push(plan);
        }

        Ok((service, plans))
    }

    /// Generate every requested kind for `name`.
    ///
    /// This is the main use case. The first failing plan aborts the rest.
    #[instrument(skip_all, fields(service = %name, root = %self.output_root.display()))]
    pub fn generate<K: AsRef<str>>(&self, name: &str, kinds: &[K]) -> SvcgenResult<Generated> {
        let (service, plans) = self.plan(name, kinds)?;
        self.execute(service, &plans)
    }

    /// Materialize already validated plans in order, stopping at the first
    /// failure. Files written before the failure are left in place.
    #[instrument(skip_all, fields(service = %service))]
    pub fn execute(&self, service: ServiceName, plans: &[FilePlan]) -> SvcgenResult<Generated> {
        info!(kinds = plans.len(), "generating service files");

        let mut files = Vec::with_capacity(plans.len());
        for plan in plans {
            let path = self.materialize(plan).inspect_err(|e| {
                warn!(kind = %plan.kind, error = %e, "generation aborted");
            })?;
            files.push(GeneratedFile {
                kind: plan.kind,
                path,
            });
        }

        info!(files = files.len(), "generation finished");
        Ok(Generated { service, files })
    }

    /// Produce the file described by `plan` and return the path written.
    ///
    /// 1. Ensure the output directory exists (existing directories are left
    ///    untouched)
    /// 2. Load and render the template into memory
    /// 3. Create or truncate the output file and write the buffer
    #[instrument(skip_all, fields(kind = %plan.kind))]
    pub fn materialize(&self, plan: &FilePlan) -> SvcgenResult<PathBuf> {
        let dir = plan.dir_under(&self.output_root);
        if !self.filesystem.dir_exists(&dir) {
            debug!(dir = %dir.display(), "creating output directory");
            self.filesystem.create_dir_all(&dir)?;
        }

        let source = self.templates.load(plan.template)?;
        let rendered = self.renderer.render(plan.template, &source, &plan.data)?;

        let path = dir.join(&plan.file_name);
        self.filesystem.write_file(&path, rendered.as_bytes())?;

        info!(path = %path.display(), bytes = rendered.len(), "file written");
        Ok(path)
    }
}
