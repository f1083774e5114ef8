//! Implementation of the generate command.
//!
//! Responsibility: merge flags with configuration, wire the adapters into a
//! `GenerateService`, and report progress. No business logic lives here.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use svcgen_adapters::{DirTemplateStore, LocalFilesystem, SimpleRenderer, resolve_templates_dir};
use svcgen_core::{
    application::GenerateService,
    domain::{FileKind, FilePlan, ServiceName, TemplateRef},
};

use crate::{
    cli::GenerateArgs,
    config::AppConfig,
    error::{CliError, CliResult, CoreCategory},
    output::OutputManager,
};

/// Flags and configuration merged into one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub name: String,
    pub kinds: Vec<String>,
    pub templates_dir: Option<PathBuf>,
    pub output_root: PathBuf,
    pub dry_run: bool,
}

impl GenerateRequest {
    /// Flags win over configuration. A missing name is reported here, before
    /// any validation runs.
    pub fn resolve(args: GenerateArgs, config: AppConfig) -> CliResult<Self> {
        let name = args.name.ok_or(CliError::MissingName)?;

        let kinds = if args.kinds.is_empty() {
            config.generate.kinds
        } else {
            args.kinds
        };
        if kinds.is_empty() {
            return Err(CliError::Config {
                service: Some(name),
                message: "no file kinds configured; set generate.kinds or pass --kind".into(),
            });
        }

        Ok(Self {
            name,
            kinds,
            templates_dir: args.templates_dir.or(config.generate.templates_dir),
            output_root: args.output.unwrap_or(config.generate.output_root),
            dry_run: args.dry_run,
        })
    }
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    service: &'a str,
    title: String,
    dry_run: bool,
    output_root: &'a Path,
    templates_dir: &'a Path,
    files: Vec<ReportFile>,
}

#[derive(Debug, Serialize)]
struct ReportFile {
    kind: FileKind,
    template: TemplateRef,
    path: PathBuf,
}

/// Execute the generate command.
///
/// Sequence:
/// 1. Merge flags with configuration
/// 2. Validate the name and resolve one plan per kind
/// 3. Early-exit with a preview if `--dry-run`
/// 4. Announce, generate, announce completion
#[instrument(skip_all, fields(service = args.name.as_deref().unwrap_or("")))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: &OutputManager) -> CliResult<()> {
    let request = GenerateRequest::resolve(args, config)?;
    let templates_dir = resolve_templates_dir(request.templates_dir.as_deref());
    debug!(
        templates = %templates_dir.display(),
        root = %request.output_root.display(),
        kinds = ?request.kinds,
        "request resolved"
    );

    let service = GenerateService::new(
        Box::new(DirTemplateStore::new(&templates_dir)),
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    )
    .with_output_root(&request.output_root);

    // Name and kind problems surface here, before anything is announced.
    // A rejected name already quotes itself; other failures get the name.
    let (name, plans) = service
        .plan(&request.name, &request.kinds)
        .map_err(|source| match source.category() {
            CoreCategory::Validation => CliError::Core(source),
            _ => CliError::Generation {
                name: request.name.clone(),
                source,
            },
        })?;

    if request.dry_run {
        return preview(&name, &plans, &request, &templates_dir, output);
    }

    output.header(&format!("creating {name} service"))?;

    let generated = service
        .execute(name.clone(), &plans)
        .map_err(|source| CliError::Generation {
            name: name.to_string(),
            source,
        })?;

    for file in &generated.files {
        output.info(&format!(
            "wrote {}",
            relative_to(&file.path, &request.output_root).display()
        ))?;
    }
    output.success(&format!("finished creating {name} service"))?;

    output.json(&Report {
        service: name.as_str(),
        title: name.title(),
        dry_run: false,
        output_root: &request.output_root,
        templates_dir: &templates_dir,
        files: generated
            .files
            .iter()
            .zip(&plans)
            .map(|(file, plan)| ReportFile {
                kind: file.kind,
                template: plan.template,
                path: relative_to(&file.path, &request.output_root).to_path_buf(),
            })
            .collect(),
    })?;

    info!(service = %name, files = generated.files.len(), "service created");
    Ok(())
}

/// Describe the plans without touching the filesystem.
fn preview(
    name: &ServiceName,
    plans: &[FilePlan],
    request: &GenerateRequest,
    templates_dir: &Path,
    output: &OutputManager,
) -> CliResult<()> {
    output.warning(&format!("dry run: nothing will be written for {name}"))?;
    for plan in plans {
        output.print(&format!(
            "  {:<5} {} (from {})",
            plan.kind.as_str(),
            plan.output_path().display(),
            templates_dir.join(plan.template.file_name()).display()
        ))?;
    }

    output.json(&Report {
        service: name.as_str(),
        title: name.title(),
        dry_run: true,
        output_root: &request.output_root,
        templates_dir,
        files: plans
            .iter()
            .map(|plan| ReportFile {
                kind: plan.kind,
                template: plan.template,
                path: plan.output_path(),
            })
            .collect(),
    })?;
    Ok(())
}

fn relative_to<'a>(path: &'a Path, root: &Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}
