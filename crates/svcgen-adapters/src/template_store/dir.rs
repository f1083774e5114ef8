//! Directory-backed template store and templates directory discovery.
//!
//! # Resolution order
//!
//! An explicitly configured directory is always used as given. Otherwise the
//! first candidate that exists as a directory wins:
//!
//! 1. **`$SVCGEN_TEMPLATES_DIR`**, the environment override.
//! 2. **`./tools/generate-service/templates`**, the layout of a repository
//!    that vendors its generator templates.
//! 3. **`<executable-dir>/templates`**, for a binary installed next to its
//!    templates.
//!
//! When nothing exists the repository layout path is returned anyway, so a
//! later load reports the path the user most likely expected.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use svcgen_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::TemplateRef,
    error::SvcgenResult,
};
use tracing::{debug, instrument};

/// Environment variable naming a templates directory.
pub const TEMPLATES_DIR_ENV: &str = "SVCGEN_TEMPLATES_DIR";

/// Templates location relative to the repository root.
pub const LEGACY_TEMPLATES_DIR: &str = "tools/generate-service/templates";

/// Resolve the directory templates are read from.
#[instrument(level = "debug")]
pub fn resolve_templates_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        debug!(path = %dir.display(), "using configured templates directory");
        return dir.to_path_buf();
    }

    let env_dir = env::var_os(TEMPLATES_DIR_ENV).map(PathBuf::from);
    first_existing(candidate_paths(env_dir, exe_sibling_templates()))
}

/// Build the ordered list of candidate paths to probe.
fn candidate_paths(env_dir: Option<PathBuf>, exe_sibling: Option<PathBuf>) -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(3);
    paths.extend(env_dir);
    paths.push(PathBuf::from(LEGACY_TEMPLATES_DIR));
    paths.extend(exe_sibling);
    paths
}

fn first_existing(candidates: Vec<PathBuf>) -> PathBuf {
    for candidate in candidates {
        if candidate.is_dir() {
            debug!(path = %candidate.display(), "templates directory found");
            return candidate;
        }
        debug!(path = %candidate.display(), "candidate does not exist, skipping");
    }

    debug!("no templates directory found, falling back to repository layout");
    PathBuf::from(LEGACY_TEMPLATES_DIR)
}

/// `<directory of current executable>/templates`, if the executable path is
/// known.
fn exe_sibling_templates() -> Option<PathBuf> {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.join("templates")))
}

/// Reads `<root>/<template file name>` on every load.
#[derive(Debug, Clone)]
pub struct DirTemplateStore {
    root: PathBuf,
}

impl DirTemplateStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path a template is read from.
    pub fn location(&self, template: TemplateRef) -> PathBuf {
        self.root.join(template.file_name())
    }
}

impl TemplateStore for DirTemplateStore {
    fn load(&self, template: TemplateRef) -> SvcgenResult<String> {
        let location = self.location(template);
        debug!(path = %location.display(), "loading template");

        fs::read_to_string(&location).map_err(|source| {
            ApplicationError::TemplateLoadFailed {
                template,
                location,
                source,
            }
            .into()
        })
    }
}
