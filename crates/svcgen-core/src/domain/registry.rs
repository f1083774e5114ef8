//! File kind registry.
//!
//! Each [`FileKind`] is described exactly once by a [`KindDef`]: which
//! template asset it renders, and where the output lands. Plan building is a
//! table lookup; nothing else in the crate matches on kinds.
//!
//! # Adding a New Kind
//!
//! 1. Add a variant to `FileKind` in `value_objects.rs`
//! 2. Add one [`KindDef`] static, list it in [`KIND_REGISTRY`] and map it in
//!    [`kind_def`]
//! 3. Ship the template asset next to the others

use std::path::PathBuf;

use crate::domain::value_objects::{FileKind, ServiceName, TemplateRef};

/// Where a kind's output directory lives, relative to the output root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirLayout {
    /// The same directory for every service, e.g. `api/`.
    Shared(&'static str),
    /// A per-service directory under a parent, e.g. `cmd/<name>/`.
    PerService(&'static str),
}

impl DirLayout {
    pub fn resolve(&self, name: &ServiceName) -> PathBuf {
        match self {
            Self::Shared(dir) => PathBuf::from(dir),
            Self::PerService(parent) => PathBuf::from(parent).join(name.as_str()),
        }
    }
}

/// How a kind's output file is named.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileNaming {
    /// `<name>.<extension>`
    ServiceWithExtension(&'static str),
    /// A fixed file name, e.g. `main.go`.
    Fixed(&'static str),
}

impl FileNaming {
    pub fn resolve(&self, name: &ServiceName) -> String {
        match self {
            Self::ServiceWithExtension(ext) => format!("{name}.{ext}"),
            Self::Fixed(file) => (*file).to_string(),
        }
    }
}

/// Everything the plan builder needs to know about one kind.
#[derive(Debug, Clone, Copy)]
pub struct KindDef {
    pub kind: FileKind,
    pub template: TemplateRef,
    pub dir: DirLayout,
    pub file: FileNaming,
}

static API: KindDef = KindDef {
    kind: FileKind::Api,
    template: TemplateRef::new("openapi.yml.tmpl"),
    dir: DirLayout::Shared("api"),
    file: FileNaming::ServiceWithExtension("yml"),
};

static MAIN: KindDef = KindDef {
    kind: FileKind::Main,
    template: TemplateRef::new("main.go.tmpl"),
    dir: DirLayout::PerService("cmd"),
    file: FileNaming::Fixed("main.go"),
};

/// Single source of truth for file kinds, in generation order.
pub static KIND_REGISTRY: &[&KindDef] = &[&API, &MAIN];

/// Definition for a kind. The match is exhaustive, so a new `FileKind`
/// variant does not compile until it has a row.
pub fn kind_def(kind: FileKind) -> &'static KindDef {
    match kind {
        FileKind::Api => &API,
        FileKind::Main => &MAIN,
    }
}
