//! Integration tests for svcgen-core, driven through the public API with
//! small in-test port implementations.

use std::{
    collections::HashMap,
    io,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use svcgen_core::{
    application::ApplicationError,
    domain::{DomainError, FileKind, FilePlan, ServiceName},
    prelude::*,
};

#[derive(Clone, Default)]
struct RecordingFs {
    files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
    dirs: Arc<Mutex<Vec<PathBuf>>>,
}

impl Filesystem for RecordingFs {
    fn dir_exists(&self, path: &Path) -> bool {
        self.dirs.lock().unwrap().iter().any(|d| d == path)
    }

    fn create_dir_all(&self, path: &Path) -> SvcgenResult<()> {
        self.dirs.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> SvcgenResult<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }
}

struct FixedStore;

impl TemplateStore for FixedStore {
    fn load(&self, template: TemplateRef) -> SvcgenResult<String> {
        Ok(format!("{}:{{{{.name}}}}", template.file_name()))
    }
}

/// Replaces the literal `{{.name}}` marker; enough for wiring tests.
struct MarkerRenderer;

impl TemplateRenderer for MarkerRenderer {
    fn render(
        &self,
        _template: TemplateRef,
        source: &str,
        data: &TemplateData,
    ) -> SvcgenResult<String> {
        Ok(source.replace("{{.name}}", &data["name"]))
    }
}

struct MissingStore;

impl TemplateStore for MissingStore {
    fn load(&self, template: TemplateRef) -> SvcgenResult<String> {
        Err(ApplicationError::TemplateLoadFailed {
            template,
            location: PathBuf::from(template.file_name()),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        }
        .into())
    }
}

fn service_with(fs: RecordingFs, store: Box<dyn TemplateStore>) -> GenerateService {
    GenerateService::new(store, Box::new(MarkerRenderer), Box::new(fs)).with_output_root("root")
}

#[test]
fn generate_writes_both_kinds_with_substitution() {
    let fs = RecordingFs::default();
    let generated = service_with(fs.clone(), Box::new(FixedStore))
        .generate("billing", &["api", "main"])
        .unwrap();

    let files = fs.files.lock().unwrap();
    assert_eq!(
        files.get(Path::new("root/api/billing.yml")).map(Vec::as_slice),
        Some(&b"openapi.yml.tmpl:Billing"[..])
    );
    assert_eq!(
        files.get(Path::new("root/cmd/billing/main.go")).map(Vec::as_slice),
        Some(&b"main.go.tmpl:Billing"[..])
    );
    assert_eq!(generated.files.len(), 2);
    assert_eq!(generated.files[0].kind, FileKind::Api);
}

#[test]
fn legacy_single_kind_run_only_writes_api() {
    let fs = RecordingFs::default();
    service_with(fs.clone(), Box::new(FixedStore))
        .generate("billing", &["api"])
        .unwrap();

    let files = fs.files.lock().unwrap();
    assert_eq!(files.len(), 1);
    assert!(files.contains_key(Path::new("root/api/billing.yml")));
}

#[test]
fn rejected_names_leave_filesystem_untouched() {
    for name in ["", "Billing", "billing_service", "billing-service", "BILLING"] {
        let fs = RecordingFs::default();
        let err = service_with(fs.clone(), Box::new(FixedStore))
            .generate(name, &["api", "main"])
            .unwrap_err();
        assert!(matches!(err, SvcgenError::Domain(_)), "{name}: {err}");
        assert!(fs.files.lock().unwrap().is_empty());
        assert!(fs.dirs.lock().unwrap().is_empty());
    }
}

#[test]
fn directory_is_created_before_template_is_loaded() {
    let fs = RecordingFs::default();
    let err = service_with(fs.clone(), Box::new(MissingStore))
        .generate("billing", &["api", "main"])
        .unwrap_err();

    assert!(matches!(
        err,
        SvcgenError::Application(ApplicationError::TemplateLoadFailed { .. })
    ));
    // First plan got its directory, nothing was written, second plan never ran.
    assert_eq!(*fs.dirs.lock().unwrap(), vec![PathBuf::from("root/api")]);
    assert!(fs.files.lock().unwrap().is_empty());
}

#[test]
fn plan_layout_for_many_names() {
    for raw in ["billing", "users", "v2", "ledger2", "a"] {
        let name = ServiceName::parse(raw).unwrap();
        let api = FilePlan::build(&name, "api").unwrap();
        let main = FilePlan::build(&name, "main").unwrap();

        assert_eq!(api.output_dir, PathBuf::from("api"));
        assert_eq!(api.file_name, format!("{raw}.yml"));
        assert_eq!(main.output_dir, PathBuf::from("cmd").join(raw));
        assert_eq!(main.file_name, "main.go");
    }
}

#[test]
fn unknown_kinds_fail_for_any_name() {
    let name = ServiceName::parse("billing").unwrap();
    for kind in ["apis", "cmd", "openapi", "MAIN"] {
        assert_eq!(
            FilePlan::build(&name, kind),
            Err(DomainError::UnknownKind { kind: kind.into() })
        );
    }
}
