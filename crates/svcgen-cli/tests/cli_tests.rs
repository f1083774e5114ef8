//! End-to-end tests for the `svcgen` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const API_TMPL: &str = "title: {{.name}}\n";
const MAIN_TMPL: &str = "// {{ .name }} entrypoint\npackage main\n";

/// Templates shipped in this repository.
fn repo_templates() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../tools/generate-service/templates")
}

/// A working directory laid out like a service monorepo.
fn repo() -> TempDir {
    let temp = TempDir::new().unwrap();
    let templates = temp.path().join("tools/generate-service/templates");
    fs::create_dir_all(&templates).unwrap();
    fs::write(templates.join("openapi.yml.tmpl"), API_TMPL).unwrap();
    fs::write(templates.join("main.go.tmpl"), MAIN_TMPL).unwrap();
    temp
}

/// `svcgen` isolated from the caller's environment and config files.
fn svcgen(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("svcgen").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("SVCGEN_TEMPLATES_DIR")
        .env_remove("SVCGEN_GENERATE__KINDS")
        .env_remove("SVCGEN_GENERATE__TEMPLATES_DIR")
        .env_remove("SVCGEN_GENERATE__OUTPUT_ROOT")
        .env_remove("SVCGEN_OUTPUT__FORMAT");
    cmd
}

fn read(dir: &Path, rel: &str) -> String {
    fs::read_to_string(dir.join(rel)).unwrap()
}

// ── scenarios ─────────────────────────────────────────────────────────────────

#[test]
fn billing_creates_api_spec_and_entrypoint() {
    let temp = repo();

    svcgen(temp.path())
        .arg("billing")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("creating billing service\n"))
        .stdout(predicate::str::contains("finished creating billing service\n"));

    assert_eq!(read(temp.path(), "api/billing.yml"), "title: Billing\n");
    assert_eq!(
        read(temp.path(), "cmd/billing/main.go"),
        "// Billing entrypoint\npackage main\n"
    );
}

#[test]
fn uppercase_name_is_rejected_without_side_effects() {
    let temp = repo();

    svcgen(temp.path())
        .arg("Billing")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("creating").not())
        .stderr(predicate::str::contains(
            "service name 'Billing' should be all lowercase",
        ));

    assert!(!temp.path().join("api").exists());
    assert!(!temp.path().join("cmd").exists());
}

#[test]
fn underscore_name_is_rejected_without_side_effects() {
    let temp = repo();

    svcgen(temp.path())
        .arg("billing_service")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("should not contain underscores"));

    assert!(!temp.path().join("api").exists());
}

#[test]
fn hyphenated_name_is_rejected() {
    let temp = repo();

    svcgen(temp.path())
        .arg("billing-service")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("should not contain hyphens"));
}

#[test]
fn missing_name_is_user_error() {
    let temp = repo();

    svcgen(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing service name"));

    assert!(!temp.path().join("api").exists());
}

#[test]
fn empty_name_is_user_error() {
    let temp = repo();

    svcgen(temp.path())
        .arg("")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("name should not be empty"));
}

#[test]
fn path_like_names_are_rejected() {
    let temp = repo();

    for name in ["..", ".", "nested/billing"] {
        svcgen(temp.path())
            .arg(name)
            .assert()
            .code(2)
            .stderr(predicate::str::contains("should not be a path"));
    }

    assert!(!temp.path().join("api").exists());
    assert!(!temp.path().join("cmd").exists());
    assert!(!temp.path().join("main.go").exists());
}

#[test]
fn extra_arguments_are_usage_errors() {
    let temp = repo();
    svcgen(temp.path()).args(["billing", "users"]).assert().code(2);
    assert!(!temp.path().join("api").exists());
}

// ── kinds ─────────────────────────────────────────────────────────────────────

#[test]
fn single_api_kind_matches_legacy_tool() {
    let temp = repo();

    svcgen(temp.path())
        .args(["billing", "--kind", "api"])
        .assert()
        .success();

    assert!(temp.path().join("api/billing.yml").is_file());
    assert!(!temp.path().join("cmd").exists());
}

#[test]
fn unknown_kind_is_configuration_error() {
    let temp = repo();

    svcgen(temp.path())
        .args(["billing", "--kind", "grpc"])
        .assert()
        .code(4)
        .stdout(predicate::str::contains("creating").not())
        .stderr(predicate::str::contains(
            "failed to create billing service: unknown file kind 'grpc'",
        ))
        .stderr(predicate::str::contains("api, main"));

    assert!(!temp.path().join("api").exists());
}

#[test]
fn kinds_can_come_from_local_config() {
    let temp = repo();
    fs::write(
        temp.path().join("svcgen.toml"),
        "[generate]\nkinds = [\"main\"]\n",
    )
    .unwrap();

    svcgen(temp.path()).arg("billing").assert().success();

    assert!(temp.path().join("cmd/billing/main.go").is_file());
    assert!(!temp.path().join("api").exists());
}

#[test]
fn empty_kind_list_names_the_service() {
    let temp = repo();
    fs::write(temp.path().join("svcgen.toml"), "[generate]\nkinds = []\n").unwrap();

    svcgen(temp.path())
        .arg("billing")
        .assert()
        .code(4)
        .stderr(predicate::str::contains(
            "failed to create billing service: configuration error: no file kinds configured",
        ));
}

// ── templates ─────────────────────────────────────────────────────────────────

#[test]
fn missing_templates_fail_after_announcement() {
    let temp = TempDir::new().unwrap();

    svcgen(temp.path())
        .arg("billing")
        .assert()
        .code(4)
        .stdout(predicate::str::contains("creating billing service"))
        .stdout(predicate::str::contains("finished").not())
        .stderr(predicate::str::contains("failed to create billing service"))
        .stderr(predicate::str::contains("openapi.yml.tmpl"));
}

#[test]
fn malformed_template_is_configuration_error() {
    let temp = repo();
    fs::write(
        temp.path().join("tools/generate-service/templates/main.go.tmpl"),
        "{{.owner}}",
    )
    .unwrap();

    svcgen(temp.path())
        .arg("billing")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("failed to render template main.go.tmpl"));

    // api ran first and stays on disk.
    assert!(temp.path().join("api/billing.yml").is_file());
    assert!(!temp.path().join("cmd/billing/main.go").exists());
}

#[test]
fn templates_dir_flag_uses_repository_templates() {
    let temp = TempDir::new().unwrap();

    svcgen(temp.path())
        .arg("billing")
        .arg("--templates-dir")
        .arg(repo_templates())
        .assert()
        .success();

    let spec = read(temp.path(), "api/billing.yml");
    assert!(spec.contains("title: Billing Service"), "{spec}");
    assert!(!spec.contains("{{"), "{spec}");

    let main = read(temp.path(), "cmd/billing/main.go");
    assert!(main.starts_with("// Command Billing runs the Billing service."));
    assert!(main.contains("package main"));
}

#[test]
fn templates_dir_env_var_is_discovered() {
    let temp = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    fs::write(elsewhere.path().join("openapi.yml.tmpl"), "from env {{.name}}").unwrap();

    svcgen(temp.path())
        .args(["users", "-k", "api"])
        .env("SVCGEN_TEMPLATES_DIR", elsewhere.path())
        .assert()
        .success();

    assert_eq!(read(temp.path(), "api/users.yml"), "from env Users");
}

// ── filesystem ────────────────────────────────────────────────────────────────

#[test]
fn rerun_overwrites_and_keeps_siblings() {
    let temp = repo();
    fs::create_dir_all(temp.path().join("api")).unwrap();
    fs::write(temp.path().join("api/users.yml"), "users").unwrap();
    fs::write(
        temp.path().join("api/billing.yml"),
        "stale content that is much longer than the new render\n",
    )
    .unwrap();

    svcgen(temp.path()).arg("billing").assert().success();

    assert_eq!(read(temp.path(), "api/billing.yml"), "title: Billing\n");
    assert_eq!(read(temp.path(), "api/users.yml"), "users");
}

#[test]
fn output_flag_moves_generated_tree() {
    let temp = repo();

    svcgen(temp.path())
        .args(["billing", "--output", "services"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wrote api/billing.yml"));

    assert!(temp.path().join("services/api/billing.yml").is_file());
    assert!(temp.path().join("services/cmd/billing/main.go").is_file());
}

#[test]
fn blocked_directory_is_internal_error() {
    let temp = repo();
    fs::write(temp.path().join("api"), "not a directory").unwrap();

    svcgen(temp.path())
        .arg("billing")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to create billing service"))
        .stderr(predicate::str::contains("failed to create directory"));
}

// ── output modes ──────────────────────────────────────────────────────────────

#[test]
fn dry_run_writes_nothing() {
    let temp = repo();

    svcgen(temp.path())
        .args(["billing", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dry run"))
        .stdout(predicate::str::contains("api/billing.yml"))
        .stdout(predicate::str::contains("cmd/billing/main.go"));

    assert!(!temp.path().join("api").exists());
    assert!(!temp.path().join("cmd").exists());
}

#[test]
fn dry_run_still_validates() {
    let temp = repo();
    svcgen(temp.path())
        .args(["Billing", "--dry-run"])
        .assert()
        .code(2);
}

#[test]
fn json_output_is_a_single_document() {
    let temp = repo();

    let assert = svcgen(temp.path())
        .args(["--output-format", "json", "billing"])
        .assert()
        .success();

    let doc: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(doc["service"], "billing");
    assert_eq!(doc["title"], "Billing");
    assert_eq!(doc["dry_run"], false);
    assert_eq!(doc["files"][0]["kind"], "api");
    assert_eq!(doc["files"][0]["path"], "api/billing.yml");
    assert_eq!(doc["files"][1]["template"], "main.go.tmpl");
}

#[test]
fn no_color_accepts_conventional_values() {
    for value in ["1", "true", "yes", ""] {
        let temp = repo();
        svcgen(temp.path())
            .env("NO_COLOR", value)
            .arg("billing")
            .assert()
            .success()
            .stdout(predicate::str::contains("finished creating billing service"))
            .stdout(predicate::str::contains("\u{1b}[").not());
        assert!(temp.path().join("api/billing.yml").is_file(), "NO_COLOR={value:?}");
    }
}

#[test]
fn quiet_prints_nothing_on_success() {
    let temp = repo();

    svcgen(temp.path())
        .args(["-q", "billing"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(temp.path().join("api/billing.yml").is_file());
}

#[test]
fn verbose_logs_go_to_stderr() {
    let temp = repo();

    svcgen(temp.path())
        .args(["-vv", "billing"])
        .assert()
        .success()
        .stderr(predicate::str::contains("plan resolved"));
}

#[test]
fn explicit_config_file_must_exist() {
    let temp = repo();

    svcgen(temp.path())
        .args(["--config", "missing.toml", "billing"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains(
            "failed to create billing service: configuration error",
        ));

    assert!(!temp.path().join("api").exists());
}

#[test]
fn help_describes_usage() {
    let temp = repo();
    svcgen(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--templates-dir"))
        .stdout(predicate::str::contains("--kind"));
}
