//! CLI boundary tests: argument handling, rendering and exit codes through `run`.

use clap::Parser;
use consilium_docs_cli::{run, Args};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn repo_with(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let docs = dir.path().join("docs/consilium");
    fs::create_dir_all(&docs).unwrap();
    for (name, text) in files {
        fs::write(docs.join(name), text).unwrap();
    }
    dir
}

fn args(root: &Path, extra: &[&str]) -> Args {
    let mut argv = vec!["validate-docs", "--root", root.to_str().unwrap()];
    argv.extend_from_slice(extra);
    Args::try_parse_from(argv).unwrap()
}

#[test]
fn clean_repo_prints_passed_and_exits_zero() {
    let repo = repo_with(&[(
        "phase_0_foundation.yaml",
        "canonical_spec_path: \"../../consilium-openapi-v1.1.yaml\"\n",
    )]);

    let (report, rendered) = run(&args(repo.path(), &[])).unwrap();
    assert_eq!(rendered, "Docs validation PASSED: all checks OK\n");
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn violations_print_failed_report_and_exit_one() {
    let repo = repo_with(&[("phase_0_foundation.yaml", "title: Foundation\n")]);

    let (report, rendered) = run(&args(repo.path(), &[])).unwrap();
    assert_eq!(
        rendered,
        "Docs validation FAILED:\n - phase_0_foundation.yaml: missing canonical_spec_path\n"
    );
    assert_eq!(report.exit_code(), 1);
}

#[test]
fn json_format_renders_machine_readable_report() {
    let repo = repo_with(&[("phase_0_foundation.yaml", "min_length: 16\n")]);

    let (_, rendered) = run(&args(repo.path(), &["--format", "json"])).unwrap();
    let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(json["passed"], false);
    assert_eq!(json["violations"].as_array().unwrap().len(), 2);
    assert_eq!(json["violations"][1]["rule"], "api_key_guidance");
}

#[test]
fn config_file_overrides_defaults() {
    let repo = repo_with(&[("phase_0_foundation.yaml", "title: Foundation\n")]);
    let config_path = repo.path().join("docs-lint.yaml");
    fs::write(
        &config_path,
        "pipeline:\n  rules:\n    - name: canonical_spec_path\n      enabled: false\n",
    )
    .unwrap();

    let (report, _) = run(&args(
        repo.path(),
        &["--config", config_path.to_str().unwrap()],
    ))
    .unwrap();
    assert!(report.passed());
}

#[test]
fn missing_docs_directory_is_an_error_not_a_report() {
    let empty = tempfile::tempdir().unwrap();
    let err = run(&args(empty.path(), &[])).unwrap_err();
    assert!(format!("{err:#}").contains("failed to list docs directory"));
}

#[test]
fn unreadable_config_is_an_error() {
    let repo = repo_with(&[]);
    let err = run(&args(repo.path(), &["--config", "/nonexistent/docs-lint.yaml"])).unwrap_err();
    assert!(format!("{err:#}").contains("Loading config from"));
}
