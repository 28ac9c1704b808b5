//! Process boundary tests: the built `validate-docs` binary, its exit status
//! and which stream each kind of output lands on.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
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

fn validate_docs(root: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_validate-docs"))
        .arg("--root")
        .arg(root)
        .output()
        .unwrap()
}

#[test]
fn clean_repo_exits_zero_with_passed_line_on_stdout() {
    let repo = repo_with(&[(
        "phase_0_foundation.yaml",
        "phase: 0\r\ncanonical_spec_path: \"../../consilium-openapi-v1.1.yaml\"\r\n",
    )]);

    let output = validate_docs(repo.path());
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Docs validation PASSED: all checks OK\n"
    );
}

#[test]
fn violations_exit_one_with_report_on_stdout() {
    let repo = repo_with(&[("phase_0_foundation.yaml", "title: Foundation\n")]);

    let output = validate_docs(repo.path());
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Docs validation FAILED:\n - phase_0_foundation.yaml: missing canonical_spec_path\n"
    );
}

#[test]
fn missing_docs_directory_exits_two_with_error_on_stderr() {
    let root = tempfile::tempdir().unwrap();

    let output = validate_docs(root.path());
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Docs validation aborted"));
}

#[test]
fn verbose_logs_stay_off_stdout() {
    let repo = repo_with(&[(
        "phase_0_foundation.yaml",
        "canonical_spec_path: \"../../consilium-openapi-v1.1.yaml\"\n",
    )]);

    let output = Command::new(env!("CARGO_BIN_EXE_validate-docs"))
        .arg("--root")
        .arg(repo.path())
        .arg("-vv")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Docs validation PASSED: all checks OK\n"
    );
    assert!(String::from_utf8_lossy(&output.stderr).contains("Checked 1 file(s)"));
}
