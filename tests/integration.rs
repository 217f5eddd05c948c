use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::{NamedTempFile, TempDir};

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_fieldcheck")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

// -- flag handling --

#[test]
fn missing_type_src_fails() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--type-src is required"));
}

#[test]
fn nonexistent_type_src_fails() {
    cmd()
        .args(["-s", "does/not/exist.rs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does/not/exist.rs"));
}

// -- self-check mode --

#[test]
fn self_check_reports_casing_mismatches() {
    let assert = cmd()
        .args(["-s", &fixture_path("api_types.rs")])
        .assert()
        .success();

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert_eq!(
        stderr,
        "In api struct Pod, field name is: restarts, but in doc is: Restarts\n\
         In api struct Volume, field name is: kind, but in doc is: Kind\n"
    );
}

#[test]
fn self_check_clean_file_is_silent() {
    let mut input = NamedTempFile::with_suffix(".rs").unwrap();
    input
        .write_all(
            b"/// Node is a worker machine.\npub struct Node {\n    /// name of the node.\n    pub name: String,\n    pub taints: Vec<String>,\n}\n",
        )
        .unwrap();

    cmd()
        .args(["-s", input.path().to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

// -- cross-check mode --

#[test]
fn cross_check_reads_docs_from_internal_types() {
    let assert = cmd()
        .args(["-s", &fixture_path("api_types.rs")])
        .args(["-i", &fixture_path("internal_types.rs")])
        .assert()
        .success();

    // Only Pod.name is documented on the internal side; the api-side
    // mismatches on restarts/kind are not consulted in this mode, and
    // Volume is absent from the internal types entirely.
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert_eq!(
        stderr,
        "In internal struct Pod, field name is: name, but in doc is: Name\n"
    );
}

#[test]
fn cross_check_undocumented_internal_is_silent() {
    let mut internal = NamedTempFile::with_suffix(".rs").unwrap();
    internal
        .write_all(b"pub struct Pod {\n    pub name: String,\n    pub restarts: u32,\n}\n")
        .unwrap();

    cmd()
        .args(["-s", &fixture_path("api_types.rs")])
        .args(["-i", internal.path().to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

// -- directory input --

#[test]
fn directory_source_scans_rs_files() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("a.rs"),
        "pub struct Job {\n    /// Retries left before the job is failed.\n    pub retries: u32,\n}\n",
    )
    .unwrap();
    std::fs::write(dir.path().join("notes.txt"), "not source\n").unwrap();

    let assert = cmd()
        .args(["-s", dir.path().to_str().unwrap()])
        .assert()
        .success();

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert_eq!(
        stderr,
        "In api struct Job, field name is: retries, but in doc is: Retries\n"
    );
}
