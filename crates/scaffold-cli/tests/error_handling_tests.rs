//! Exit codes and error messages.

use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn scaffold(workdir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("scaffold");
    cmd.current_dir(workdir)
        .env("HOME", workdir)
        .env("XDG_CONFIG_HOME", workdir.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn no_arguments_prints_usage() {
    let temp = TempDir::new().unwrap();
    scaffold(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn conflicting_policy_flags_are_rejected() {
    let temp = TempDir::new().unwrap();
    scaffold(temp.path())
        .args(["layout.json", "--force", "--keep-existing"])
        .assert()
        .code(2);
}

#[test]
fn missing_descriptor_is_not_found() {
    let temp = TempDir::new().unwrap();
    scaffold(temp.path())
        .arg("nope.json")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("nope.json"));
}

#[test]
fn duplicate_names_create_nothing() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("layout.json"),
        r#"{"A": {"x": "1", "x": "2"}}"#,
    )
    .unwrap();

    scaffold(temp.path())
        .arg("layout.json")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("x"));

    assert!(!temp.path().join("A").exists());
}

#[test]
fn missing_base_names_the_path() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("layout.json"), r#"{"A": {}}"#).unwrap();

    scaffold(temp.path())
        .args(["layout.json", "--base", "ghost"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("ghost"))
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn kind_conflict_reports_partial_progress() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("layout.json"),
        r#"{"first.txt": "", "A": {"x": ""}}"#,
    )
    .unwrap();
    fs::write(temp.path().join("A"), "a file, not a folder").unwrap();

    scaffold(temp.path())
        .arg("layout.json")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Created file:"))
        .stderr(predicate::str::contains("after 1 created entries"));

    assert!(temp.path().join("first.txt").is_file());
}

#[test]
fn malformed_config_exits_with_configuration_code() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("layout.json"), r#"{"A": {}}"#).unwrap();
    fs::write(temp.path().join("bad.toml"), "[files]\noverwrite = \"sometimes\"\n").unwrap();

    scaffold(temp.path())
        .args(["layout.json", "--config", "bad.toml"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn invalid_json_is_a_user_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("layout.json"), "{ not json").unwrap();

    scaffold(temp.path())
        .arg("layout.json")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("layout.json"));
}

#[test]
fn unknown_preset_lists_available_ones() {
    let temp = TempDir::new().unwrap();
    scaffold(temp.path())
        .args(["--preset", "linux"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown preset 'linux'"))
        .stderr(predicate::str::contains("myos: "));
}
