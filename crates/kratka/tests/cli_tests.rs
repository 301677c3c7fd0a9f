//! Integration tests for the command-line surface

#![allow(deprecated)] // cargo_bin is deprecated in favour of the cargo_bin! macro

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo::CommandCargoExt;
use kratka_core::GRID_TEMPLATE;
use kratka_testkit::{list_workspaces, temp_dir_in_workspace};
use predicates::prelude::*;
use std::path::Path;
use std::process::Command;

/// kratka with its workspaces redirected into `tmpdir`
fn kratka(tmpdir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("kratka").unwrap();
    cmd.env("TMPDIR", tmpdir)
        .env_remove("KRATKA_CONFIG")
        .env_remove("KRATKA_COMPILER");
    cmd
}

#[test]
fn test_help_flag() {
    let temp = temp_dir_in_workspace();

    kratka(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--horizontal-offset"))
        .stdout(predicate::str::contains("--preserve-workspace"))
        .stdout(predicate::str::contains("OUTPUT"))
        .stdout(predicate::str::contains("densely dotted"));

    assert!(list_workspaces(temp.path()).is_empty());
}

#[test]
fn test_short_help_flag() {
    let temp = temp_dir_in_workspace();

    kratka(temp.path())
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("densely dotted"))
        .stdout(predicate::str::contains("Examples"))
        .stdout(predicate::str::contains("memoir"));
}

#[test]
fn test_show_frame_numeric_value() {
    let temp = temp_dir_in_workspace();

    kratka(temp.path())
        .arg("--show-frame=1")
        .args(["--compiler", "kratka-no-such-compiler", "out.pdf"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("COMPILER_NOT_FOUND"));
}

#[test]
fn test_version_flag() {
    let temp = temp_dir_in_workspace();

    kratka(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("kratka"));
}

#[test]
fn test_show_template_prints_raw_template() {
    let temp = temp_dir_in_workspace();

    let assert = kratka(temp.path()).arg("--show-template").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    assert_eq!(stdout, GRID_TEMPLATE);
    assert!(stdout.contains("@@line.style@@"));
    assert!(list_workspaces(temp.path()).is_empty());
}

#[test]
fn test_template_alias_ignores_output() {
    let temp = temp_dir_in_workspace();
    let output = temp.path().join("out.pdf");

    kratka(temp.path())
        .arg("--template")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("\\documentclass"));

    assert!(!output.exists());
    assert!(list_workspaces(temp.path()).is_empty());
}

#[test]
fn test_missing_output_is_usage_error() {
    let temp = temp_dir_in_workspace();

    kratka(temp.path())
        .arg("--line-style")
        .arg("dotted")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("OUTPUT"));

    assert!(list_workspaces(temp.path()).is_empty());
}

#[test]
fn test_unknown_flag_is_usage_error() {
    let temp = temp_dir_in_workspace();

    kratka(temp.path())
        .args(["--colour", "red", "out.pdf"])
        .assert()
        .code(2);

    assert!(list_workspaces(temp.path()).is_empty());
}

#[test]
fn test_invalid_integer_is_usage_error() {
    let temp = temp_dir_in_workspace();

    kratka(temp.path())
        .args(["--grid-columns", "lots", "out.pdf"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("lots"));
}

#[test]
fn test_unknown_compiler_creates_no_workspace() {
    let temp = temp_dir_in_workspace();
    let output = temp.path().join("out.pdf");

    kratka(temp.path())
        .args(["--compiler", "kratka-no-such-compiler"])
        .arg(&output)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: COMPILER_NOT_FOUND"));

    assert!(!output.exists());
    assert!(list_workspaces(temp.path()).is_empty());
}

#[test]
fn test_missing_config_file_is_fatal() {
    let temp = temp_dir_in_workspace();

    kratka(temp.path())
        .arg("--config")
        .arg(temp.path().join("missing.toml"))
        .arg(temp.path().join("out.pdf"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("CONFIG_READ_ERROR"));

    assert!(list_workspaces(temp.path()).is_empty());
}

#[test]
fn test_unknown_config_key_is_fatal() {
    let temp = temp_dir_in_workspace();
    let config = temp.path().join("kratka.toml");
    std::fs::write(&config, "[page]\npaper = \"a3\"\n").unwrap();

    kratka(temp.path())
        .arg("--config")
        .arg(&config)
        .arg(temp.path().join("out.pdf"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("CONFIG_INVALID"));
}
