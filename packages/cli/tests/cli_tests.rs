// ABOUTME: End-to-end tests for the tracker binary
// ABOUTME: Runs the compiled executable against scratch tracking files and checks stdout and exit codes

use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn tracker(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tracker"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env("TRACKER_PROJECT_ROOT", "/srv/root")
        .output()
        .expect("failed to run tracker")
}

fn setup(content: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("t.json"), content).unwrap();
    dir
}

#[test]
fn test_read_existing_field() {
    let dir = setup(r#"{"status": "ready"}"#);

    let output = tracker(dir.path(), &["read", "t.json", "status"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "ready\n");
}

#[test]
fn test_read_missing_field() {
    let dir = setup(r#"{"status": "ready"}"#);

    let output = tracker(dir.path(), &["read", "t.json", "other"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_read_without_param() {
    let dir = setup(r#"{"status": "ready"}"#);

    let output = tracker(dir.path(), &["read", "t.json"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_unknown_action() {
    let dir = setup(r#"{"status": "ready"}"#);

    let output = tracker(dir.path(), &["bogus", "t.json", "status"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_no_arguments_prints_usage() {
    let dir = setup("{}");

    let output = tracker(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Usage: tracker"));
}

#[test]
fn test_project_name_uses_configured_root() {
    let dir = setup(r#"{"project_name": "demo"}"#);

    let output = tracker(dir.path(), &["read", "t.json", "project_name"]);

    let expected = PathBuf::from("/srv/root").join("demo");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        format!("{}\n", expected.display())
    );
}

#[test]
fn test_project_name_defaults_to_executable_root() {
    let dir = setup(r#"{"project_name": "demo"}"#);

    let output = Command::new(env!("CARGO_BIN_EXE_tracker"))
        .args(["read", "t.json", "project_name"])
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("TRACKER_PROJECT_ROOT")
        .output()
        .expect("failed to run tracker");

    let exe = fs::canonicalize(env!("CARGO_BIN_EXE_tracker")).unwrap();
    let root = exe.parent().and_then(Path::parent).unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        format!("{}\n", root.join("demo").display())
    );
}

#[test]
fn test_corrupt_file_is_silent() {
    let dir = setup(r#"{"a":"#);

    let output = tracker(dir.path(), &["read", "t.json", "a"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
}

#[test]
fn test_help_flag_prints_usage_and_fails() {
    let dir = setup("{}");

    let output = tracker(dir.path(), &["--help"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Usage: tracker"));
}

#[test]
fn test_read_hyphenated_field_name() {
    let dir = setup(r#"{"-x": "dash", "--version": "v"}"#);

    let short = tracker(dir.path(), &["read", "t.json", "-x"]);
    let long = tracker(dir.path(), &["read", "t.json", "--version"]);

    assert_eq!(short.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&short.stdout), "dash\n");
    assert_eq!(long.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&long.stdout), "v\n");
}

#[test]
fn test_separator_is_an_extra_argument() {
    let dir = setup(r#"{"status": "ready"}"#);

    let output = tracker(dir.path(), &["read", "t.json", "--", "status"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}
