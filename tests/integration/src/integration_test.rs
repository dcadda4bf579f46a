//! End-to-end integration tests for the bundle CLI
//!
//! These exercise the complete flow: manifest loading -> split -> select,
//! plus the inspect/append/diff surfaces, against a temp directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SEP: &str = "<|bundle:sep:550e8400-e29b-41d4-a716-446655440000|>";

/// Set up a temp directory with a two-variant bundle and a manifest
fn setup_bundle_dir() -> TempDir {
    let temp = TempDir::new().unwrap();

    fs::write(
        temp.path().join("bundle.toml"),
        format!("[bundle]\ndelimiter = \"{SEP}\"\npolicy = \"last\"\n"),
    )
    .unwrap();

    fs::write(
        temp.path().join("post.md"),
        format!("# Original intro\n\nFirst rendering.\n{SEP}# Revised intro\n\nSecond rendering.\n"),
    )
    .unwrap();

    temp
}

fn bundle_cmd(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bundle").unwrap();
    cmd.current_dir(temp.path());
    cmd
}

#[test]
fn test_select_uses_manifest_policy() {
    let temp = setup_bundle_dir();

    bundle_cmd(&temp)
        .args(["select", "post.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Revised intro"))
        .stdout(predicate::str::contains("Original intro").not());
}

#[test]
fn test_select_policy_flag_overrides_manifest() {
    let temp = setup_bundle_dir();

    bundle_cmd(&temp)
        .args(["select", "post.md", "--policy", "first"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Original intro"))
        .stdout(predicate::str::contains("Revised intro").not());
}

#[test]
fn test_select_writes_output_file() {
    let temp = setup_bundle_dir();

    bundle_cmd(&temp)
        .args(["select", "post.md", "-o", "published.md"])
        .assert()
        .success();

    let published = fs::read_to_string(temp.path().join("published.md")).unwrap();
    assert_eq!(published, "# Revised intro\n\nSecond rendering.\n");
}

#[test]
fn test_select_out_of_range_index_fails() {
    let temp = setup_bundle_dir();

    bundle_cmd(&temp)
        .args(["select", "post.md", "--policy", "index:9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_select_without_manifest_requires_delimiter_flag() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("post.md"), "a::SEP::b").unwrap();

    bundle_cmd(&temp)
        .args(["select", "post.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no delimiter configured"));

    bundle_cmd(&temp)
        .args(["select", "post.md", "--delimiter", "::SEP::"])
        .assert()
        .success()
        .stdout("b");
}

#[test]
fn test_inspect_lists_variants() {
    let temp = setup_bundle_dir();

    bundle_cmd(&temp)
        .args(["inspect", "post.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 variant(s)"))
        .stdout(predicate::str::contains("#0"))
        .stdout(predicate::str::contains("#1"));
}

#[test]
fn test_inspect_json_is_parseable() {
    let temp = setup_bundle_dir();

    let output = bundle_cmd(&temp)
        .args(["inspect", "post.md", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let rows: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["ordinal"], 0);
    assert_eq!(rows[1]["ordinal"], 1);
    assert!(rows[1]["bytes"].as_u64().unwrap() > 0);
}

#[test]
fn test_append_then_select_picks_new_variant() {
    let temp = setup_bundle_dir();
    fs::write(temp.path().join("draft.md"), "# Third take\n").unwrap();

    bundle_cmd(&temp)
        .args(["append", "post.md", "draft.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("appended variant #2"));

    bundle_cmd(&temp)
        .args(["select", "post.md"])
        .assert()
        .success()
        .stdout("# Third take\n");
}

#[test]
fn test_append_rejects_draft_containing_delimiter() {
    let temp = setup_bundle_dir();
    fs::write(temp.path().join("draft.md"), format!("bad {SEP} draft")).unwrap();

    bundle_cmd(&temp)
        .args(["append", "post.md", "draft.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("delimiter"));
}

#[test]
fn test_diff_reports_changed_lines() {
    let temp = setup_bundle_dir();

    bundle_cmd(&temp)
        .args(["diff", "post.md", "0", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-# Original intro"))
        .stdout(predicate::str::contains("+# Revised intro"))
        .stdout(predicate::str::contains("similarity:"));
}

#[test]
fn test_no_command_prints_hint() {
    let temp = TempDir::new().unwrap();

    bundle_cmd(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Bundle Manager CLI"));
}
