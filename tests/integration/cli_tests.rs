//! CLI integration tests
//!
//! Run the binary against the fixture trees. Commands execute from the crate
//! root so the roots can be given as relative paths, like a user would.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SOURCE_ROOT: &str = "tests/fixtures/cardgen/src/main/java";
const TARGET_ROOT: &str = "tests/fixtures/finder/src/main/java";

fn codefinder() -> Command {
    let mut cmd = Command::cargo_bin("codefinder").unwrap();
    cmd.current_dir(env!("CARGO_MANIFEST_DIR"));
    cmd.write_stdin("");
    cmd
}

#[test]
fn test_writes_csv_report() {
    let out = TempDir::new().unwrap();
    let report = out.path().join("usages.csv");

    codefinder()
        .args(["--source-root", SOURCE_ROOT, "--target-root", TARGET_ROOT])
        .args(["--sorted", "--no-open", "--quiet", "--output"])
        .arg(&report)
        .assert()
        .success();

    let csv = fs::read_to_string(&report).unwrap();
    assert!(csv.starts_with("Source Root,Used Class,Target Root,Consuming Class\r\n"));
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "Source Root,Used Class,Target Root,Consuming Class");
    assert_eq!(lines[1], "cardgen,tarkleigh.cardgen.CardGen,finder,.Default");
    assert_eq!(
        lines[2],
        "cardgen,tarkleigh.cardgen.CardGen,finder,tarkleigh.finder.Main"
    );
}

#[test]
fn test_writes_json_report() {
    let out = TempDir::new().unwrap();
    let report = out.path().join("usages.json");

    codefinder()
        .args(["--source-root", SOURCE_ROOT, "--target-root", TARGET_ROOT])
        .args(["--format", "json", "--no-open", "--quiet", "--output"])
        .arg(&report)
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 6);
}

#[test]
fn test_summary_is_printed() {
    let out = TempDir::new().unwrap();

    codefinder()
        .args(["--source-root", SOURCE_ROOT, "--target-root", TARGET_ROOT])
        .args(["--no-open", "--output"])
        .arg(out.path().join("usages.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Possible dependencies"))
        .stdout(predicate::str::contains("tarkleigh.cardgen.xml.XMLParser"));
}

#[test]
fn test_missing_source_root_fails() {
    let out = TempDir::new().unwrap();

    codefinder()
        .args(["--source-root", "tests/fixtures/does-not-exist"])
        .args(["--target-root", TARGET_ROOT, "--no-open", "--output"])
        .arg(out.path().join("usages.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Root directory not found"));
}

#[test]
fn test_missing_root_without_terminal_fails() {
    codefinder()
        .args(["--target-root", TARGET_ROOT, "--no-open"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no directory given"));
}

#[test]
fn test_completions() {
    codefinder()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("codefinder"));
}
