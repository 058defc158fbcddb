//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_demo_help() {
    let mut cmd = Command::cargo_bin("crmctl").unwrap();
    cmd.arg("demo").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("lifecycle demonstration"));
}

#[test]
fn test_sales_help() {
    let mut cmd = Command::cargo_bin("crmctl").unwrap();
    cmd.arg("sales").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Client identifier"));
}

#[test]
fn test_sales_requires_client() {
    let mut cmd = Command::cargo_bin("crmctl").unwrap();
    cmd.arg("sales");

    cmd.assert().failure();
}

#[test]
fn test_demo_on_empty_store_prints_error_and_exits_normally() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("demo.db");

    // No schema in a fresh store: the first insert fails, the error is
    // printed, and the process still exits zero.
    let mut cmd = Command::cargo_bin("crmctl").unwrap();
    cmd.arg("--db").arg(&db).arg("demo");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("inserting client"));
}
