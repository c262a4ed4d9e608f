// tests/test_cli.rs
//! CLI round-trip tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

#[test]
fn tally_from_nodes() {
    let mut cmd = Command::cargo_bin("main_wrr").unwrap();
    cmd.args(["--nodes", "apple:2,banana:4,grape:4,orange:18", "--rounds", "100"]);
    cmd.assert()
        .success()
        .stdout(predicate::eq("{\"apple\":7,\"banana\":14,\"grape\":14,\"orange\":65}\n"));
}

#[test]
fn tally_from_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
rounds = 6

[[nodes]]
value = "a"
weight = 1

[[nodes]]
value = "b"
weight = 2
"#
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("main_wrr").unwrap();
    cmd.arg("--config").arg(file.path());
    cmd.assert()
        .success()
        .stdout(predicate::eq("{\"a\":2,\"b\":4}\n"));
}

#[test]
fn rounds_flag_overrides_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "rounds = 50\n[[nodes]]\nvalue = \"solo\"\nweight = 3").unwrap();

    let mut cmd = Command::cargo_bin("main_wrr").unwrap();
    cmd.arg("--config").arg(file.path()).args(["--rounds", "4"]);
    cmd.assert()
        .success()
        .stdout(predicate::eq("{\"solo\":4}\n"));
}

#[test]
fn all_zero_prints_empty() {
    let mut cmd = Command::cargo_bin("main_wrr").unwrap();
    cmd.args(["--nodes", "a:0,b:0"]);
    cmd.assert().success().stdout(predicate::eq("{}\n"));
}

#[test]
fn bad_weight_fails() {
    let mut cmd = Command::cargo_bin("main_wrr").unwrap();
    cmd.args(["--nodes", "a:x"]);
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid weight"));
}

#[test]
fn missing_config_fails() {
    let mut cmd = Command::cargo_bin("main_wrr").unwrap();
    cmd.args(["--config", "/nonexistent/wrr.toml"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("cannot read config"));
}

#[test]
fn source_is_required() {
    let mut cmd = Command::cargo_bin("main_wrr").unwrap();
    cmd.assert().failure();
}
