//! E2E tests for the persisted sidebar toggle.

use predicates::prelude::*;

mod common;

use common::Sandbox;

fn saved_state(sandbox: &Sandbox) -> serde_json::Value {
    let content = std::fs::read_to_string(sandbox.state_file()).expect("state file");
    serde_json::from_str(&content).expect("state json")
}

#[test]
fn status_defaults_to_expanded_without_writing() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["sidebar", "status"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Sidebar: expanded"));
    assert!(!sandbox.state_file().exists());
}

#[test]
fn toggle_persists_across_runs() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .args(["sidebar", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Sidebar: collapsed"));
    assert_eq!(saved_state(&sandbox)["sidebarCollapsed"], "true");

    sandbox
        .cmd()
        .args(["sidebar", "status"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Sidebar: collapsed"));

    sandbox
        .cmd()
        .args(["sidebar", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Sidebar: expanded"));
    assert_eq!(saved_state(&sandbox)["sidebarCollapsed"], "false");
}

#[test]
fn state_file_flag_overrides_env() {
    let sandbox = Sandbox::new();
    let other = sandbox.dir.path().join("nested").join("other.json");

    sandbox
        .cmd()
        .args(["sidebar", "toggle", "--state-file"])
        .arg(&other)
        .assert()
        .success();

    assert!(other.exists());
    assert!(!sandbox.state_file().exists());
}

#[test]
fn non_true_value_reads_expanded() {
    let sandbox = Sandbox::new();
    std::fs::write(sandbox.state_file(), r#"{"sidebarCollapsed":"yes"}"#).expect("seed");

    sandbox
        .cmd()
        .args(["sidebar", "status", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""collapsed":false"#));
}

#[test]
fn corrupt_state_fails_until_reset() {
    let sandbox = Sandbox::new();
    std::fs::write(sandbox.state_file(), "not json").expect("seed");

    sandbox
        .cmd()
        .args(["sidebar", "status"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("DASH-S001"))
        .stderr(predicate::str::contains("sidebar reset"));

    sandbox
        .cmd()
        .args(["sidebar", "reset"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Sidebar: expanded"));
    assert_eq!(saved_state(&sandbox)["sidebarCollapsed"], "false");
}
