//! E2E tests for the formatting commands.

use predicates::prelude::*;

mod common;

use common::Sandbox;

fn stdout_of(args: &[&str]) -> String {
    let sandbox = Sandbox::new();
    let output = sandbox.cmd().args(args).output().expect("run dashfmt");
    assert!(output.status.success(), "dashfmt {args:?} failed: {output:?}");
    String::from_utf8(output.stdout).expect("utf-8 stdout")
}

#[test]
fn currency_abbreviates() {
    assert_eq!(stdout_of(&["currency", "1500000"]), "R$ 1,50M\n");
    assert_eq!(stdout_of(&["currency", "125000"]), "R$ 125,0k\n");
    assert_eq!(stdout_of(&["currency", "-12", "--cents"]), "-R$ 12,00\n");
}

#[test]
fn number_and_percent() {
    assert_eq!(stdout_of(&["number", "12300000"]), "12,3M\n");
    assert_eq!(stdout_of(&["number", "42.4"]), "42\n");
    assert_eq!(stdout_of(&["percent", "5"]), "5,00%\n");
    assert_eq!(stdout_of(&["percent", "15", "--places", "0"]), "15%\n");
}

#[test]
fn full_values_are_grouped() {
    assert_eq!(
        stdout_of(&["full-currency", "1234567.89"]),
        "R$ 1.234.567,89\n"
    );
    assert_eq!(stdout_of(&["full-number", "1234567"]), "1.234.567\n");
}

#[test]
fn invalid_input_uses_fallbacks() {
    assert_eq!(stdout_of(&["currency", "null"]), "R$ 0\n");
    assert_eq!(stdout_of(&["number", "abc"]), "0\n");
    assert_eq!(stdout_of(&["percent", "NaN"]), "0%\n");
    assert_eq!(stdout_of(&["full-currency", "undefined"]), "R$ 0,00\n");
}

#[test]
fn chart_dispatches_by_kind() {
    assert_eq!(stdout_of(&["chart", "1500000"]), "R$ 1,50M\n");
    assert_eq!(
        stdout_of(&["chart", "1500", "--kind", "numero"]),
        "1,50k\n"
    );
    assert_eq!(stdout_of(&["chart", "7", "--kind", "percentual"]), "7,00%\n");
    assert_eq!(stdout_of(&["chart", "1234.5", "--kind", "bytes"]), "1234.5\n");
}

#[test]
fn variance_has_sign_and_glyph() {
    assert_eq!(
        stdout_of(&["variance", "7", "--kind", "percentual"]),
        "↑ +7,00%\n"
    );
    assert_eq!(stdout_of(&["variance", "-3"]), "↓ -3,00%\n");
    assert_eq!(stdout_of(&["variance", "0"]), "− 0,00%\n");
}

#[test]
fn json_envelope_for_value() {
    let out = stdout_of(&["currency", "1500000", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&out).expect("valid json");
    assert_eq!(json["schemaVersion"], "dashfmt.v1");
    assert_eq!(json["command"], "currency");
    assert_eq!(json["data"]["text"], "R$ 1,50M");
    assert_eq!(json["data"]["input"], 1_500_000.0);
    assert!(json["generatedAt"].is_string());
}

#[test]
fn json_envelope_for_variance() {
    let out = stdout_of(&["variance", "-3", "--format", "json"]);
    let json: serde_json::Value = serde_json::from_str(&out).expect("valid json");
    let data = &json["data"];
    assert_eq!(data["text"], "-3,00%");
    assert_eq!(data["signClass"], "negative");
    assert_eq!(data["cssClass"], "text-danger");
    assert_eq!(data["iconClass"], "fa-arrow-down");
}

#[test]
fn absent_input_is_null_in_json() {
    let out = stdout_of(&["number", "", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&out).expect("valid json");
    assert!(json["data"]["input"].is_null());
    assert_eq!(json["data"]["text"], "0");
}

#[test]
fn config_file_supplies_defaults() {
    let sandbox = Sandbox::new();
    std::fs::write(
        sandbox.config_file(),
        "[display]\nchart_kind = \"numero\"\nshow_cents = true\n",
    )
    .expect("write config");

    sandbox
        .cmd()
        .args(["chart", "1500"])
        .assert()
        .success()
        .stdout("1,50k\n");

    sandbox
        .cmd()
        .args(["currency", "12"])
        .assert()
        .success()
        .stdout("R$ 12,00\n");
}

#[test]
fn env_format_selects_json() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .env("DASHFMT_FORMAT", "json")
        .args(["percent", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""text":"5,00%""#));
}

#[test]
fn format_flag_wins_over_env() {
    let sandbox = Sandbox::new();
    let output = sandbox
        .cmd()
        .env("DASHFMT_FORMAT", "human")
        .args(["--format", "json", "percent", "5"])
        .output()
        .expect("run dashfmt");
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json stdout");
    assert_eq!(json["data"]["text"], "5,00%");
}

#[test]
fn config_output_format_is_case_insensitive() {
    let sandbox = Sandbox::new();
    std::fs::write(sandbox.config_file(), "[output]\nformat = \"JSON\"\n").expect("write config");

    sandbox
        .cmd()
        .args(["number", "1500"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""text":"1,50k""#));
}

#[test]
fn verbose_env_enables_debug_logs() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .env("DASHFMT_VERBOSE", "1")
        .args(["number", "1500"])
        .assert()
        .success()
        .stdout("1,50k\n")
        .stderr(predicate::str::contains("Resolved configuration"));

    sandbox
        .cmd()
        .args(["number", "1500"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
