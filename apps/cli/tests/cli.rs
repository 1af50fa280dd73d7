//! End-to-end tests for the `modelcheck` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const SCHEMA: &str = r#"{
    "user": {
        "id": {"type": "uuid", "required": true},
        "name": {"type": "string", "min": 1, "max": 64},
        "createdAt": {"type": "date"},
        "counter": {"type": "number", "min": 0, "max": 64}
    }
}"#;

const VALID_USER: &str = r#"{
    "id": "61cecfb4-da43-4b65-aaa0-f1c3be81ec53",
    "name": "Alex Bardanov",
    "createdAt": {"$date": "2024-05-01T09:30:00Z"},
    "counter": 64
}"#;

const BIG_COUNTER: &str = r#"{
    "id": "61cecfb4-da43-4b65-aaa0-f1c3be81ec53",
    "name": "Alex Bardanov",
    "createdAt": {"$date": "2024-05-01T09:30:00Z"},
    "counter": 65
}"#;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn modelcheck() -> Command {
    let mut cmd = Command::cargo_bin("modelcheck").unwrap();
    cmd.env_remove("RUST_LOG").env("MODELCHECK_LOG", "off");
    cmd
}

fn validate(schema: &Path, model: &str, objects: &[&PathBuf]) -> Command {
    let mut cmd = modelcheck();
    cmd.arg("validate").arg("--schema").arg(schema).arg("--model").arg(model);
    cmd.args(objects);
    cmd
}

#[test]
fn valid_object_exits_zero() {
    let dir = TempDir::new().unwrap();
    let schema = write(&dir, "models.json", SCHEMA);
    let user = write(&dir, "user.json", VALID_USER);

    validate(&schema, "user", &[&user])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("user.json: valid"));
}

#[test]
fn invalid_object_names_field_and_rule() {
    let dir = TempDir::new().unwrap();
    let schema = write(&dir, "models.json", SCHEMA);
    let good = write(&dir, "good.json", VALID_USER);
    let bad = write(&dir, "bad.json", BIG_COUNTER);

    validate(&schema, "user", &[&good, &bad])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("good.json: valid"))
        .stdout(predicate::str::contains(
            "bad.json: invalid (field 'counter' failed rule 'max')",
        ));
}

#[test]
fn unknown_model_is_indeterminate() {
    let dir = TempDir::new().unwrap();
    let schema = write(&dir, "models.json", SCHEMA);
    let user = write(&dir, "user.json", VALID_USER);

    validate(&schema, "account", &[&user])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("indeterminate"))
        .stdout(predicate::str::contains("account"));
}

#[test]
fn null_object_is_indeterminate() {
    let dir = TempDir::new().unwrap();
    let schema = write(&dir, "models.json", SCHEMA);
    let null = write(&dir, "null.json", "null");

    validate(&schema, "user", &[&null]).assert().code(2);
}

#[test]
fn yaml_schema() {
    let dir = TempDir::new().unwrap();
    let schema = write(
        &dir,
        "models.yaml",
        "user:\n  id:\n    type: uuid\n    required: true\n  name:\n    type: string\n    max: 4\n",
    );
    let user = write(
        &dir,
        "user.json",
        r#"{"id": "61cecfb4-da43-4b65-aaa0-f1c3be81ec53", "name": "Alexander"}"#,
    );

    validate(&schema, "user", &[&user])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("field 'name' failed rule 'max'"));
}

#[test]
fn count_bytes_changes_string_length() {
    let dir = TempDir::new().unwrap();
    let schema = write(&dir, "models.json", r#"{"tag": {"label": {"max": 3}}}"#);
    let tag = write(&dir, "tag.json", r#"{"label": "äöü"}"#);

    validate(&schema, "tag", &[&tag]).assert().code(0);
    validate(&schema, "tag", &[&tag]).arg("--count-bytes").assert().code(1);
}

#[test]
fn json_report() {
    let dir = TempDir::new().unwrap();
    let schema = write(&dir, "models.json", SCHEMA);
    let bad = write(&dir, "bad.json", BIG_COUNTER);

    let output = validate(&schema, "user", &[&bad]).arg("--json").output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["model"], "user");
    assert_eq!(report["results"][0]["status"], "invalid");
    assert_eq!(report["results"][0]["field"], "counter");
    assert_eq!(report["results"][0]["rule"], "max");
}

#[test]
fn missing_object_file_exits_three() {
    let dir = TempDir::new().unwrap();
    let schema = write(&dir, "models.json", SCHEMA);
    let missing = dir.path().join("missing.json");

    validate(&schema, "user", &[&missing])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("failed to read object file"));
}

#[test]
fn malformed_schema_exits_three() {
    let dir = TempDir::new().unwrap();
    let schema = write(&dir, "models.json", r#"{"user": {"id": {"type": ["uuid"]}}}"#);
    let user = write(&dir, "user.json", VALID_USER);

    validate(&schema, "user", &[&user])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid JSON schema"));
}

#[test]
fn check_schema_clean() {
    let dir = TempDir::new().unwrap();
    let schema = write(&dir, "models.json", SCHEMA);

    modelcheck()
        .arg("check-schema")
        .arg("--schema")
        .arg(&schema)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("user: 4 field(s)"))
        .stdout(predicate::str::contains("ok: 1 model(s)"));
}

#[test]
fn check_schema_reports_unknown_rules_and_types() {
    let dir = TempDir::new().unwrap();
    let schema = write(
        &dir,
        "models.json",
        r#"{"order": {"id": {"type": "ulid"}, "email": {"format": "email"}}}"#,
    );

    modelcheck()
        .arg("check-schema")
        .arg("--schema")
        .arg(&schema)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("unknown_type"))
        .stdout(predicate::str::contains("unknown_rule"))
        .stdout(predicate::str::contains("2 finding(s)"));
}

#[test]
fn invalid_log_filter_exits_three() {
    let dir = TempDir::new().unwrap();
    let schema = write(&dir, "models.json", SCHEMA);

    modelcheck()
        .args(["--log-level", "modelcheck=loud", "check-schema", "--schema"])
        .arg(&schema)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid filter"));
}

#[test]
fn usage_error_is_not_an_indeterminate_result() {
    modelcheck()
        .args(["validate", "--model", "user"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("--schema"));

    modelcheck().arg("frobnicate").assert().code(3);
}

#[test]
fn help_exits_zero() {
    modelcheck()
        .arg("--help")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("check-schema"));
}
