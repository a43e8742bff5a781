use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use httpmock::prelude::*;
use serde_json::{json, Value};

const MODELS_PATH: &str = "/api/v1/models";

fn run_pricing_sync(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pricing-sync"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run pricing-sync")
}

fn sync_against(server: &MockServer, output: &Path) -> Output {
    let endpoint = server.url(MODELS_PATH);
    run_pricing_sync(&[
        "--endpoint",
        &endpoint,
        "--output",
        output.to_str().expect("utf-8 temp path"),
    ])
}

fn fixture_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("crates/ploke-tui/data/models/all_pricing_parsed.json")
}

#[test]
fn writes_fixture_and_reports_count() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(MODELS_PATH);
        then.status(200).json_body(json!({
            "data": [{"id": "m1", "pricing": {"prompt": "0.01", "completion": "0.02"}}]
        }));
    });
    let dir = tempfile::tempdir().unwrap();
    let out = fixture_path(&dir);

    let output = sync_against(&server, &out);
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim_end(),
        format!("Wrote 1 pricing entries to {}", out.display())
    );

    let written: Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(written, json!([{"prompt": "0.01", "completion": "0.02"}]));
}

#[test]
fn empty_listing_exits_one_and_keeps_old_fixture() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(MODELS_PATH);
        then.status(200).json_body(json!({"data": []}));
    });
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("pricing.json");
    std::fs::write(&out, "[{\"prompt\": \"keep\"}]").unwrap();

    let output = sync_against(&server, &out);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No pricing data"), "stderr: {stderr}");
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "[{\"prompt\": \"keep\"}]");
}

#[test]
fn empty_listing_writes_nothing() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(MODELS_PATH);
        then.status(200).json_body(json!({"data": []}));
    });
    let dir = tempfile::tempdir().unwrap();
    let out = fixture_path(&dir);

    let output = sync_against(&server, &out);
    assert_eq!(output.status.code(), Some(1));
    assert!(!out.exists());
}

#[test]
fn server_error_exits_with_fetch_code() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(MODELS_PATH);
        then.status(500).body("internal error");
    });
    let dir = tempfile::tempdir().unwrap();
    let out = fixture_path(&dir);

    let output = sync_against(&server, &out);
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("HTTP 500"), "stderr: {stderr}");
    assert!(!out.exists());
}

#[test]
fn unwritable_destination_exits_with_io_code() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(MODELS_PATH);
        then.status(200).json_body(json!({"data": [{"pricing": {"prompt": "1"}}]}));
    });
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("models");
    std::fs::write(&blocker, "a file, not a directory").unwrap();

    let output = sync_against(&server, &blocker.join("pricing.json"));
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn verify_accepts_synced_fixture() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(MODELS_PATH);
        then.status(200).json_body(json!({
            "data": [{"pricing": {"prompt": "1"}}, {"id": "no-pricing"}]
        }));
    });
    let dir = tempfile::tempdir().unwrap();
    let out = fixture_path(&dir);
    assert!(sync_against(&server, &out).status.success());

    let output = run_pricing_sync(&["verify", "--output", out.to_str().unwrap()]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("2 pricing entries"), "stdout: {stdout}");
}

#[test]
fn verify_missing_fixture_exits_with_verify_code() {
    let dir = tempfile::tempdir().unwrap();
    let out = fixture_path(&dir);

    let output = run_pricing_sync(&["verify", "--output", out.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(5));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"), "stderr: {stderr}");
}

#[test]
fn usage_errors_keep_their_own_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let out = fixture_path(&dir);

    let output = run_pricing_sync(&["--bogus", "--output", out.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
    assert!(!out.exists());
}

#[test]
fn zero_timeout_is_rejected() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path(MODELS_PATH);
        then.status(200).json_body(json!({"data": [{"pricing": {"prompt": "1"}}]}));
    });
    let dir = tempfile::tempdir().unwrap();
    let out = fixture_path(&dir);
    let endpoint = server.url(MODELS_PATH);

    let output = run_pricing_sync(&[
        "--endpoint",
        &endpoint,
        "--output",
        out.to_str().unwrap(),
        "--timeout",
        "0",
    ]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--timeout"), "stderr: {stderr}");
    assert_eq!(mock.hits(), 0);
    assert!(!out.exists());
}
