// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use clap::Parser;
use serde_json::{json, Value};
use std::path::Path;

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("permlint").chain(args.iter().copied())).unwrap()
}

async fn run_args(args: &[&str]) -> (Result<RunStatus, RunError>, String) {
    let mut out = Vec::new();
    let result = run(&cli(args), &mut out).await;
    (result, String::from_utf8(out).unwrap())
}

fn write_settings(path: &Path, doc: &Value) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, serde_json::to_string_pretty(doc).unwrap()).unwrap();
}

fn read_settings(path: &Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn exit_codes() {
    assert_eq!(RunStatus::Clean.exit_code(), 0);
    assert_eq!(RunStatus::Findings.exit_code(), 1);
    assert_eq!(RunError::NoTargets(String::new()).exit_code(), 2);
}

#[tokio::test]
async fn validate_reports_findings() {
    let (result, output) = run_args(&["validate", "Read", "Bash(git diff:*)"]).await;
    assert_eq!(result.unwrap(), RunStatus::Findings);
    assert!(output.contains("ok       Read"));
    assert!(output.contains("suggestion: Bash(git diff *)"));
}

#[tokio::test]
async fn validate_clean() {
    let (result, _) = run_args(&["validate", "MCP(server:*)", "Task:explore", "Bash:*"]).await;
    assert_eq!(result.unwrap(), RunStatus::Clean);
}

#[tokio::test]
async fn migrate_rewrites() {
    let (result, output) = run_args(&["migrate", "Bash(git diff:*)"]).await;
    assert_eq!(result.unwrap(), RunStatus::Clean);
    assert_eq!(output, "Bash(git diff *)\n");
}

#[tokio::test]
async fn migrate_without_rewrite_is_finding() {
    let (result, output) = run_args(&["migrate", "MCP(server:*)"]).await;
    assert_eq!(result.unwrap(), RunStatus::Findings);
    assert_eq!(output, "");
}

#[tokio::test]
async fn check_inline_document() {
    let (result, output) = run_args(&[
        "--output-format",
        "json",
        "check",
        "--settings",
        r#"{"permissions": {"allow": ["Bash(git diff:*)", "BadPattern!!", 42]}}"#,
    ])
    .await;
    assert_eq!(result.unwrap(), RunStatus::Findings);
    let value: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["valid"], false);
    let issues = value["documents"][0]["issues"].as_array().unwrap();
    assert_eq!(issues.len(), 3);
    assert_eq!(issues[0]["suggestion"], "Bash(git diff *)");
    assert!(issues[1].get("suggestion").is_none());
    assert_eq!(issues[2]["error"], "Pattern is not a string");
}

#[tokio::test]
async fn check_missing_explicit_file_errors() {
    let temp = tempfile::tempdir().unwrap();
    let missing = temp.path().join("nope.json");
    let (result, _) = run_args(&["check", "--settings", missing.to_str().unwrap()]).await;
    assert!(matches!(result, Err(RunError::Load { .. })));
}

#[tokio::test]
async fn check_discovers_scopes() {
    let config = tempfile::tempdir().unwrap();
    let project = tempfile::tempdir().unwrap();
    write_settings(
        &config.path().join("settings.json"),
        &json!({ "permissions": { "allow": ["Read"] } }),
    );
    write_settings(
        &project.path().join(".claude").join("settings.local.json"),
        &json!({ "permissions": { "deny": ["Bash(rm:*)"] } }),
    );

    let (result, output) = run_args(&[
        "check",
        "--config-dir",
        config.path().to_str().unwrap(),
        "--project-dir",
        project.path().to_str().unwrap(),
    ])
    .await;
    assert_eq!(result.unwrap(), RunStatus::Findings);
    assert!(output.contains("(user): ok"));
    assert!(output.contains("(local): 1 issue(s)"));
    assert!(output.contains("suggestion: Bash(rm *)"));
}

#[tokio::test]
async fn check_skips_unparseable_discovered_file() {
    let config = tempfile::tempdir().unwrap();
    let project = tempfile::tempdir().unwrap();
    std::fs::write(config.path().join("settings.json"), "{ broken").unwrap();
    write_settings(
        &project.path().join(".claude").join("settings.json"),
        &json!({ "permissions": { "allow": ["Read"] } }),
    );

    let (result, output) = run_args(&[
        "check",
        "--config-dir",
        config.path().to_str().unwrap(),
        "--project-dir",
        project.path().to_str().unwrap(),
    ])
    .await;
    assert_eq!(result.unwrap(), RunStatus::Clean);
    assert!(output.contains("(project): ok"));
    assert!(!output.contains("(user)"));
}

#[tokio::test]
async fn check_without_any_files_errors() {
    let config = tempfile::tempdir().unwrap();
    let project = tempfile::tempdir().unwrap();
    let (result, _) = run_args(&[
        "check",
        "--config-dir",
        config.path().to_str().unwrap(),
        "--project-dir",
        project.path().to_str().unwrap(),
    ])
    .await;
    assert!(matches!(result, Err(RunError::NoTargets(_))));
}

#[tokio::test]
async fn fix_dry_run_leaves_file() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("settings.json");
    let doc = json!({ "permissions": { "allow": ["Bash(npm:*)"] } });
    write_settings(&path, &doc);

    let (result, output) = run_args(&["fix", "--settings", path.to_str().unwrap()]).await;
    assert_eq!(result.unwrap(), RunStatus::Clean);
    assert!(output.contains("1 migrated, 0 removed (dry run"));
    assert_eq!(read_settings(&path), doc);
}

#[tokio::test]
async fn fix_write_persists_repaired_document() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("settings.json");
    write_settings(
        &path,
        &json!({
            "model": "opus",
            "permissions": { "allow": ["Bash(npm:*)", "oops!"], "deny": [1] }
        }),
    );

    let (result, output) = run_args(&["fix", "--write", "--settings", path.to_str().unwrap()]).await;
    assert_eq!(result.unwrap(), RunStatus::Clean);
    assert!(output.contains("1 migrated, 2 removed (written)"));
    assert_eq!(
        read_settings(&path),
        json!({
            "model": "opus",
            "permissions": { "allow": ["Bash(npm *)"], "ask": [], "deny": [] }
        })
    );

    let (result, _) = run_args(&["check", "--settings", path.to_str().unwrap()]).await;
    assert_eq!(result.unwrap(), RunStatus::Clean);
}

#[tokio::test]
async fn fix_write_skips_unchanged_file() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("settings.json");
    std::fs::write(&path, "{\"permissions\": {\"allow\": [\"Read\"]}}").unwrap();

    let (result, output) = run_args(&["fix", "--write", "--settings", path.to_str().unwrap()]).await;
    assert_eq!(result.unwrap(), RunStatus::Clean);
    assert!(output.contains("0 migrated, 0 removed\n"));
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "{\"permissions\": {\"allow\": [\"Read\"]}}"
    );
}

#[tokio::test]
async fn fix_inline_prints_document() {
    let (result, output) = run_args(&[
        "--output-format",
        "json",
        "fix",
        "--settings",
        r#"{"permissions": {"ask": ["Bash(git diff:*)"]}}"#,
    ])
    .await;
    assert_eq!(result.unwrap(), RunStatus::Clean);
    let value: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value[0]["source"], "<inline>");
    assert_eq!(value[0]["written"], false);
    assert_eq!(
        value[0]["settings"],
        json!({ "permissions": { "ask": ["Bash(git diff *)"], "allow": [], "deny": [] } })
    );
}
