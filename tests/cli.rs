// CLI guard rails for emit-definition: inline flags mode, manifest file
// mode, and --check validation behavior.

use anyhow::{Context, Result};
use serde_json::{Value, json};
use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn emit_definition() -> Command {
    Command::new(env!("CARGO_BIN_EXE_emit-definition"))
}

fn run(mut cmd: Command) -> Result<Output> {
    let output = cmd.output().context("failed to execute emit-definition")?;
    if !output.status.success() {
        anyhow::bail!(
            "emit-definition failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(output)
}

fn parse_lines(stdout: &[u8]) -> Result<Vec<Value>> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(|line| serde_json::from_str(line).context("parsing output line"))
        .collect()
}

#[test]
fn inline_content_type_emits_one_record() -> Result<()> {
    let mut cmd = emit_definition();
    cmd.args([
        "--name",
        "My Event",
        "--prefix",
        "acme_",
        "--icon",
        "dashicons-calendar",
        "--rewrite",
        r#"{"with_front": false}"#,
    ]);
    let output = run(cmd)?;
    let records = parse_lines(&output.stdout)?;
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.pointer("/call"), Some(&json!("register_content_type")));
    assert_eq!(record.pointer("/key"), Some(&json!("acme_my_event")));
    assert_eq!(record.pointer("/args/menu_icon"), Some(&json!("dashicons-calendar")));
    assert_eq!(record.pointer("/args/rewrite/slug"), Some(&json!("my-event")));
    assert_eq!(record.pointer("/args/rewrite/with_front"), Some(&json!(false)));
    assert_eq!(
        record.pointer("/args/labels/menu_name"),
        Some(&json!("My Events"))
    );
    Ok(())
}

#[test]
fn inline_taxonomy_links_attached_types() -> Result<()> {
    let mut cmd = emit_definition();
    cmd.args(["--kind", "taxonomy", "--name", "Genre", "--attach", "book,album"]);
    let output = run(cmd)?;
    let records = parse_lines(&output.stdout)?;
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].pointer("/call"), Some(&json!("register_taxonomy")));
    assert_eq!(
        records[0].pointer("/object_types"),
        Some(&json!(["book", "album"]))
    );
    assert_eq!(records[1].pointer("/call"), Some(&json!("link_taxonomy")));
    assert_eq!(records[2].pointer("/object_type"), Some(&json!("album")));
    Ok(())
}

#[test]
fn manifest_file_mode_emits_all_records() -> Result<()> {
    let temp = TempDir::new()?;
    let path = temp.path().join("definitions.json");
    fs::write(
        &path,
        json!({
            "schema_version": "typeforge_manifest_v1",
            "prefix": "acme_",
            "definitions": [
                { "kind": "content_type", "name": "Event" },
                { "kind": "taxonomy", "name": "Genre", "object_types": ["acme_event"] }
            ]
        })
        .to_string(),
    )?;

    let mut cmd = emit_definition();
    cmd.arg("--file").arg(&path);
    let output = run(cmd)?;
    let records = parse_lines(&output.stdout)?;
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].pointer("/key"), Some(&json!("acme_event")));
    assert_eq!(records[1].pointer("/key"), Some(&json!("acme_genre")));
    Ok(())
}

#[test]
fn check_mode_emits_nothing_on_success() -> Result<()> {
    let mut cmd = emit_definition();
    cmd.args(["--name", "Event", "--check"]);
    let output = run(cmd)?;
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn check_mode_rejects_malformed_manifest() -> Result<()> {
    let temp = TempDir::new()?;
    let path = temp.path().join("bad.json");
    fs::write(
        &path,
        json!({
            "schema_version": "typeforge_manifest_v1",
            "definitions": [
                { "kind": "content_type", "name": "Event", "options": "not-a-record" }
            ]
        })
        .to_string(),
    )?;

    let output = emit_definition()
        .arg("--file")
        .arg(&path)
        .arg("--check")
        .output()
        .context("failed to execute emit-definition")?;
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("schema validation"), "stderr was: {stderr}");
    Ok(())
}

#[test]
fn malformed_inline_overrides_fail() -> Result<()> {
    let output = emit_definition()
        .args(["--name", "Event", "--options", "\"public\""])
        .output()
        .context("failed to execute emit-definition")?;
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("options must be a JSON object"),
        "stderr was: {stderr}"
    );
    Ok(())
}
