use assert_cmd::Command;
use serde_json::{json, Value};
use std::path::Path;

fn write_config(dir: &Path, document: Value) {
    std::fs::write(
        dir.join("connection.json"),
        serde_json::to_string_pretty(&document).unwrap(),
    )
    .unwrap();
}

fn read_config(dir: &Path) -> Value {
    let content = std::fs::read_to_string(dir.join("connection.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

fn seeded_document() -> Value {
    json!({
        "host": "dev.example.com",
        "objectFilters": [
            {
                "name": "Sources",
                "library": "QGPL",
                "object": "*",
                "types": ["*SRCPF"],
                "member": "*",
                "memberType": "*",
                "protected": false
            },
            {
                "name": "Programs",
                "library": "PRODLIB",
                "object": "Q*",
                "types": ["*PGM", "*SRVPGM"],
                "member": "*",
                "protected": true
            }
        ]
    })
}

#[test]
fn list_reports_empty_store() {
    let temp_dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("objfilters").unwrap();
    cmd.arg("--config-dir")
        .arg(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No filters defined."));
}

#[test]
fn list_shows_seeded_filters() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_config(temp_dir.path(), seeded_document());

    let mut cmd = Command::cargo_bin("objfilters").unwrap();
    cmd.arg("--config-dir")
        .arg(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Sources"))
        .stdout(predicates::str::contains("PRODLIB/Q*"))
        .stdout(predicates::str::contains("*PGM, *SRVPGM"));
}

#[test]
fn delete_removes_filter_and_keeps_unrelated_settings() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_config(temp_dir.path(), seeded_document());

    let mut cmd = Command::cargo_bin("objfilters").unwrap();
    cmd.arg("--config-dir")
        .arg(temp_dir.path())
        .arg("delete")
        .arg("Sources")
        .arg("--yes")
        .assert()
        .success()
        .stdout(predicates::str::contains("Filter deleted: Sources"));

    let document = read_config(temp_dir.path());
    let filters = document["objectFilters"].as_array().unwrap();
    assert_eq!(filters.len(), 1);
    assert_eq!(filters[0]["name"], "Programs");
    assert_eq!(document["host"], "dev.example.com");
}

#[test]
fn delete_unknown_filter_fails_without_touching_the_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_config(temp_dir.path(), seeded_document());

    let mut cmd = Command::cargo_bin("objfilters").unwrap();
    cmd.arg("--config-dir")
        .arg(temp_dir.path())
        .arg("delete")
        .arg("missing")
        .arg("--yes")
        .assert()
        .failure()
        .stderr(predicates::str::contains("Filter not found: missing"));

    let document = read_config(temp_dir.path());
    assert_eq!(document["objectFilters"].as_array().unwrap().len(), 2);
}

#[test]
fn legacy_records_without_member_type_list_cleanly() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_config(temp_dir.path(), seeded_document());

    // "Programs" has no memberType key; it loads with the match-all default
    let mut cmd = Command::cargo_bin("objfilters").unwrap();
    cmd.arg("--config-dir")
        .arg(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Programs"));
}
