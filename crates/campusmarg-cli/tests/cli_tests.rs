//! Integration tests for the graph inspection commands and global options.

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/campus.json")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("campusmarg-cli");
    cmd.env("RUST_LOG", "error")
        .env("NO_COLOR", "1")
        .env_remove("CAMPUSMARG_GRAPH")
        .env_remove("CAMPUSMARG_PATH_LOG");
    cmd
}

#[test]
fn validate_reports_counts() {
    cli()
        .arg("--graph")
        .arg(fixture_path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Graph is valid."))
        .stdout(predicate::str::contains("Nodes: 16"))
        .stdout(predicate::str::contains("Edges: 18"))
        .stdout(predicate::str::contains("Floors: 1, 2"))
        .stdout(predicate::str::contains("Transitions: 4"));
}

#[test]
fn validate_json_output() {
    let output = cli()
        .arg("--graph")
        .arg(fixture_path())
        .args(["validate", "--format", "json"])
        .output()
        .expect("run cli");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["nodes"], 16);
    assert_eq!(value["floors"], serde_json::json!([1, 2]));
}

#[test]
fn validate_rejects_dangling_edge() {
    let temp = TempDir::new().expect("temp dir");
    let graph = temp.path().join("broken.json");
    fs::write(
        &graph,
        r#"{"nodes": [{"id": "A", "name": "Hall", "type": "corridor", "floor": 1, "coordinates": {"x": 0, "y": 0}}],
            "edges": [{"from": "A", "to": "B", "weight": 1}]}"#,
    )
    .expect("write graph");

    cli()
        .arg("--graph")
        .arg(&graph)
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load graph"))
        .stderr(predicate::str::contains("missing node B"));
}

#[test]
fn missing_graph_option_is_explained() {
    cli()
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("CAMPUSMARG_GRAPH"));
}

#[test]
fn nodes_lists_every_node() {
    cli()
        .arg("--graph")
        .arg(fixture_path())
        .arg("nodes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Classroom 101"))
        .stdout(predicate::str::contains("[inaccessible, shaft staircase-1]"))
        .stdout(predicate::str::contains("16 nodes"));
}

#[test]
fn nodes_filters_by_floor() {
    cli()
        .arg("--graph")
        .arg(fixture_path())
        .args(["nodes", "--floor", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("R201"))
        .stdout(predicate::str::contains("R101").not())
        .stdout(predicate::str::contains("8 nodes"));
}

#[test]
fn nodes_on_unknown_floor_fails() {
    cli()
        .arg("--graph")
        .arg(fixture_path())
        .args(["nodes", "--floor", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No nodes on floor 9"))
        .stderr(predicate::str::contains("Known floors: 1, 2"));
}
