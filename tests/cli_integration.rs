// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Integration tests for the wdigraph CLI commands

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Graph file inside the temp dir
fn graph_file(dir: &TempDir) -> PathBuf {
    dir.path().join("graph.json")
}

/// Build a wdigraph command bound to the temp dir's graph file
fn wdigraph(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("wdigraph").expect("binary should build");
    cmd.env("WDIGRAPH_GRAPH", graph_file(dir))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

/// Three nodes in a cycle plus a tail: 0 -> 1 -> 2 -> 0, 2 -> 3
fn setup_graph(dir: &TempDir) {
    let graph_json = r#"{
        "Nodes": [
            { "id": 0, "pos": "0.0,0.0,0.0" },
            { "id": 1, "pos": "1.0,0.0,0.0" },
            { "id": 2, "pos": "1.0,1.0,0.0" },
            { "id": 3 }
        ],
        "Edges": [
            { "src": 0, "dest": 1, "w": 1.0 },
            { "src": 1, "dest": 2, "w": 2.0 },
            { "src": 2, "dest": 0, "w": 1.5 },
            { "src": 2, "dest": 3, "w": 0.5 },
            { "src": 0, "dest": 3, "w": 9.0 }
        ]
    }"#;
    fs::write(graph_file(dir), graph_json).unwrap();
}

#[test]
fn test_node_and_edge_lifecycle() {
    let dir = TempDir::new().unwrap();

    wdigraph(&dir).args(["init"]).assert().success();
    assert!(graph_file(&dir).exists());

    wdigraph(&dir)
        .args(["node", "add", "1", "--pos", "1.5,2.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added node 1"));
    wdigraph(&dir).args(["node", "add", "2"]).assert().success();

    wdigraph(&dir)
        .args(["edge", "add", "1", "2", "4.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created edge: 1 -> 2"));

    wdigraph(&dir)
        .args(["edge", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Edges (1):"))
        .stdout(predicate::str::contains("1 --[4.5]--> 2"));

    wdigraph(&dir)
        .args(["edge", "remove", "1", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed edge"));

    wdigraph(&dir)
        .args(["node", "remove", "1"])
        .assert()
        .success();

    let saved = fs::read_to_string(graph_file(&dir)).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(doc["Nodes"].as_array().map(Vec::len), Some(1));
    assert_eq!(doc["Edges"].as_array().map(Vec::len), Some(0));
}

#[test]
fn test_rejected_mutations_fail() {
    let dir = TempDir::new().unwrap();
    wdigraph(&dir).args(["node", "add", "1"]).assert().success();
    wdigraph(&dir).args(["node", "add", "2"]).assert().success();

    wdigraph(&dir)
        .args(["node", "add", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("node already exists: 1"));

    wdigraph(&dir)
        .args(["edge", "add", "1", "1", "5.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("self-loop"));

    wdigraph(&dir)
        .args(["edge", "add", "1", "2", "-3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid weight"));

    wdigraph(&dir)
        .args(["edge", "remove", "2", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("edge not found"));

    wdigraph(&dir)
        .args(["--json", "edge", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn test_shortest_path() {
    let dir = TempDir::new().unwrap();
    setup_graph(&dir);

    wdigraph(&dir)
        .args(["path", "0", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Distance: 3.5"))
        .stdout(predicate::str::contains("0 -> 1 -> 2 -> 3"));

    wdigraph(&dir)
        .args(["path", "3", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path from 3 to 0"));

    let output = wdigraph(&dir)
        .args(["--json", "path", "0", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["distance"], 3.0);
    assert_eq!(value["path"], serde_json::json!([0, 1, 2]));
}

#[test]
fn test_components() {
    let dir = TempDir::new().unwrap();
    setup_graph(&dir);

    wdigraph(&dir)
        .args(["component", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("{0, 1, 2}"));

    wdigraph(&dir)
        .args(["components"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Components (2):"))
        .stdout(predicate::str::contains("{3}"));

    wdigraph(&dir)
        .args(["component", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Node not found: 42"));
}

#[test]
fn test_transpose_and_export() {
    let dir = TempDir::new().unwrap();
    setup_graph(&dir);
    let reversed = dir.path().join("reversed.json");

    wdigraph(&dir)
        .args(["transpose", "-o"])
        .arg(&reversed)
        .assert()
        .success();

    let doc: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&reversed).unwrap()).unwrap();
    let edges = doc["Edges"].as_array().unwrap();
    assert_eq!(edges.len(), 5);
    assert!(edges
        .iter()
        .any(|e| e["src"] == 3 && e["dest"] == 2 && e["w"] == 0.5));

    wdigraph(&dir)
        .args(["export", "--format", "dot"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("digraph G {"))
        .stdout(predicate::str::contains("2 -> 3 [label=\"0.5\"];"));

    wdigraph(&dir)
        .args(["export", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown export format"));
}

#[test]
fn test_info_and_config() {
    let dir = TempDir::new().unwrap();
    setup_graph(&dir);

    wdigraph(&dir)
        .args(["info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("|V| = 4, |E| = 5"));

    wdigraph(&dir)
        .args(["config", "graph_file"])
        .assert()
        .success()
        .stdout(predicate::str::contains("graph.json"));
}

#[test]
fn test_environment_overrides_config_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("wdigraph.toml");
    fs::write(&config_path, "log_level = \"warn\"\npretty = true\n").unwrap();

    wdigraph(&dir)
        .arg("-c")
        .arg(&config_path)
        .args(["config", "log_level"])
        .assert()
        .success()
        .stdout("warn\n");

    wdigraph(&dir)
        .env("WDIGRAPH_LOG_LEVEL", "error")
        .env("WDIGRAPH_PRETTY", "false")
        .arg("-c")
        .arg(&config_path)
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("log_level = error"))
        .stdout(predicate::str::contains("pretty = false"));
}

#[test]
fn test_corrupt_graph_is_reported() {
    let dir = TempDir::new().unwrap();
    fs::write(graph_file(&dir), "{ not json").unwrap();

    wdigraph(&dir)
        .args(["info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load"));

    // The broken file is left alone
    assert_eq!(fs::read_to_string(graph_file(&dir)).unwrap(), "{ not json");
}

#[test]
fn test_completions() {
    let dir = TempDir::new().unwrap();
    wdigraph(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wdigraph"));
}
