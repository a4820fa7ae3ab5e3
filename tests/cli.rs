// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 pipegraph contributors

//! End-to-end tests for the pipegraph binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

const MANIFEST: &str = r#"
spec:
  pipelineSpec:
    tasks:
      - name: "build"
        taskSpec:
          steps:
            - image: "golang:1.22"
              command: ["go", "build"]
      - name: "deploy"
        taskSpec:
          steps:
            - image: "alpine"
        runAfter:
          - build
    finally:
      - name: "cleanup"
        taskSpec: {}
"#;

fn write_manifest(dir: &tempfile::TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("run.yaml");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn render_text_lists_nodes_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_manifest(&dir, MANIFEST);

    Command::cargo_bin("pipegraph")
        .unwrap()
        .args(["render", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. build (container)"))
        .stdout(predicate::str::contains("deploy (container) [after: build]"))
        .stdout(predicate::str::contains("onExit - cleanup"));
}

#[test]
fn render_dot_emits_graphviz() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_manifest(&dir, MANIFEST);

    Command::cargo_bin("pipegraph")
        .unwrap()
        .args(["render", path.to_str().unwrap(), "--format", "dot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("digraph pipeline"))
        .stdout(predicate::str::contains("\"build\" -> \"deploy\";"));
}

#[test]
fn render_json_exports_nodes_and_edges() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_manifest(&dir, MANIFEST);

    let output = Command::cargo_bin("pipegraph")
        .unwrap()
        .args(["render", path.to_str().unwrap(), "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["nodes"].as_array().unwrap().len(), 3);
    assert_eq!(value["edges"][0]["from"], "build");
}

#[test]
fn nodes_summarizes_the_graph() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_manifest(&dir, MANIFEST);

    Command::cargo_bin("pipegraph")
        .unwrap()
        .args(["nodes", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 nodes, 1 edges"));
}

#[test]
fn missing_manifest_fails_with_context() {
    Command::cargo_bin("pipegraph")
        .unwrap()
        .args(["render", "no-such-file.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Manifest file not found"));
}

#[test]
fn unexpandable_loop_warns_but_succeeds() {
    let manifest = r#"
spec:
  pipelineSpec:
    tasks:
      - name: "looped"
        taskRef:
          name: "absent-body"
          kind: "PipelineLoop"
"#;

    let dir = tempfile::tempdir().unwrap();
    let path = write_manifest(&dir, manifest);

    Command::cargo_bin("pipegraph")
        .unwrap()
        .args(["render", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("start-loop-1"))
        .stderr(predicate::str::contains("tekton.dev/absent-body"));
}
