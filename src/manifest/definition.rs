// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 pipegraph contributors

//! PipelineRun manifest structures
//!
//! Defines the schema for Tekton-style PipelineRun manifests. Field access
//! is best-effort: everything beyond the task name is optional, and
//! unrecognized fields are ignored so that partially malformed manifests
//! still yield a graph.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use super::LOOP_TASK_KIND;
use crate::errors::GraphError;

/// A pipeline-run manifest, the root input of the graph builder.
///
/// Loop bodies are nested manifests of this same shape, stored as
/// JSON-serialized strings in `metadata.annotations`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineRun {
    /// Manifest metadata; only `annotations` matters here
    #[serde(default)]
    pub metadata: Metadata,

    /// Run spec wrapping the pipeline definition
    #[serde(default)]
    pub spec: RunSpec,
}

impl PipelineRun {
    /// Load a manifest from a YAML or JSON file, chosen by extension.
    pub fn from_file(path: &Path) -> Result<Self, GraphError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| GraphError::FileReadError {
                path: path.to_path_buf(),
                error: e.to_string(),
            })?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&content),
            Some("yaml") | Some("yml") => Self::from_yaml(&content),
            _ => Err(GraphError::UnsupportedManifestFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Parse a manifest from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, GraphError> {
        serde_yaml::from_str(yaml).map_err(Into::into)
    }

    /// Parse a manifest from a JSON string
    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        serde_json::from_str(json).map_err(Into::into)
    }

    /// Look up an annotation value by key
    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.metadata.annotations.get(key).map(String::as_str)
    }
}

/// Manifest metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Manifest name
    #[serde(default)]
    pub name: Option<String>,

    /// String-keyed annotations; loop bodies live here
    #[serde(default)]
    pub annotations: HashMap<String, String>,
}

/// The `spec` wrapper of a PipelineRun
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSpec {
    /// Inline pipeline definition
    #[serde(default)]
    pub pipeline_spec: PipelineSpec,
}

/// The pipeline definition: ordered tasks plus optional exit handlers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineSpec {
    /// Tasks in declaration order
    #[serde(default)]
    pub tasks: Vec<PipelineTask>,

    /// Exit-handler tasks, appended after `tasks` during the build
    #[serde(default, rename = "finally")]
    pub finally_tasks: Vec<PipelineTask>,
}

/// One task entry of a pipeline manifest
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTask {
    /// Task name, unique within its nesting level
    pub name: String,

    /// Inline task body
    #[serde(default)]
    pub task_spec: Option<TaskSpec>,

    /// Reference to an external construct; `kind: PipelineLoop` marks a loop
    #[serde(default)]
    pub task_ref: Option<TaskRef>,

    /// Explicit predecessor names
    #[serde(default)]
    pub run_after: Vec<String>,

    /// Structured conditions
    #[serde(default)]
    pub when: Vec<WhenExpression>,

    /// Legacy conditions
    #[serde(default)]
    pub conditions: Vec<LegacyCondition>,

    /// Parameter bindings
    #[serde(default)]
    pub params: Vec<Param>,
}

impl PipelineTask {
    /// Classify the task once instead of probing optional fields ad hoc.
    pub fn shape(&self) -> TaskShape<'_> {
        if let Some(spec) = &self.task_spec {
            return TaskShape::Inline(spec);
        }
        if let Some(task_ref) = &self.task_ref {
            if task_ref.kind.as_deref() == Some(LOOP_TASK_KIND) {
                return TaskShape::Loop(task_ref);
            }
        }
        TaskShape::Unrecognized
    }
}

/// Checked shape of a task, decided once at the top of the build loop
#[derive(Debug, Clone, Copy)]
pub enum TaskShape<'a> {
    /// Task with an inline body
    Inline(&'a TaskSpec),
    /// Task referencing a loop sub-pipeline
    Loop(&'a TaskRef),
    /// Neither an inline body nor a loop reference
    Unrecognized,
}

/// Inline task body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskSpec {
    /// Container steps; only the first populates the node
    #[serde(default)]
    pub steps: Vec<TaskStep>,

    /// Declared input parameters
    #[serde(default)]
    pub params: Vec<ParamSpec>,

    /// Declared results
    #[serde(default)]
    pub results: Vec<TaskResult>,
}

/// One container step of an inline task body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStep {
    /// Step name
    #[serde(default)]
    pub name: Option<String>,

    /// Container command tokens
    #[serde(default)]
    pub command: Vec<String>,

    /// Container arguments
    #[serde(default)]
    pub args: Vec<String>,

    /// Container image reference
    #[serde(default)]
    pub image: String,

    /// Volume mounts
    #[serde(default)]
    pub volume_mounts: Vec<VolumeMount>,
}

/// A volume mount on a step
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeMount {
    /// Volume name
    #[serde(default)]
    pub name: String,

    /// Mount path inside the container
    #[serde(default)]
    pub mount_path: String,
}

/// Declared input parameter of a task body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParamSpec {
    pub name: String,

    #[serde(default)]
    pub value: Option<String>,
}

/// Declared result of a task body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskResult {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,
}

/// Reference to an external task or loop construct
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskRef {
    /// Referenced name; for loops this keys the body annotation
    #[serde(default)]
    pub name: String,

    /// Construct kind; `PipelineLoop` marks a loop head
    #[serde(default)]
    pub kind: Option<String>,
}

/// A structured condition on a task
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WhenExpression {
    /// Condition input, possibly a parameter reference
    #[serde(default)]
    pub input: Option<String>,

    /// Comparison operator, irrelevant to graph identity
    #[serde(default)]
    pub operator: Option<String>,

    /// Comparison values, irrelevant to graph identity
    #[serde(default)]
    pub values: Vec<String>,
}

/// A legacy condition on a task
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyCondition {
    /// Referenced condition name
    #[serde(default)]
    pub condition_ref: Option<String>,

    /// Condition parameters whose values may carry task references
    #[serde(default)]
    pub params: Vec<ConditionParam>,
}

/// One parameter of a legacy condition
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConditionParam {
    #[serde(default)]
    pub name: Option<String>,

    /// May be any JSON shape in the wild; only strings feed the resolver
    #[serde(default)]
    pub value: ParamValue,
}

/// A parameter binding on a task
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Param {
    pub name: String,

    #[serde(default)]
    pub value: ParamValue,
}

/// Parameter value shapes seen in manifests.
///
/// Only `Many` feeds the parameter-binding dependency channel; the other
/// shapes contribute no edges.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Single string value
    Single(String),

    /// List of string values
    Many(Vec<String>),

    /// Anything else; kept for round-tripping, never parsed for edges
    Other(serde_json::Value),
}

impl Default for ParamValue {
    fn default() -> Self {
        Self::Other(serde_json::Value::Null)
    }
}

impl ParamValue {
    /// The value as a single string, if it has that shape
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Single(s) => Some(s),
            _ => None,
        }
    }

    /// The value as a list of strings; non-list shapes are empty
    pub fn as_list(&self) -> &[String] {
        match self {
            Self::Many(values) => values,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_manifest() {
        let yaml = r#"
metadata:
  name: "demo-run"
spec:
  pipelineSpec:
    tasks:
      - name: "build"
        taskSpec:
          steps:
            - name: "step"
              image: "alpine"
              command: ["sh", "-c"]
              args: ["make"]
      - name: "deploy"
        runAfter:
          - build
"#;

        let manifest = PipelineRun::from_yaml(yaml).unwrap();
        assert_eq!(manifest.metadata.name.as_deref(), Some("demo-run"));

        let tasks = &manifest.spec.pipeline_spec.tasks;
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].name, "build");
        assert!(matches!(tasks[0].shape(), TaskShape::Inline(_)));
        assert_eq!(tasks[1].run_after, vec!["build"]);
    }

    #[test]
    fn test_parse_finally_tasks() {
        let yaml = r#"
spec:
  pipelineSpec:
    tasks:
      - name: "main"
    finally:
      - name: "cleanup"
"#;

        let manifest = PipelineRun::from_yaml(yaml).unwrap();
        assert_eq!(manifest.spec.pipeline_spec.finally_tasks.len(), 1);
        assert_eq!(manifest.spec.pipeline_spec.finally_tasks[0].name, "cleanup");
    }

    #[test]
    fn test_loop_shape_requires_kind() {
        let yaml = r#"
spec:
  pipelineSpec:
    tasks:
      - name: "looped"
        taskRef:
          name: "body"
          kind: "PipelineLoop"
      - name: "plain-ref"
        taskRef:
          name: "external"
"#;

        let manifest = PipelineRun::from_yaml(yaml).unwrap();
        let tasks = &manifest.spec.pipeline_spec.tasks;

        assert!(matches!(tasks[0].shape(), TaskShape::Loop(_)));
        assert!(matches!(tasks[1].shape(), TaskShape::Unrecognized));
    }

    #[test]
    fn test_param_value_shapes() {
        let yaml = r#"
spec:
  pipelineSpec:
    tasks:
      - name: "consumer"
        params:
          - name: "single"
            value: "plain"
          - name: "list"
            value:
              - "$(tasks.producer.results.out)"
          - name: "odd"
            value: 42
"#;

        let manifest = PipelineRun::from_yaml(yaml).unwrap();
        let params = &manifest.spec.pipeline_spec.tasks[0].params;

        assert_eq!(params[0].value.as_str(), Some("plain"));
        assert!(params[0].value.as_list().is_empty());
        assert_eq!(params[1].value.as_list().len(), 1);
        assert!(params[2].value.as_list().is_empty());
        assert!(params[2].value.as_str().is_none());
    }

    #[test]
    fn test_annotation_lookup() {
        let yaml = r#"
metadata:
  annotations:
    tekton.dev/inner: '{"spec": {"pipelineSpec": {"tasks": []}}}'
spec:
  pipelineSpec:
    tasks: []
"#;

        let manifest = PipelineRun::from_yaml(yaml).unwrap();
        assert!(manifest.annotation("tekton.dev/inner").is_some());
        assert!(manifest.annotation("tekton.dev/missing").is_none());
    }

    #[test]
    fn test_nested_manifest_round_trips_json() {
        let inner = PipelineRun {
            spec: RunSpec {
                pipeline_spec: PipelineSpec {
                    tasks: vec![PipelineTask {
                        name: "x".into(),
                        ..Default::default()
                    }],
                    finally_tasks: vec![],
                },
            },
            ..Default::default()
        };

        let json = serde_json::to_string(&inner).unwrap();
        let parsed = PipelineRun::from_json(&json).unwrap();
        assert_eq!(parsed.spec.pipeline_spec.tasks[0].name, "x");
    }
}
