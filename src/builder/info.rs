// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 pipegraph contributors

//! Node-info extraction
//!
//! Flattens one task definition into the display descriptor embedded in its
//! node. Only the first step of an inline body populates the container
//! fields; later steps are not separately represented.

use crate::graph::{NodeInfo, NodeKind};
use crate::manifest::PipelineTask;

impl NodeInfo {
    /// Build a descriptor from an optional task. An absent task yields the
    /// defaults unchanged (kind `unknown`); this must never fail.
    pub fn from_task(task: Option<&PipelineTask>) -> Self {
        let mut info = Self::default();
        if let Some(task) = task {
            info.populate_from(task);
        }
        info
    }

    /// Populate this descriptor in place from a task definition.
    pub fn populate_from(&mut self, task: &PipelineTask) {
        let Some(spec) = &task.task_spec else {
            return;
        };

        self.kind = NodeKind::Container;

        if let Some(step) = spec.steps.first() {
            self.args = step.args.clone();
            self.command = step.command.clone();
            self.image = step.image.clone();
            self.volume_mounts = step
                .volume_mounts
                .iter()
                .map(|v| (v.mount_path.clone(), v.name.clone()))
                .collect();
        }

        if !spec.params.is_empty() {
            self.inputs = spec
                .params
                .iter()
                .map(|p| (p.name.clone(), p.value.clone().unwrap_or_default()))
                .collect();
        }

        if !spec.results.is_empty() {
            self.outputs = spec
                .results
                .iter()
                .map(|r| (r.name.clone(), r.description.clone().unwrap_or_default()))
                .collect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::PipelineRun;

    fn task_from_yaml(yaml: &str) -> PipelineTask {
        let manifest = PipelineRun::from_yaml(yaml).unwrap();
        manifest.spec.pipeline_spec.tasks[0].clone()
    }

    #[test]
    fn test_absent_task_keeps_defaults() {
        let info = NodeInfo::from_task(None);

        assert_eq!(info.kind, NodeKind::Unknown);
        assert!(info.args.is_empty());
        assert!(info.command.is_empty());
        assert!(info.inputs.is_empty());
        assert!(info.outputs.is_empty());
        assert!(info.volume_mounts.is_empty());
        assert!(info.resource.is_empty());
        assert_eq!(info.condition, "");
        assert_eq!(info.image, "");
    }

    #[test]
    fn test_task_without_body_stays_unknown() {
        let task = task_from_yaml(
            r#"
spec:
  pipelineSpec:
    tasks:
      - name: "bare"
        runAfter: ["other"]
"#,
        );

        let info = NodeInfo::from_task(Some(&task));
        assert_eq!(info.kind, NodeKind::Unknown);
    }

    #[test]
    fn test_first_step_only() {
        let task = task_from_yaml(
            r#"
spec:
  pipelineSpec:
    tasks:
      - name: "build"
        taskSpec:
          steps:
            - name: "first"
              image: "golang:1.22"
              command: ["go"]
              args: ["build", "./..."]
              volumeMounts:
                - name: "cache"
                  mountPath: "/cache"
            - name: "second"
              image: "alpine"
              command: ["true"]
"#,
        );

        let info = NodeInfo::from_task(Some(&task));

        assert_eq!(info.kind, NodeKind::Container);
        assert_eq!(info.image, "golang:1.22");
        assert_eq!(info.command, vec!["go"]);
        assert_eq!(info.args, vec!["build", "./..."]);
        assert_eq!(
            info.volume_mounts,
            vec![("/cache".to_string(), "cache".to_string())]
        );
    }

    #[test]
    fn test_params_and_results_map_to_pairs() {
        let task = task_from_yaml(
            r#"
spec:
  pipelineSpec:
    tasks:
      - name: "build"
        taskSpec:
          params:
            - name: "target"
              value: "prod"
            - name: "flags"
          results:
            - name: "digest"
              description: "image digest"
            - name: "url"
"#,
        );

        let info = NodeInfo::from_task(Some(&task));

        assert_eq!(
            info.inputs,
            vec![
                ("target".to_string(), "prod".to_string()),
                ("flags".to_string(), String::new()),
            ]
        );
        assert_eq!(
            info.outputs,
            vec![
                ("digest".to_string(), "image digest".to_string()),
                ("url".to_string(), String::new()),
            ]
        );
    }
}
