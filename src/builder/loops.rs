// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 pipegraph contributors

//! Loop expansion
//!
//! A task whose `taskRef` is marked as a loop head brackets a nested
//! sub-pipeline stored out-of-band: the body manifest lives JSON-serialized
//! in an annotation keyed by the `taskRef` name. Expansion creates the
//! start/end sentinel pair, registers the task for dependency redirection,
//! and recurses into the body with the pair as the enclosing boundary.

use tracing::warn;

use super::{GraphBuilder, LoopBoundary};
use crate::errors::{BuildDiagnostic, GraphError};
use crate::graph::{GraphNode, NodeHighlight, NodeInfo, PipelineGraph};
use crate::manifest::{PipelineRun, PipelineTask, TaskRef, LOOP_ANNOTATION_PREFIX};

/// Suffix distinguishing a loop's exit sentinel from its head
pub(super) const LOOP_END_SUFFIX: &str = "-end";

/// Identifier of the exit sentinel paired with a loop head
pub(super) fn loop_exit_name(task_name: &str) -> String {
    format!("{task_name}{LOOP_END_SUFFIX}")
}

impl GraphBuilder {
    /// Expand one loop task: sentinel pair, body lookup, recursive build.
    ///
    /// A missing or unparsable body degrades to an unexpanded sentinel pair
    /// plus a diagnostic; only exceeding the depth limit is fatal.
    pub(super) fn expand_loop(
        &mut self,
        graph: &mut PipelineGraph,
        manifest: &PipelineRun,
        task: &PipelineTask,
        task_ref: &TaskRef,
        highlight: Option<NodeHighlight>,
        info: NodeInfo,
        depth: usize,
    ) -> Result<(), GraphError> {
        if depth >= self.options.max_loop_depth {
            return Err(GraphError::LoopDepthExceeded {
                task: task.name.clone(),
                limit: self.options.max_loop_depth,
            });
        }

        let sequence = self.next_loop;
        self.next_loop += 1;
        self.loop_tasks.insert(task.name.clone());

        let end_name = loop_exit_name(&task.name);
        graph.set_node(GraphNode::new(
            &task.name,
            format!("start-loop-{sequence}"),
            highlight,
            info.clone(),
        ));
        graph.set_node(GraphNode::new(
            &end_name,
            format!("end-loop-{sequence}"),
            highlight,
            info,
        ));

        let key = format!("{LOOP_ANNOTATION_PREFIX}{}", task_ref.name);
        let Some(body) = manifest.annotation(&key) else {
            warn!(task = %task.name, %key, "loop body annotation missing");
            self.diagnostics.push(BuildDiagnostic::MissingLoopAnnotation {
                task: task.name.clone(),
                key,
            });
            return Ok(());
        };

        let nested: PipelineRun = match serde_json::from_str(body) {
            Ok(nested) => nested,
            Err(e) => {
                warn!(task = %task.name, %key, error = %e, "loop body annotation unparsable");
                self.diagnostics.push(BuildDiagnostic::MalformedLoopBody {
                    task: task.name.clone(),
                    key,
                    error: e.to_string(),
                });
                return Ok(());
            }
        };

        let boundary = LoopBoundary {
            start: task.name.clone(),
            end: end_name,
        };
        self.build_level(graph, &nested, Some(&boundary), depth + 1)
    }
}
