// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 pipegraph contributors

//! Graph construction
//!
//! Orchestrates the build of a renderable graph from a PipelineRun manifest:
//! per task, resolve dependency edges, extract node info, and add either a
//! plain node or a loop sentinel pair with a recursively expanded body. All
//! build state (loop counter, loop-task registry, diagnostics) lives on the
//! builder, so concurrent builds never interfere and loop numbering restarts
//! at 1 for every top-level invocation.

mod deps;
mod info;
mod loops;
mod params;

pub use params::referenced_task;

use std::collections::HashSet;

use tracing::debug;

use crate::errors::{BuildDiagnostic, GraphError, GraphResult};
use crate::graph::{GraphNode, NodeHighlight, NodeInfo, PipelineGraph};
use crate::manifest::{PipelineRun, PipelineTask, TaskShape};

/// Tunables for one build
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Maximum loop-nesting depth before the build fails
    pub max_loop_depth: usize,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self { max_loop_depth: 32 }
    }
}

/// Result of a successful build: the graph plus any branch diagnostics
#[derive(Debug)]
pub struct BuildOutcome {
    /// The fully populated graph
    pub graph: PipelineGraph,

    /// Recoverable conditions absorbed during the build
    pub diagnostics: Vec<BuildDiagnostic>,
}

/// Enclosing sentinel pair passed to the recursive call for a loop body
pub(crate) struct LoopBoundary {
    start: String,
    end: String,
}

/// One-shot builder turning a manifest into a graph
pub struct GraphBuilder {
    pub(crate) options: BuildOptions,
    pub(crate) next_loop: u32,
    pub(crate) loop_tasks: HashSet<String>,
    pub(crate) diagnostics: Vec<BuildDiagnostic>,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    /// Create a builder with default options
    pub fn new() -> Self {
        Self::with_options(BuildOptions::default())
    }

    /// Create a builder with explicit options
    pub fn with_options(options: BuildOptions) -> Self {
        Self {
            options,
            next_loop: 1,
            loop_tasks: HashSet::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Build the graph for a manifest. The builder is consumed; every build
    /// starts from fresh loop numbering and an empty registry.
    pub fn build(mut self, manifest: &PipelineRun) -> GraphResult<BuildOutcome> {
        let mut graph = PipelineGraph::new();
        self.build_level(&mut graph, manifest, None, 0)?;

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            diagnostics = self.diagnostics.len(),
            "graph build complete"
        );

        Ok(BuildOutcome {
            graph,
            diagnostics: self.diagnostics,
        })
    }

    /// Add one manifest level to the graph: declared tasks followed by exit
    /// handlers, then boundary stitching when this level is a loop body.
    pub(crate) fn build_level(
        &mut self,
        graph: &mut PipelineGraph,
        manifest: &PipelineRun,
        boundary: Option<&LoopBoundary>,
        depth: usize,
    ) -> GraphResult<()> {
        let spec = &manifest.spec.pipeline_spec;

        let exit_handlers: HashSet<&str> = spec
            .finally_tasks
            .iter()
            .map(|t| t.name.as_str())
            .collect();

        let tasks: Vec<&PipelineTask> =
            spec.tasks.iter().chain(spec.finally_tasks.iter()).collect();

        for task in &tasks {
            for predecessor in deps::resolve_predecessors(task, &self.loop_tasks) {
                graph.set_edge(&predecessor, &task.name);
            }

            let info = NodeInfo::from_task(Some(task));
            let is_exit_handler = exit_handlers.contains(task.name.as_str());

            let label = if is_exit_handler {
                format!("onExit - {}", task.name)
            } else {
                task.name.clone()
            };

            let highlight = if is_exit_handler {
                Some(NodeHighlight::ExitHandler)
            } else if !task.when.is_empty() {
                Some(NodeHighlight::Conditional)
            } else {
                None
            };

            match task.shape() {
                TaskShape::Loop(task_ref) => {
                    self.expand_loop(graph, manifest, task, task_ref, highlight, info, depth)?;
                }
                // Tasks with neither a body nor a loop reference still get a
                // best-effort node with default info.
                TaskShape::Inline(_) | TaskShape::Unrecognized => {
                    graph.set_node(GraphNode::new(&task.name, label, highlight, info));
                }
            }
        }

        if let Some(boundary) = boundary {
            stitch_boundary(graph, &tasks, boundary);
        }

        Ok(())
    }
}

/// Connect a loop body's free entry/exit tasks to the enclosing sentinels.
/// Scans only the current level's task list, after all of it has been added,
/// so a task whose successor appears later in the list is not stitched to
/// the end sentinel prematurely.
fn stitch_boundary(graph: &mut PipelineGraph, tasks: &[&PipelineTask], boundary: &LoopBoundary) {
    for task in tasks {
        if graph.in_degree(&task.name) == Some(0) {
            graph.set_edge(&boundary.start, &task.name);
        }
        if graph.out_degree(&task.name) == Some(0) {
            graph.set_edge(&task.name, &boundary.end);
        }
    }
}

/// Build a graph from a manifest with default options
pub fn build_graph(manifest: &PipelineRun) -> GraphResult<BuildOutcome> {
    GraphBuilder::new().build(manifest)
}
