// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 pipegraph contributors

//! # pipegraph - Static Pipeline-Graph Builder
//!
//! `pipegraph` converts declarative PipelineRun manifests into directed
//! graphs of renderable nodes and edges.
//!
//! ## Features
//!
//! - **Dependency inference** - explicit ordering, condition inputs, and
//!   parameter bindings all contribute edges
//! - **Loop unrolling** - nested sub-pipelines stored in annotations are
//!   expanded recursively and bracketed by start/end sentinel nodes
//! - **Best-effort graphs** - malformed tasks degrade to default nodes and
//!   unexpandable loops to diagnostics instead of aborting the build
//!
//! ## Quick Start
//!
//! ```no_run
//! use pipegraph::{build_graph, PipelineRun};
//!
//! let manifest = PipelineRun::from_file("run.yaml".as_ref())?;
//! let outcome = build_graph(&manifest)?;
//!
//! for (from, to) in outcome.graph.edges() {
//!     println!("{} -> {}", from, to);
//! }
//! # Ok::<(), pipegraph::GraphError>(())
//! ```

pub mod builder;
pub mod cli;
pub mod errors;
pub mod graph;
pub mod manifest;

// Re-export commonly used types
pub use builder::{build_graph, BuildOptions, BuildOutcome, GraphBuilder};
pub use errors::{BuildDiagnostic, GraphError, GraphResult};
pub use graph::{GraphNode, NodeInfo, PipelineGraph};
pub use manifest::PipelineRun;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
