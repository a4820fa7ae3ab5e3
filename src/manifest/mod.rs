// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 pipegraph contributors

//! PipelineRun manifest model
//!
//! Typed schema for the declarative pipeline-run manifests this crate
//! consumes, plus loading from YAML or JSON files.

mod definition;

pub use definition::*;

/// `taskRef.kind` value marking a task as a loop head.
pub const LOOP_TASK_KIND: &str = "PipelineLoop";

/// Annotation key prefix under which loop bodies are stored, concatenated
/// with the `taskRef` name.
pub const LOOP_ANNOTATION_PREFIX: &str = "tekton.dev/";
