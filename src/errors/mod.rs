// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 pipegraph contributors

//! Error types
//!
//! Fatal build failures are `GraphError`; conditions that only degrade one
//! branch of the graph (an unexpandable loop) are `BuildDiagnostic` values
//! collected on the build outcome instead of aborting it.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for pipegraph operations
pub type GraphResult<T> = Result<T, GraphError>;

/// Main error type for pipegraph
#[derive(Error, Debug, Diagnostic)]
pub enum GraphError {
    // ─────────────────────────────────────────────────────────────────────────
    // Manifest Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("Manifest file not found: {path}")]
    #[diagnostic(
        code(pipegraph::manifest_not_found),
        help("Pass the path of a PipelineRun manifest in YAML or JSON form")
    )]
    ManifestNotFound { path: PathBuf },

    #[error("Failed to read file '{path}': {error}")]
    #[diagnostic(code(pipegraph::file_read_error))]
    FileReadError { path: PathBuf, error: String },

    #[error("Unsupported manifest format: {path}")]
    #[diagnostic(
        code(pipegraph::unsupported_format),
        help("Supported extensions: .yaml, .yml, .json")
    )]
    UnsupportedManifestFormat { path: PathBuf },

    // ─────────────────────────────────────────────────────────────────────────
    // Build Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("Loop nesting in task '{task}' exceeds the depth limit of {limit}")]
    #[diagnostic(
        code(pipegraph::loop_depth_exceeded),
        help("Loop body annotations that reference each other cyclically cannot \
              be expanded; raise BuildOptions::max_loop_depth only if the \
              nesting is genuine")
    )]
    LoopDepthExceeded { task: String, limit: usize },

    // ─────────────────────────────────────────────────────────────────────────
    // IO/Parsing Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("IO error: {message}")]
    #[diagnostic(code(pipegraph::io_error))]
    Io { message: String },

    #[error("YAML parsing error: {message}")]
    #[diagnostic(code(pipegraph::yaml_error))]
    Yaml { message: String },

    #[error("JSON parsing error: {message}")]
    #[diagnostic(code(pipegraph::json_error))]
    Json { message: String },
}

impl From<std::io::Error> for GraphError {
    fn from(e: std::io::Error) -> Self {
        Self::Io { message: e.to_string() }
    }
}

impl From<serde_yaml::Error> for GraphError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Yaml { message: e.to_string() }
    }
}

impl From<serde_json::Error> for GraphError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json { message: e.to_string() }
    }
}

/// A recoverable condition hit while expanding one branch of the graph.
/// The affected loop node pair stays in the graph, unexpanded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildDiagnostic {
    #[error("loop task '{task}' has no body annotation '{key}'")]
    MissingLoopAnnotation { task: String, key: String },

    #[error("loop task '{task}' has an unparsable body under '{key}': {error}")]
    MalformedLoopBody {
        task: String,
        key: String,
        error: String,
    },
}

impl BuildDiagnostic {
    /// The annotation key the diagnostic refers to
    pub fn annotation_key(&self) -> &str {
        match self {
            Self::MissingLoopAnnotation { key, .. } => key,
            Self::MalformedLoopBody { key, .. } => key,
        }
    }
}
