// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 pipegraph contributors

//! CLI command definitions and handlers
//!
//! Defines the command-line interface for pipegraph.

pub mod nodes;
pub mod render;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Static pipeline-graph builder
///
/// Turns a PipelineRun manifest into a renderable dependency graph.
#[derive(Parser, Debug)]
#[clap(
    name = "pipegraph",
    version,
    about = "Build renderable dependency graphs from PipelineRun manifests",
    long_about = None,
    after_help = "Examples:\n\
        pipegraph render run.yaml               Print the graph as text\n\
        pipegraph render run.yaml --format dot  Emit Graphviz DOT\n\
        pipegraph nodes run.yaml                List nodes with their attributes\n\n\
        See 'pipegraph <command> --help' for more information on a specific command."
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[clap(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the pipeline graph
    Render {
        /// PipelineRun manifest (YAML or JSON)
        manifest: PathBuf,

        /// Output format
        #[clap(short, long, value_enum, default_value_t = RenderFormat::Text)]
        format: RenderFormat,
    },

    /// List graph nodes with their display attributes
    Nodes {
        /// PipelineRun manifest (YAML or JSON)
        manifest: PathBuf,
    },
}

/// Graph output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderFormat {
    Text,
    Dot,
    Mermaid,
    Json,
}
