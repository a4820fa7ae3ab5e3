// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 pipegraph contributors

//! pipegraph - Static Pipeline-Graph Builder
//!
//! Build renderable dependency graphs from PipelineRun manifests.

use clap::Parser;
use miette::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pipegraph::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pipegraph=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Dispatch to command handlers
    match cli.command {
        Commands::Render { manifest, format } => {
            pipegraph::cli::render::run(manifest, format, cli.verbose)
        }
        Commands::Nodes { manifest } => pipegraph::cli::nodes::run(manifest, cli.verbose),
    }
}
