// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 pipegraph contributors

//! Render command - print the pipeline graph in a chosen format

use colored::Colorize;
use miette::Result;
use std::path::PathBuf;

use super::RenderFormat;
use crate::builder::build_graph;
use crate::errors::GraphError;
use crate::manifest::PipelineRun;

/// Run the render command
pub fn run(manifest_path: PathBuf, format: RenderFormat, _verbose: bool) -> Result<()> {
    if !manifest_path.exists() {
        return Err(GraphError::ManifestNotFound {
            path: manifest_path,
        }
        .into());
    }

    let manifest = PipelineRun::from_file(&manifest_path)?;
    let outcome = build_graph(&manifest)?;

    let output = match format {
        RenderFormat::Text => outcome.graph.to_text(),
        RenderFormat::Dot => outcome.graph.to_dot(),
        RenderFormat::Mermaid => outcome.graph.to_mermaid(),
        RenderFormat::Json => outcome.graph.to_json()?,
    };

    println!("{}", output);

    for diagnostic in &outcome.diagnostics {
        eprintln!("{} {}", "warning:".yellow().bold(), diagnostic);
    }

    Ok(())
}
