// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 pipegraph contributors

//! Nodes command - list graph nodes with their display attributes

use colored::Colorize;
use miette::Result;
use std::path::PathBuf;

use crate::builder::build_graph;
use crate::errors::GraphError;
use crate::manifest::PipelineRun;

/// Run the nodes command
pub fn run(manifest_path: PathBuf, verbose: bool) -> Result<()> {
    if !manifest_path.exists() {
        return Err(GraphError::ManifestNotFound {
            path: manifest_path,
        }
        .into());
    }

    let manifest = PipelineRun::from_file(&manifest_path)?;
    let outcome = build_graph(&manifest)?;

    for node in outcome.graph.nodes() {
        let highlight = node
            .highlight
            .map(|h| format!(" [{}]", h.css_color()))
            .unwrap_or_default();

        println!(
            "{} {} ({}){}",
            node.name.bold(),
            node.label.dimmed(),
            node.info.kind,
            highlight
        );

        if verbose {
            if !node.info.image.is_empty() {
                println!("    image: {}", node.info.image);
            }
            if !node.info.command.is_empty() {
                println!("    command: {}", node.info.command.join(" "));
            }
            for (name, value) in &node.info.inputs {
                println!("    input: {} = {}", name, value);
            }
            for (name, description) in &node.info.outputs {
                println!("    output: {} ({})", name, description);
            }
        }
    }

    println!(
        "\n{} nodes, {} edges",
        outcome.graph.node_count(),
        outcome.graph.edge_count()
    );

    for diagnostic in &outcome.diagnostics {
        eprintln!("{} {}", "warning:".yellow().bold(), diagnostic);
    }

    Ok(())
}
