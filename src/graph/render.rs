// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 pipegraph contributors

//! Textual renderings of a pipeline graph
//!
//! Coordinate layout belongs to the downstream engine; these formats exist
//! for inspection and for handing the graph to external tooling.

use serde::Serialize;

use super::model::{GraphNode, PipelineGraph};
use crate::errors::GraphError;

/// Flat export shape for the `json` format
#[derive(Debug, Serialize)]
struct GraphExport<'a> {
    nodes: Vec<&'a GraphNode>,
    edges: Vec<EdgeExport<'a>>,
}

#[derive(Debug, Serialize)]
struct EdgeExport<'a> {
    from: &'a str,
    to: &'a str,
}

impl PipelineGraph {
    /// Generate a Mermaid diagram of the graph
    pub fn to_mermaid(&self) -> String {
        let mut out = String::from("graph TD\n");

        for node in self.nodes() {
            out.push_str(&format!("    {}[\"{}\"]\n", node.name, node.label));
        }

        for (from, to) in self.edges() {
            out.push_str(&format!("    {} --> {}\n", from, to));
        }

        out
    }

    /// Generate a DOT diagram of the graph
    pub fn to_dot(&self) -> String {
        let mut out = String::from("digraph pipeline {\n");
        out.push_str("    rankdir=TB;\n");
        out.push_str("    node [shape=box, style=rounded];\n\n");

        for node in self.nodes() {
            match node.highlight {
                Some(highlight) => out.push_str(&format!(
                    "    \"{}\" [label=\"{}\", style=filled, fillcolor=\"{}\"];\n",
                    node.name,
                    node.label,
                    highlight.css_color()
                )),
                None => out.push_str(&format!(
                    "    \"{}\" [label=\"{}\"];\n",
                    node.name, node.label
                )),
            }
        }

        out.push('\n');
        for (from, to) in self.edges() {
            out.push_str(&format!("    \"{}\" -> \"{}\";\n", from, to));
        }

        out.push_str("}\n");
        out
    }

    /// Generate a text listing of nodes and their predecessors
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        for (i, node) in self.nodes().enumerate() {
            let preds = self.predecessors(&node.name);

            out.push_str(&format!("{}. {} ({})", i + 1, node.label, node.info.kind));

            if !preds.is_empty() {
                out.push_str(&format!(" [after: {}]", preds.join(", ")));
            }

            out.push('\n');
        }

        out
    }

    /// Serialize nodes and edges to pretty-printed JSON
    pub fn to_json(&self) -> Result<String, GraphError> {
        let export = GraphExport {
            nodes: self.nodes().collect(),
            edges: self
                .edges()
                .into_iter()
                .map(|(from, to)| EdgeExport { from, to })
                .collect(),
        };
        serde_json::to_string_pretty(&export).map_err(Into::into)
    }
}
