// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 pipegraph contributors

//! Graph structure and node attributes
//!
//! A directed graph over task names. Setting an edge implicitly creates
//! placeholder endpoints so dependency edges may be recorded before their
//! producing task is visited; `set_node` later upgrades the placeholder
//! without disturbing edges. Duplicate edges collapse.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use serde::Serialize;
use std::collections::HashMap;

use super::layout::{NodeHighlight, NODE_HEIGHT, NODE_WIDTH};

/// Node kind, derived from the task shape
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Container,
    Resource,
    Dag,
    #[default]
    Unknown,
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Container => write!(f, "container"),
            Self::Resource => write!(f, "resource"),
            Self::Dag => write!(f, "dag"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Display-relevant descriptor embedded in every node.
///
/// List fields are plain vectors; an empty vector means "no data" and
/// renders as a single blank row downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NodeInfo {
    /// Node kind; `container` once a task body has been inspected
    pub kind: NodeKind,

    /// First step's arguments
    pub args: Vec<String>,

    /// First step's command tokens
    pub command: Vec<String>,

    /// Textual condition
    pub condition: String,

    /// First step's container image
    pub image: String,

    /// Declared input parameters as (name, value) pairs
    pub inputs: Vec<(String, String)>,

    /// Declared results as (name, description) pairs
    pub outputs: Vec<(String, String)>,

    /// First step's volume mounts as (mountPath, volumeName) pairs
    pub volume_mounts: Vec<(String, String)>,

    /// Resource fields, reserved
    pub resource: Vec<(String, String)>,
}

/// Attributes of one graph node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    /// Node identifier, the task name
    pub name: String,

    /// Display label
    pub label: String,

    /// Rendered width, in layout units
    pub width: f64,

    /// Rendered height, in layout units
    pub height: f64,

    /// Background highlight, if any
    pub highlight: Option<NodeHighlight>,

    /// Display descriptor
    pub info: NodeInfo,
}

impl GraphNode {
    /// Create a node with the shared layout dimensions
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        highlight: Option<NodeHighlight>,
        info: NodeInfo,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            width: NODE_WIDTH,
            height: NODE_HEIGHT,
            highlight,
            info,
        }
    }

    /// Placeholder for an edge endpoint whose task has not been visited.
    /// Remains in the graph with default attributes when the manifest
    /// references a name that never materializes.
    fn placeholder(name: &str) -> Self {
        Self::new(name, name, None, NodeInfo::default())
    }
}

/// The renderable pipeline graph
#[derive(Debug, Clone, Default)]
pub struct PipelineGraph {
    graph: DiGraph<GraphNode, ()>,
    name_to_index: HashMap<String, NodeIndex>,
}

impl PipelineGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_node(&mut self, name: &str) -> NodeIndex {
        if let Some(idx) = self.name_to_index.get(name) {
            return *idx;
        }
        let idx = self.graph.add_node(GraphNode::placeholder(name));
        self.name_to_index.insert(name.to_string(), idx);
        idx
    }

    /// Insert a node, or overwrite an existing node's attributes in place
    /// (edges attached to it are preserved).
    pub fn set_node(&mut self, node: GraphNode) {
        let idx = self.ensure_node(&node.name);
        self.graph[idx] = node;
    }

    /// Insert a directed edge; endpoints are created as placeholders when
    /// absent, and setting the same edge twice is idempotent.
    pub fn set_edge(&mut self, from: &str, to: &str) {
        let from_idx = self.ensure_node(from);
        let to_idx = self.ensure_node(to);
        if !self.graph.contains_edge(from_idx, to_idx) {
            self.graph.add_edge(from_idx, to_idx, ());
        }
    }

    /// Look up a node's attributes
    pub fn node(&self, name: &str) -> Option<&GraphNode> {
        self.name_to_index.get(name).map(|idx| &self.graph[*idx])
    }

    /// Whether a node exists under this name
    pub fn contains_node(&self, name: &str) -> bool {
        self.name_to_index.contains_key(name)
    }

    /// Whether the edge (from, to) exists
    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        match (self.name_to_index.get(from), self.name_to_index.get(to)) {
            (Some(f), Some(t)) => self.graph.contains_edge(*f, *t),
            _ => false,
        }
    }

    /// All nodes, in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.graph.node_indices().map(move |idx| &self.graph[idx])
    }

    /// All node names, in insertion order
    pub fn node_names(&self) -> impl Iterator<Item = &str> {
        self.nodes().map(|n| n.name.as_str())
    }

    /// All edges as (from, to) name pairs, in insertion order
    pub fn edges(&self) -> Vec<(&str, &str)> {
        self.graph
            .edge_indices()
            .filter_map(|e| self.graph.edge_endpoints(e))
            .map(|(f, t)| (self.graph[f].name.as_str(), self.graph[t].name.as_str()))
            .collect()
    }

    /// Incoming edge count for a node, if it exists
    pub fn in_degree(&self, name: &str) -> Option<usize> {
        let idx = self.name_to_index.get(name)?;
        Some(
            self.graph
                .neighbors_directed(*idx, Direction::Incoming)
                .count(),
        )
    }

    /// Outgoing edge count for a node, if it exists
    pub fn out_degree(&self, name: &str) -> Option<usize> {
        let idx = self.name_to_index.get(name)?;
        Some(
            self.graph
                .neighbors_directed(*idx, Direction::Outgoing)
                .count(),
        )
    }

    /// Direct predecessors of a node
    pub fn predecessors(&self, name: &str) -> Vec<&str> {
        let Some(idx) = self.name_to_index.get(name) else {
            return vec![];
        };
        self.graph
            .neighbors_directed(*idx, Direction::Incoming)
            .map(|n| self.graph[n].name.as_str())
            .collect()
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_edge_is_idempotent() {
        let mut graph = PipelineGraph::new();
        graph.set_edge("a", "b");
        graph.set_edge("a", "b");

        assert_eq!(graph.edge_count(), 1);
        assert!(graph.contains_edge("a", "b"));
        assert!(!graph.contains_edge("b", "a"));
    }

    #[test]
    fn test_set_node_upgrades_placeholder_keeping_edges() {
        let mut graph = PipelineGraph::new();
        graph.set_edge("a", "b");

        // "b" exists only as a placeholder at this point
        assert_eq!(graph.node("b").unwrap().label, "b");

        graph.set_node(GraphNode::new("b", "fancy-label", None, NodeInfo::default()));

        assert_eq!(graph.node("b").unwrap().label, "fancy-label");
        assert!(graph.contains_edge("a", "b"));
        assert_eq!(graph.in_degree("b"), Some(1));
    }

    #[test]
    fn test_degree_queries() {
        let mut graph = PipelineGraph::new();
        graph.set_edge("a", "c");
        graph.set_edge("b", "c");
        graph.set_edge("c", "d");

        assert_eq!(graph.in_degree("c"), Some(2));
        assert_eq!(graph.out_degree("c"), Some(1));
        assert_eq!(graph.in_degree("a"), Some(0));
        assert_eq!(graph.out_degree("d"), Some(0));
        assert_eq!(graph.in_degree("missing"), None);
    }

    #[test]
    fn test_insertion_order_is_stable() {
        let mut graph = PipelineGraph::new();
        graph.set_node(GraphNode::new("z", "z", None, NodeInfo::default()));
        graph.set_node(GraphNode::new("a", "a", None, NodeInfo::default()));
        graph.set_edge("z", "a");
        graph.set_edge("a", "m");

        let names: Vec<&str> = graph.node_names().collect();
        assert_eq!(names, vec!["z", "a", "m"]);
        assert_eq!(graph.edges(), vec![("z", "a"), ("a", "m")]);
    }
}
