// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 pipegraph contributors

//! Renderable graph model
//!
//! The directed graph handed to layout/rendering consumers: nodes keyed by
//! task name with display attributes, plus a deduplicated edge set.

mod layout;
mod model;
mod render;

pub use layout::{NodeHighlight, NODE_HEIGHT, NODE_WIDTH};
pub use model::{GraphNode, NodeInfo, NodeKind, PipelineGraph};
