// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 pipegraph contributors

//! Layout constants shared with the rendering consumer
//!
//! The builder assigns fixed node dimensions; coordinate assignment belongs
//! to the downstream layout engine.

use serde::{Deserialize, Serialize};

/// Rendered node width, in layout units
pub const NODE_WIDTH: f64 = 172.0;

/// Rendered node height, in layout units
pub const NODE_HEIGHT: f64 = 64.0;

/// Background highlight applied to special nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeHighlight {
    /// Exit-handler ("finally") tasks
    ExitHandler,
    /// Tasks guarded by a `when` condition
    Conditional,
}

impl NodeHighlight {
    /// CSS color the renderer uses for this highlight
    pub fn css_color(&self) -> &'static str {
        match self {
            Self::ExitHandler => "#eee",
            Self::Conditional => "cornsilk",
        }
    }
}
