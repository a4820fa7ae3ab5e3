// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 pipegraph contributors

//! Dependency resolution
//!
//! Computes a task's predecessors from three differently-shaped channels:
//! explicit `runAfter` ordering, condition inputs (`when` plus the legacy
//! `conditions` form), and parameter bindings. Ordering and condition edges
//! from a loop head are redirected to the loop's exit sentinel; parameter
//! bindings name the producing task's result and are intentionally left
//! pointing at the loop head itself.

use std::collections::HashSet;

use super::loops::loop_exit_name;
use super::params::referenced_task;
use crate::manifest::PipelineTask;

/// Redirect a predecessor name through the loop-task registry.
fn redirect<'a>(name: &'a str, loop_tasks: &HashSet<String>) -> std::borrow::Cow<'a, str> {
    if loop_tasks.contains(name) {
        loop_exit_name(name).into()
    } else {
        name.into()
    }
}

/// Compute all predecessor names for one task. Duplicates across channels
/// are tolerated; edge insertion is idempotent.
pub(super) fn resolve_predecessors(
    task: &PipelineTask,
    loop_tasks: &HashSet<String>,
) -> Vec<String> {
    let mut predecessors = Vec::new();

    // Explicit ordering
    for dep in &task.run_after {
        predecessors.push(redirect(dep, loop_tasks).into_owned());
    }

    // Structured conditions
    for condition in &task.when {
        let Some(input) = condition.input.as_deref() else {
            continue;
        };
        if let Some(parent) = referenced_task(input) {
            predecessors.push(redirect(parent, loop_tasks).into_owned());
        }
    }

    // Legacy conditions; non-string values contribute no edge
    for condition in &task.conditions {
        for param in &condition.params {
            let Some(value) = param.value.as_str() else {
                continue;
            };
            if let Some(parent) = referenced_task(value) {
                predecessors.push(redirect(parent, loop_tasks).into_owned());
            }
        }
    }

    // Parameter bindings: no sentinel redirection on this channel
    for param in &task.params {
        for value in param.value.as_list() {
            if let Some(parent) = referenced_task(value) {
                predecessors.push(parent.to_string());
            }
        }
    }

    predecessors
}
