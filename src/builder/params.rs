// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 pipegraph contributors

//! Parameter-reference parsing
//!
//! Recognizes `$(tasks.<name>. ...)` tokens embedded in manifest string
//! values and extracts the referenced task name.

const REFERENCE_PREFIX: &str = "$(tasks.";
const REFERENCE_SUFFIX: char = ')';

/// Extract the task name from a parameter reference.
///
/// Returns `None` for anything that is not a well-formed reference,
/// including truncated forms like `$(tasks.b)` that carry no field after
/// the task name. Absence of a match is a normal, silent outcome.
pub fn referenced_task(value: &str) -> Option<&str> {
    if !value.starts_with(REFERENCE_PREFIX) || !value.ends_with(REFERENCE_SUFFIX) {
        return None;
    }

    // "$(tasks.b.results.x)" splits to ["$(tasks", "b", "results", "x)"];
    // the task name is the token after "tasks". Fewer than three tokens
    // means the name would swallow the closing parenthesis.
    let mut parts = value.split('.');
    let _prefix = parts.next()?;
    let name = parts.next()?;
    parts.next()?;

    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_reference() {
        assert_eq!(referenced_task("$(tasks.build.results.digest)"), Some("build"));
    }

    #[test]
    fn test_status_reference() {
        assert_eq!(referenced_task("$(tasks.build.status)"), Some("build"));
    }

    #[test]
    fn test_missing_prefix() {
        assert_eq!(referenced_task("tasks.build.status)"), None);
        assert_eq!(referenced_task("$(params.build.status)"), None);
    }

    #[test]
    fn test_missing_suffix() {
        assert_eq!(referenced_task("$(tasks.build.status"), None);
    }

    #[test]
    fn test_truncated_reference_is_malformed() {
        assert_eq!(referenced_task("$(tasks.build)"), None);
    }

    #[test]
    fn test_plain_string() {
        assert_eq!(referenced_task("just a value"), None);
        assert_eq!(referenced_task(""), None);
    }
}
