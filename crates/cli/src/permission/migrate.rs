// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rewrites deprecated patterns into the current grammar.
//!
//! The only supported rewrite is the prefix syntax inside a call-form
//! argument: `Bash(git diff:*)` becomes `Bash(git diff *)`. Patterns with no
//! known rewrite yield `None`; intent is never guessed.

use super::grammar::{check_line, is_deprecated_argument, split_call, COLON_STAR};

/// Attempt to rewrite a deprecated pattern.
///
/// Returns `None` for multi-line or over-long patterns and for any shape
/// other than `Tool(arg:*)` with a tool other than `MCP`.
pub fn migrate(pattern: &str) -> Option<String> {
    check_line(pattern).ok()?;

    let (tool, argument) = split_call(pattern)?;
    if !is_deprecated_argument(tool, argument) {
        return None;
    }

    let prefix = argument.strip_suffix(COLON_STAR)?;
    Some(format!("{tool}({prefix} *)"))
}

#[cfg(test)]
#[path = "migrate_tests.rs"]
mod tests;
