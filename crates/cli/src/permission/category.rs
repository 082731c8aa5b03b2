// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rule categories of the `permissions` settings object.

use serde::{Deserialize, Serialize};

/// How a matched tool call is treated.
///
/// Maps to the `permissions.allow`, `permissions.ask` and `permissions.deny`
/// arrays in settings.json.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleCategory {
    /// Auto-approve matching tool calls
    Allow,
    /// Prompt before running matching tool calls
    Ask,
    /// Always reject matching tool calls
    Deny,
}

impl RuleCategory {
    /// All categories in document traversal order.
    pub const ALL: [RuleCategory; 3] = [Self::Allow, Self::Ask, Self::Deny];

    /// The field name under `permissions`.
    pub fn key(self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::Ask => "ask",
            Self::Deny => "deny",
        }
    }
}

impl std::fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
#[path = "category_tests.rs"]
mod tests;
