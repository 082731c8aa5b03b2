// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scanning and repairing the `permissions` rule lists of a settings document.
//!
//! Matches the structure of `permissions` in settings.json:
//! ```json
//! {
//!   "permissions": {
//!     "allow": ["Bash(npm test)", "Read"],
//!     "ask": ["Bash(git push *)"],
//!     "deny": ["Bash(rm *)"]
//!   }
//! }
//! ```
//!
//! Document shape is tolerated, never rejected: a missing or non-object
//! `permissions`, or a missing or non-array category, reads as an empty list.

use super::category::RuleCategory;
use super::grammar::{validate, PatternError};
use super::migrate::migrate;
use serde::Serialize;
use serde_json::{Map, Value};

/// Key of the permissions object in a settings document.
pub const PERMISSIONS_KEY: &str = "permissions";

/// An invalid entry found while scanning a document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PatternIssue {
    /// The pattern text, or the JSON text of a non-string entry
    pub pattern: String,
    pub category: RuleCategory,
    pub error: PatternError,
    /// A valid rewrite, when one exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// A pattern rewritten during a fix.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MigratedPattern {
    pub original: String,
    pub migrated: String,
    pub category: RuleCategory,
}

/// An entry dropped during a fix.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RemovedPattern {
    pub pattern: String,
    pub category: RuleCategory,
    pub reason: PatternError,
}

/// Outcome of a fix pass.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SanitizeReport {
    pub migrated: Vec<MigratedPattern>,
    pub removed: Vec<RemovedPattern>,
    /// The repaired document
    pub settings: Value,
}

impl SanitizeReport {
    /// Whether the pass rewrote or dropped anything.
    pub fn has_changes(&self) -> bool {
        !self.migrated.is_empty() || !self.removed.is_empty()
    }
}

/// Normalized, borrowed view of a document's three rule lists.
#[derive(Clone, Copy, Debug, Default)]
pub struct RuleLists<'a> {
    allow: &'a [Value],
    ask: &'a [Value],
    deny: &'a [Value],
}

impl<'a> RuleLists<'a> {
    /// Read the rule lists of `doc`, treating malformed shapes as empty.
    pub fn from_document(doc: &'a Value) -> Self {
        let Some(permissions) = doc.get(PERMISSIONS_KEY).and_then(Value::as_object) else {
            return Self::default();
        };
        let list = |category: RuleCategory| {
            permissions
                .get(category.key())
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or_default()
        };
        Self {
            allow: list(RuleCategory::Allow),
            ask: list(RuleCategory::Ask),
            deny: list(RuleCategory::Deny),
        }
    }

    /// Entries of one category, in document order.
    pub fn get(&self, category: RuleCategory) -> &'a [Value] {
        match category {
            RuleCategory::Allow => self.allow,
            RuleCategory::Ask => self.ask,
            RuleCategory::Deny => self.deny,
        }
    }

    /// All entries tagged with their category, in traversal order.
    pub fn iter(&self) -> impl Iterator<Item = (RuleCategory, &'a Value)> + '_ {
        RuleCategory::ALL
            .into_iter()
            .flat_map(move |category| self.get(category).iter().map(move |v| (category, v)))
    }

    pub fn is_empty(&self) -> bool {
        self.allow.is_empty() && self.ask.is_empty() && self.deny.is_empty()
    }
}

/// Collect every invalid entry of a document, in category then array order.
pub fn find_issues(doc: &Value) -> Vec<PatternIssue> {
    RuleLists::from_document(doc)
        .iter()
        .filter_map(|(category, entry)| entry_issue(category, entry))
        .collect()
}

/// Whether a document has no pattern issues.
pub fn is_valid_document(doc: &Value) -> bool {
    find_issues(doc).is_empty()
}

/// Repair a document: keep valid patterns, migrate deprecated ones, drop the rest.
///
/// The result always carries `permissions.allow`, `permissions.ask` and
/// `permissions.deny` as arrays. Applying it twice yields the same document.
pub fn apply_fixes(doc: &Value) -> Value {
    sanitize(doc).settings
}

/// Repair a document like [`apply_fixes`], recording what changed.
pub fn sanitize(doc: &Value) -> SanitizeReport {
    let lists = RuleLists::from_document(doc);
    let mut migrated = Vec::new();
    let mut removed = Vec::new();

    let mut settings = match doc {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    };
    let mut permissions = match settings.get(PERMISSIONS_KEY) {
        Some(Value::Object(map)) => map.clone(),
        _ => Map::new(),
    };

    for category in RuleCategory::ALL {
        let mut kept = Vec::new();
        for entry in lists.get(category) {
            let Some(pattern) = entry.as_str() else {
                removed.push(RemovedPattern {
                    pattern: entry.to_string(),
                    category,
                    reason: PatternError::NotAString,
                });
                continue;
            };

            let Some(error) = validate(pattern).into_error() else {
                kept.push(Value::String(pattern.to_string()));
                continue;
            };

            match migrate(pattern).filter(|m| validate(m).is_valid()) {
                Some(rewritten) => {
                    kept.push(Value::String(rewritten.clone()));
                    migrated.push(MigratedPattern {
                        original: pattern.to_string(),
                        migrated: rewritten,
                        category,
                    });
                }
                None => removed.push(RemovedPattern {
                    pattern: pattern.to_string(),
                    category,
                    reason: error,
                }),
            }
        }
        permissions.insert(category.key().to_string(), Value::Array(kept));
    }

    settings.insert(PERMISSIONS_KEY.to_string(), Value::Object(permissions));

    SanitizeReport {
        migrated,
        removed,
        settings: Value::Object(settings),
    }
}

fn entry_issue(category: RuleCategory, entry: &Value) -> Option<PatternIssue> {
    let Some(pattern) = entry.as_str() else {
        return Some(PatternIssue {
            pattern: entry.to_string(),
            category,
            error: PatternError::NotAString,
            suggestion: None,
        });
    };

    let error = validate(pattern).into_error()?;
    Some(PatternIssue {
        pattern: pattern.to_string(),
        category,
        error,
        suggestion: migrate(pattern),
    })
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
