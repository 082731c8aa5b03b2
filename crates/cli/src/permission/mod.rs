// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Permission rule pattern validation and migration.
//!
//! This module decides whether patterns in `permissions.allow`, `permissions.ask`
//! and `permissions.deny` are accepted by the current grammar, including:
//!
//! - Single-pattern validation (`validate`, `parse`)
//! - Rewriting the deprecated `Tool(arg:*)` syntax (`migrate`)
//! - Whole-document scanning and repair (`find_issues`, `apply_fixes`, `sanitize`)
//!
//! Everything here is pure: no I/O and no state between calls.

pub mod category;
pub mod document;
pub mod grammar;
pub mod migrate;

pub use category::RuleCategory;
pub use document::{
    apply_fixes, find_issues, is_valid_document, sanitize, MigratedPattern, PatternIssue,
    RemovedPattern, RuleLists, SanitizeReport,
};
pub use grammar::{parse, validate, PatternError, PatternForm, ValidationOutcome};
pub use migrate::migrate;
