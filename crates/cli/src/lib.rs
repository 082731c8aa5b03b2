// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Permission Rule Linter
//!
//! Validates the permission rule patterns found in Claude settings files
//! (`permissions.allow`, `permissions.ask`, `permissions.deny`), rewrites the
//! deprecated `Tool(arg:*)` syntax into `Tool(arg *)`, and repairs whole
//! documents in one pass.
//!
//! The [`permission`] module is the pure engine; the remaining modules back
//! the `permlint` binary.

pub mod cli;
pub mod env;
pub mod output;
mod output_diagnostic;
pub mod permission;
pub mod runner;
pub mod settings;
