// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by permlint are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.

use std::path::{Path, PathBuf};

pub const CLAUDE_CONFIG_DIR: &str = "CLAUDE_CONFIG_DIR";
pub const HOME: &str = "HOME";

/// `CLAUDE_CONFIG_DIR` — Standard Claude Code config directory.
pub fn claude_config_dir() -> Option<PathBuf> {
    std::env::var(CLAUDE_CONFIG_DIR).ok().map(PathBuf::from)
}

/// `HOME` — User's home directory.
pub fn home() -> Option<PathBuf> {
    std::env::var(HOME).ok().map(PathBuf::from)
}

/// The user config directory: `CLAUDE_CONFIG_DIR`, else `$HOME/.claude`.
pub fn config_dir() -> Option<PathBuf> {
    resolve_config_dir(claude_config_dir(), home().as_deref())
}

fn resolve_config_dir(explicit: Option<PathBuf>, home: Option<&Path>) -> Option<PathBuf> {
    explicit
        .filter(|p| !p.as_os_str().is_empty())
        .or_else(|| home.map(|h| h.join(".claude")))
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
