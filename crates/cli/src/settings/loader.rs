// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Settings file discovery across scopes.
//!
//! Resolves the settings files that may carry permission rules:
//! 1. User (~/.claude/settings.json)
//! 2. User local (~/.claude/settings.local.json)
//! 3. Project (.claude/settings.json)
//! 4. Local (.claude/settings.local.json)

use super::io::{load_document, parse_document};
use super::source::SettingSource;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Resolved settings file locations, in precedence order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsPaths {
    entries: Vec<(SettingSource, PathBuf)>,
}

impl SettingsPaths {
    /// Resolve settings paths for the given sources.
    ///
    /// # Arguments
    /// * `config_dir` - The ~/.claude equivalent. User scopes are skipped when `None`.
    /// * `project_dir` - The project working directory
    /// * `sources` - Sources to include. Empty means all sources.
    pub fn resolve(
        config_dir: Option<&Path>,
        project_dir: &Path,
        sources: &[SettingSource],
    ) -> Self {
        let sources = if sources.is_empty() {
            SettingSource::all()
        } else {
            sources
        };

        let entries = SettingSource::all()
            .iter()
            .filter(|source| sources.contains(source))
            .filter_map(|&source| {
                let dir = if source.is_user_scope() {
                    config_dir?.to_path_buf()
                } else {
                    project_dir.join(".claude")
                };
                Some((source, dir.join(source.file_name())))
            })
            .collect();

        Self { entries }
    }

    /// All resolved paths, whether or not they exist.
    pub fn entries(&self) -> &[(SettingSource, PathBuf)] {
        &self.entries
    }

    /// Targets for the paths that exist on disk. Missing files are skipped.
    pub async fn existing(&self) -> Vec<SettingsTarget> {
        let mut targets = Vec::new();
        for (source, path) in &self.entries {
            if tokio::fs::try_exists(path).await.unwrap_or(false) {
                targets.push(SettingsTarget::File {
                    path: path.clone(),
                    source: Some(*source),
                });
            }
        }
        targets
    }
}

/// A settings document to scan or fix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SettingsTarget {
    /// A settings file, optionally tagged with the scope it was found in
    File {
        path: PathBuf,
        source: Option<SettingSource>,
    },
    /// Inline JSON passed on the command line
    Inline(String),
}

impl SettingsTarget {
    /// Interpret a `--settings` argument.
    ///
    /// Determines whether input is a file path or inline JSON based on content:
    /// - Starts with `{` -> inline JSON
    /// - Otherwise -> file path
    pub fn from_input(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.starts_with('{') {
            Self::Inline(trimmed.to_string())
        } else {
            Self::File {
                path: PathBuf::from(input),
                source: None,
            }
        }
    }

    /// The file path, if this target is a file.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File { path, .. } => Some(path),
            Self::Inline(_) => None,
        }
    }

    /// Load the target's document.
    pub async fn load(&self) -> std::io::Result<Value> {
        match self {
            Self::File { path, .. } => load_document(path).await,
            Self::Inline(json) => parse_document(json),
        }
    }
}

impl std::fmt::Display for SettingsTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File {
                path,
                source: Some(source),
            } => write!(f, "{} ({})", path.display(), source),
            Self::File { path, source: None } => write!(f, "{}", path.display()),
            Self::Inline(_) => write!(f, "<inline>"),
        }
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
