// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Settings scopes that hold permission rules.

use std::str::FromStr;

/// Available settings sources.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SettingSource {
    /// User settings (~/.claude/settings.json)
    User,
    /// User local overrides (~/.claude/settings.local.json)
    UserLocal,
    /// Project settings (.claude/settings.json)
    Project,
    /// Project local overrides (.claude/settings.local.json)
    Local,
}

impl SettingSource {
    /// Return all sources in precedence order (lowest to highest).
    pub fn all() -> &'static [SettingSource] {
        &[Self::User, Self::UserLocal, Self::Project, Self::Local]
    }

    /// Whether the source lives under the user config directory.
    pub fn is_user_scope(self) -> bool {
        matches!(self, Self::User | Self::UserLocal)
    }

    /// File name of the source's settings file.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::User | Self::Project => "settings.json",
            Self::UserLocal | Self::Local => "settings.local.json",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::UserLocal => "user-local",
            Self::Project => "project",
            Self::Local => "local",
        }
    }
}

impl std::fmt::Display for SettingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SettingSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" | "global" => Ok(Self::User),
            "user-local" | "user_local" => Ok(Self::UserLocal),
            "project" => Ok(Self::Project),
            "local" => Ok(Self::Local),
            _ => Err(format!("unknown setting source: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
