// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

use crate::settings::SettingSource;

/// Validate and migrate permission rule patterns in Claude settings files
#[derive(Parser, Debug, Clone)]
#[command(name = "permlint", version, about)]
pub struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub output_format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Validate one or more patterns
    Validate {
        /// Patterns to validate (e.g. "Bash(npm run *)")
        #[arg(value_name = "PATTERN", required = true)]
        patterns: Vec<String>,
    },

    /// Rewrite a deprecated pattern into the current syntax
    Migrate {
        #[arg(value_name = "PATTERN")]
        pattern: String,
    },

    /// Report invalid patterns in settings documents
    Check(TargetArgs),

    /// Migrate deprecated patterns and drop invalid ones
    Fix {
        #[command(flatten)]
        targets: TargetArgs,

        /// Write repaired documents back to their files
        #[arg(long)]
        write: bool,
    },
}

/// Which settings documents to operate on.
#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Settings file path or inline JSON (can be specified multiple times)
    #[arg(long = "settings", value_name = "FILE_OR_JSON")]
    pub settings: Vec<String>,

    /// Comma-separated settings scopes to discover when --settings is not given
    /// (user, user-local, project, local)
    #[arg(
        long = "setting-sources",
        value_name = "SOURCES",
        value_parser = SettingSource::from_str,
        value_delimiter = ','
    )]
    pub setting_sources: Vec<SettingSource>,

    /// Project root for project and local scopes (default: current directory)
    #[arg(long, value_name = "DIR")]
    pub project_dir: Option<PathBuf>,

    /// User config directory (default: $CLAUDE_CONFIG_DIR or ~/.claude)
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

/// Output format options
#[derive(Clone, Copy, Debug, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
