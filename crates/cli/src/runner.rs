// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Executes a parsed command against patterns or settings documents.

use std::io::Write;
use std::path::PathBuf;

use crate::cli::{Cli, Command, OutputFormat, TargetArgs};
use crate::env;
use crate::output::{
    print_migrated, print_removed, print_skipped, print_warning, DocumentCheck, DocumentFix,
    PatternCheck, ReportWriter,
};
use crate::permission::{find_issues, migrate, sanitize, validate, SanitizeReport};
use crate::settings::{save_document, SettingsPaths, SettingsTarget};

/// How a successful run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunStatus {
    /// Everything checked was valid, or the requested change was made
    Clean,
    /// Invalid patterns or document issues were reported
    Findings,
}

impl RunStatus {
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Clean => 0,
            Self::Findings => 1,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("No settings files found (looked in: {0})")]
    NoTargets(String),

    #[error("Failed to load settings from {target}: {source}")]
    Load {
        target: String,
        source: std::io::Error,
    },

    #[error("Failed to write settings to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl RunError {
    pub fn exit_code(&self) -> u8 {
        2
    }
}

/// Run one CLI invocation, writing results to `out`.
pub async fn run<W: Write>(cli: &Cli, out: W) -> Result<RunStatus, RunError> {
    let mut writer = ReportWriter::new(out, cli.output_format);
    match &cli.command {
        Command::Validate { patterns } => run_validate(patterns, &mut writer),
        Command::Migrate { pattern } => run_migrate(pattern, cli.output_format, &mut writer),
        Command::Check(targets) => run_check(targets, &mut writer).await,
        Command::Fix { targets, write } => run_fix(targets, *write, &mut writer).await,
    }
}

fn run_validate<W: Write>(
    patterns: &[String],
    writer: &mut ReportWriter<W>,
) -> Result<RunStatus, RunError> {
    let checks: Vec<PatternCheck> = patterns
        .iter()
        .map(|pattern| {
            let outcome = validate(pattern);
            let suggestion = if outcome.is_valid() {
                None
            } else {
                migrate(pattern)
            };
            PatternCheck {
                pattern: pattern.clone(),
                outcome,
                suggestion,
            }
        })
        .collect();

    writer.write_patterns(&checks)?;

    if checks.iter().all(|c| c.outcome.is_valid()) {
        Ok(RunStatus::Clean)
    } else {
        Ok(RunStatus::Findings)
    }
}

fn run_migrate<W: Write>(
    pattern: &str,
    format: OutputFormat,
    writer: &mut ReportWriter<W>,
) -> Result<RunStatus, RunError> {
    let migrated = migrate(pattern);
    writer.write_migration(pattern, migrated.as_deref())?;

    if migrated.is_some() {
        return Ok(RunStatus::Clean);
    }
    if format == OutputFormat::Text {
        match validate(pattern).into_error() {
            None => print_warning(format_args!("{} is already valid", pattern)),
            Some(error) => print_warning(format_args!("No rewrite for {}: {}", pattern, error)),
        }
    }
    Ok(RunStatus::Findings)
}

async fn run_check<W: Write>(
    targets: &TargetArgs,
    writer: &mut ReportWriter<W>,
) -> Result<RunStatus, RunError> {
    let mut documents = Vec::new();
    for (target, doc) in load_targets(targets).await? {
        let issues = find_issues(&doc);
        documents.push(DocumentCheck {
            source: target.to_string(),
            valid: issues.is_empty(),
            issues,
        });
    }

    writer.write_checks(&documents)?;

    if documents.iter().all(|d| d.valid) {
        Ok(RunStatus::Clean)
    } else {
        Ok(RunStatus::Findings)
    }
}

async fn run_fix<W: Write>(
    targets: &TargetArgs,
    write: bool,
    writer: &mut ReportWriter<W>,
) -> Result<RunStatus, RunError> {
    let mut documents = Vec::new();
    for (target, doc) in load_targets(targets).await? {
        let report = sanitize(&doc);
        let changed = report.has_changes();
        if write && changed && target.path().is_some() {
            log_changes(&target, &report);
        }

        let SanitizeReport {
            migrated,
            removed,
            settings,
        } = report;

        let (written, settings) = match target.path() {
            Some(path) if write && changed => {
                save_document(path, &settings)
                    .await
                    .map_err(|source| RunError::Write {
                        path: path.to_path_buf(),
                        source,
                    })?;
                (true, None)
            }
            Some(_) => (false, None),
            None => (false, Some(settings)),
        };

        documents.push(DocumentFix {
            source: target.to_string(),
            migrated,
            removed,
            written,
            settings,
        });
    }

    writer.write_fixes(&documents)?;
    Ok(RunStatus::Clean)
}

/// Resolve and load the documents a command operates on.
///
/// Explicit `--settings` targets must load. Discovered files that fail to
/// load are skipped with a warning.
async fn load_targets(
    args: &TargetArgs,
) -> Result<Vec<(SettingsTarget, serde_json::Value)>, RunError> {
    let mut loaded = Vec::new();

    if !args.settings.is_empty() {
        for input in &args.settings {
            let target = SettingsTarget::from_input(input);
            let doc = target.load().await.map_err(|source| RunError::Load {
                target: target.to_string(),
                source,
            })?;
            loaded.push((target, doc));
        }
        return Ok(loaded);
    }

    let paths = resolve_paths(args);
    for target in paths.existing().await {
        match target.load().await {
            Ok(doc) => loaded.push((target, doc)),
            Err(e) => print_skipped(&target, e),
        }
    }

    if loaded.is_empty() {
        let searched = paths
            .entries()
            .iter()
            .map(|(_, path)| path.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        return Err(RunError::NoTargets(searched));
    }
    Ok(loaded)
}

fn resolve_paths(args: &TargetArgs) -> SettingsPaths {
    let config_dir = args.config_dir.clone().or_else(env::config_dir);
    let project_dir = args
        .project_dir
        .clone()
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));
    SettingsPaths::resolve(config_dir.as_deref(), &project_dir, &args.setting_sources)
}

fn log_changes(target: &SettingsTarget, report: &SanitizeReport) {
    for change in &report.migrated {
        print_migrated(target, change);
    }
    for removal in &report.removed {
        print_removed(target, removal);
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
