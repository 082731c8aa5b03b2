// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text and JSON rendering of validation results.

use crate::cli::OutputFormat;
use crate::permission::{MigratedPattern, PatternIssue, RemovedPattern, ValidationOutcome};
use serde::Serialize;
use serde_json::Value;
use std::io::Write;

pub use crate::output_diagnostic::{
    print_error, print_migrated, print_removed, print_skipped, print_warning,
};

/// Validation result for one command-line pattern.
#[derive(Clone, Debug, Serialize)]
pub struct PatternCheck {
    pub pattern: String,
    #[serde(flatten)]
    pub outcome: ValidationOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// Scan result for one settings document.
#[derive(Clone, Debug, Serialize)]
pub struct DocumentCheck {
    pub source: String,
    pub valid: bool,
    pub issues: Vec<PatternIssue>,
}

/// Fix result for one settings document.
#[derive(Clone, Debug, Serialize)]
pub struct DocumentFix {
    pub source: String,
    pub migrated: Vec<MigratedPattern>,
    pub removed: Vec<RemovedPattern>,
    pub written: bool,
    /// The repaired document, included for targets without a file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,
}

#[derive(Serialize)]
struct CheckSummary<'a> {
    valid: bool,
    documents: &'a [DocumentCheck],
}

#[derive(Serialize)]
struct MigrationResult<'a> {
    pattern: &'a str,
    migrated: Option<&'a str>,
}

/// Writes command results in the selected format.
pub struct ReportWriter<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn write_patterns(&mut self, checks: &[PatternCheck]) -> std::io::Result<()> {
        if self.format == OutputFormat::Json {
            return self.write_json(&checks);
        }
        for check in checks {
            match check.outcome.error() {
                None => writeln!(self.writer, "ok       {}", check.pattern)?,
                Some(error) => {
                    writeln!(self.writer, "invalid  {}", check.pattern)?;
                    writeln!(self.writer, "  error: {}", error)?;
                    if let Some(suggestion) = &check.suggestion {
                        writeln!(self.writer, "  suggestion: {}", suggestion)?;
                    }
                }
            }
        }
        Ok(())
    }

    pub fn write_migration(&mut self, pattern: &str, migrated: Option<&str>) -> std::io::Result<()> {
        match self.format {
            OutputFormat::Json => self.write_json(&MigrationResult { pattern, migrated }),
            OutputFormat::Text => match migrated {
                Some(m) => writeln!(self.writer, "{}", m),
                None => Ok(()),
            },
        }
    }

    pub fn write_checks(&mut self, documents: &[DocumentCheck]) -> std::io::Result<()> {
        if self.format == OutputFormat::Json {
            let valid = documents.iter().all(|d| d.valid);
            return self.write_json(&CheckSummary { valid, documents });
        }
        for doc in documents {
            if doc.issues.is_empty() {
                writeln!(self.writer, "{}: ok", doc.source)?;
                continue;
            }
            writeln!(self.writer, "{}: {} issue(s)", doc.source, doc.issues.len())?;
            for issue in &doc.issues {
                writeln!(self.writer, "  {}: {}", issue.category, issue.pattern)?;
                writeln!(self.writer, "    error: {}", issue.error)?;
                if let Some(suggestion) = &issue.suggestion {
                    writeln!(self.writer, "    suggestion: {}", suggestion)?;
                }
            }
        }
        Ok(())
    }

    pub fn write_fixes(&mut self, documents: &[DocumentFix]) -> std::io::Result<()> {
        if self.format == OutputFormat::Json {
            return self.write_json(&documents);
        }
        for doc in documents {
            let changed = !doc.migrated.is_empty() || !doc.removed.is_empty();
            let status = if doc.written {
                " (written)"
            } else if changed && doc.settings.is_none() {
                " (dry run, pass --write to save)"
            } else {
                ""
            };
            writeln!(
                self.writer,
                "{}: {} migrated, {} removed{}",
                doc.source,
                doc.migrated.len(),
                doc.removed.len(),
                status
            )?;
            for m in &doc.migrated {
                writeln!(self.writer, "  {}: {} -> {}", m.category, m.original, m.migrated)?;
            }
            for r in &doc.removed {
                writeln!(self.writer, "  {}: removed {} ({})", r.category, r.pattern, r.reason)?;
            }
            if let Some(settings) = &doc.settings {
                let json = serde_json::to_string_pretty(settings)
                    .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
                writeln!(self.writer, "{}", json)?;
            }
        }
        Ok(())
    }

    fn write_json<T: Serialize + ?Sized>(&mut self, value: &T) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        writeln!(self.writer, "{}", json)
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
