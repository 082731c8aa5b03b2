// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Permission pattern grammar.
//!
//! Accepted forms, tried in order:
//! - `"Bash(npm run *)"` - call form, `ToolName(argument)`
//! - `"Bash:*"`, `"Task:explore"` - subcommand form, `ToolName:subcommand`
//! - `"Read"`, `"mcp__server__tool"` - bare tool name
//!
//! A call-form argument ending in `:*` (e.g. `"Bash(git diff:*)"`) is the
//! deprecated prefix syntax and is rejected; see [`super::migrate`] for the
//! rewrite. `MCP(server:*)` is exempt because `server:*` is MCP addressing.

use regex::Regex;
use serde::{Serialize, Serializer};
use std::sync::LazyLock;
use thiserror::Error;

/// Maximum pattern length in characters.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// The only tool whose call-form argument may end in `:*`.
pub const MCP_TOOL: &str = "MCP";

/// Deprecated argument suffix inside `Tool(...)`.
pub const COLON_STAR: &str = ":*";

static CALL_REGEX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?s)^([A-Za-z_][A-Za-z0-9_]*)\((.+)\)$").ok());

static SUBCOMMAND_REGEX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*):(\*|[A-Za-z0-9_-]+)$").ok());

static TOOL_NAME_REGEX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").ok());

/// Why a pattern was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("Pattern must not be empty")]
    Empty,

    #[error("Pattern must not contain newline characters")]
    Newline,

    #[error("Pattern exceeds maximum length of {} characters", MAX_PATTERN_LENGTH)]
    TooLong,

    #[error(
        "The :* pattern inside Tool(...) is deprecated. \
         Use space-wildcard instead: e.g., Bash(command *) not Bash(command:*)"
    )]
    DeprecatedColonStar,

    #[error("Invalid pattern format: {0}")]
    InvalidFormat(String),

    /// Only produced when scanning documents.
    #[error("Pattern is not a string")]
    NotAString,
}

impl Serialize for PatternError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A successfully parsed pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternForm<'a> {
    /// `Tool(argument)`
    Call { tool: &'a str, argument: &'a str },
    /// `Tool:*` or `Tool:subcommand`
    Subcommand {
        tool: &'a str,
        subcommand: &'a str,
    },
    /// `Tool`
    Bare { tool: &'a str },
}

impl<'a> PatternForm<'a> {
    /// The tool name the pattern applies to.
    pub fn tool(&self) -> &'a str {
        match *self {
            Self::Call { tool, .. } | Self::Subcommand { tool, .. } | Self::Bare { tool } => tool,
        }
    }

    /// The call-form argument, if any.
    pub fn argument(&self) -> Option<&'a str> {
        match *self {
            Self::Call { argument, .. } => Some(argument),
            Self::Subcommand { .. } | Self::Bare { .. } => None,
        }
    }
}

/// Result of validating a single pattern.
///
/// Serializes as `{"valid": bool, "error": string | null}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    valid: bool,
    error: Option<PatternError>,
}

impl ValidationOutcome {
    pub fn valid() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn invalid(error: PatternError) -> Self {
        Self {
            valid: false,
            error: Some(error),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn error(&self) -> Option<&PatternError> {
        self.error.as_ref()
    }

    pub fn into_error(self) -> Option<PatternError> {
        self.error
    }
}

impl From<Result<PatternForm<'_>, PatternError>> for ValidationOutcome {
    fn from(result: Result<PatternForm<'_>, PatternError>) -> Self {
        match result {
            Ok(_) => Self::valid(),
            Err(e) => Self::invalid(e),
        }
    }
}

/// Validate a pattern against the current grammar.
pub fn validate(pattern: &str) -> ValidationOutcome {
    parse(pattern).into()
}

/// Parse a pattern into one of the accepted forms.
pub fn parse(pattern: &str) -> Result<PatternForm<'_>, PatternError> {
    if pattern.trim().is_empty() {
        return Err(PatternError::Empty);
    }
    check_line(pattern)?;

    if let Some((tool, argument)) = split_call(pattern) {
        if is_deprecated_argument(tool, argument) {
            return Err(PatternError::DeprecatedColonStar);
        }
        return Ok(PatternForm::Call { tool, argument });
    }

    if let Some((tool, subcommand)) = split_subcommand(pattern) {
        return Ok(PatternForm::Subcommand { tool, subcommand });
    }

    if is_tool_name(pattern) {
        return Ok(PatternForm::Bare { tool: pattern });
    }

    Err(PatternError::InvalidFormat(pattern.to_string()))
}

/// Reject multi-line and over-long patterns.
pub(crate) fn check_line(pattern: &str) -> Result<(), PatternError> {
    if pattern.contains(['\n', '\r']) {
        return Err(PatternError::Newline);
    }
    if pattern.chars().count() > MAX_PATTERN_LENGTH {
        return Err(PatternError::TooLong);
    }
    Ok(())
}

/// Split `Tool(argument)` into its tool name and argument.
pub(crate) fn split_call(pattern: &str) -> Option<(&str, &str)> {
    let caps = CALL_REGEX.as_ref()?.captures(pattern)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

/// Whether a call-form argument uses the deprecated `:*` suffix.
pub(crate) fn is_deprecated_argument(tool: &str, argument: &str) -> bool {
    tool != MCP_TOOL && argument.ends_with(COLON_STAR)
}

fn split_subcommand(pattern: &str) -> Option<(&str, &str)> {
    let caps = SUBCOMMAND_REGEX.as_ref()?.captures(pattern)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

/// Whether `name` is a bare tool identifier.
pub fn is_tool_name(name: &str) -> bool {
    TOOL_NAME_REGEX
        .as_ref()
        .is_some_and(|re| re.is_match(name))
}

#[cfg(test)]
#[path = "grammar_tests.rs"]
mod tests;
