// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! IO helpers for settings documents with std::io::Error mapping.

use serde_json::Value;
use std::path::Path;

/// Map an error to std::io::Error with InvalidData kind.
pub fn to_io_error<E: std::error::Error + Send + Sync + 'static>(e: E) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidData, e)
}

/// Parse content as JSON5, falling back to strict JSON on parse failure.
///
/// JSON5 supports comments and trailing commas, which hand-edited settings
/// files often contain.
pub fn parse_json5_or_json<T: serde::de::DeserializeOwned>(
    content: &str,
) -> Result<T, serde_json::Error> {
    json5::from_str(content).or_else(|_| serde_json::from_str(content))
}

/// Parse a settings document from a JSON/JSON5 string.
pub fn parse_document(content: &str) -> std::io::Result<Value> {
    parse_json5_or_json(content).map_err(to_io_error)
}

/// Load a settings document from a file.
pub async fn load_document(path: &Path) -> std::io::Result<Value> {
    let content = tokio::fs::read_to_string(path).await?;
    parse_document(&content)
}

/// Write a settings document as pretty JSON with a trailing newline.
pub async fn save_document(path: &Path, doc: &Value) -> std::io::Result<()> {
    ensure_parent_exists(path).await?;
    let mut json = serde_json::to_string_pretty(doc).map_err(to_io_error)?;
    json.push('\n');
    tokio::fs::write(path, json).await
}

/// Ensure a file's parent directory exists, creating it and ancestors if needed.
pub async fn ensure_parent_exists(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !tokio::fs::try_exists(parent).await? {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "io_tests.rs"]
mod tests;
