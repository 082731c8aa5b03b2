// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Stderr diagnostics for commands and for changes made by `fix --write`.
//!
//! Output is colored only when stderr is a terminal.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

use crate::permission::{MigratedPattern, RemovedPattern};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Level {
    Error,
    Warning,
}

impl Level {
    fn label(self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
        }
    }

    fn ansi(self) -> &'static str {
        match self {
            Self::Error => "\x1b[31m",
            Self::Warning => "\x1b[33m",
        }
    }
}

fn write_diagnostic<W: Write>(writer: &mut W, level: Level, msg: impl Display, is_terminal: bool) {
    let _ = if is_terminal {
        writeln!(writer, "{}{}: {}\x1b[0m", level.ansi(), level.label(), msg)
    } else {
        writeln!(writer, "{}: {}", level.label(), msg)
    };
}

fn emit(level: Level, msg: impl Display) {
    let is_tty = io::stderr().is_terminal();
    write_diagnostic(&mut io::stderr(), level, msg, is_tty);
}

/// Print an error message to stderr.
pub fn print_error(msg: impl Display) {
    emit(Level::Error, msg);
}

/// Print a warning message to stderr.
pub fn print_warning(msg: impl Display) {
    emit(Level::Warning, msg);
}

fn write_migrated<W: Write>(
    writer: &mut W,
    target: impl Display,
    change: &MigratedPattern,
    is_terminal: bool,
) {
    write_diagnostic(
        writer,
        Level::Warning,
        format_args!(
            "Migrated permission pattern in {}: {} -> {}",
            target, change.original, change.migrated
        ),
        is_terminal,
    );
}

fn write_removed<W: Write>(
    writer: &mut W,
    target: impl Display,
    removal: &RemovedPattern,
    is_terminal: bool,
) {
    write_diagnostic(
        writer,
        Level::Warning,
        format_args!(
            "Removed invalid permission pattern from {} in {}: {} ({})",
            removal.category, target, removal.pattern, removal.reason
        ),
        is_terminal,
    );
}

fn write_skipped<W: Write>(
    writer: &mut W,
    target: impl Display,
    error: impl Display,
    is_terminal: bool,
) {
    write_diagnostic(
        writer,
        Level::Warning,
        format_args!("Skipping settings {}: {}", target, error),
        is_terminal,
    );
}

/// Report a deprecated pattern rewritten in a saved settings file.
pub fn print_migrated(target: impl Display, change: &MigratedPattern) {
    let is_tty = io::stderr().is_terminal();
    write_migrated(&mut io::stderr(), target, change, is_tty);
}

/// Report an invalid pattern dropped from a saved settings file.
pub fn print_removed(target: impl Display, removal: &RemovedPattern) {
    let is_tty = io::stderr().is_terminal();
    write_removed(&mut io::stderr(), target, removal, is_tty);
}

/// Report a discovered settings file that could not be loaded.
pub fn print_skipped(target: impl Display, error: impl Display) {
    let is_tty = io::stderr().is_terminal();
    write_skipped(&mut io::stderr(), target, error, is_tty);
}

#[cfg(test)]
#[path = "output_diagnostic_tests.rs"]
mod tests;
