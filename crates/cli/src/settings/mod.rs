// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Settings document loading, saving, and scope resolution.

pub mod io;
pub mod loader;
pub mod source;

pub use io::{load_document, parse_document, save_document};
pub use loader::{SettingsPaths, SettingsTarget};
pub use source::SettingSource;
