// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn explicit_config_dir_wins() {
    let dir = resolve_config_dir(Some(PathBuf::from("/cfg")), Some(Path::new("/home/u")));
    assert_eq!(dir, Some(PathBuf::from("/cfg")));
}

#[test]
fn falls_back_to_home_dot_claude() {
    let dir = resolve_config_dir(None, Some(Path::new("/home/u")));
    assert_eq!(dir, Some(PathBuf::from("/home/u/.claude")));
}

#[test]
fn empty_explicit_is_ignored() {
    let dir = resolve_config_dir(Some(PathBuf::new()), Some(Path::new("/home/u")));
    assert_eq!(dir, Some(PathBuf::from("/home/u/.claude")));
}

#[test]
fn none_without_home() {
    assert_eq!(resolve_config_dir(None, None), None);
}
