// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use yare::parameterized;

#[test]
fn all_is_in_traversal_order() {
    assert_eq!(
        RuleCategory::ALL,
        [RuleCategory::Allow, RuleCategory::Ask, RuleCategory::Deny]
    );
}

#[parameterized(
    allow = { RuleCategory::Allow, "allow" },
    ask = { RuleCategory::Ask, "ask" },
    deny = { RuleCategory::Deny, "deny" },
)]
fn key_and_display_match(category: RuleCategory, expected: &str) {
    assert_eq!(category.key(), expected);
    assert_eq!(category.to_string(), expected);
}

#[test]
fn serializes_lowercase() {
    let json = serde_json::to_string(&RuleCategory::Ask).unwrap();
    assert_eq!(json, "\"ask\"");
    let parsed: RuleCategory = serde_json::from_str("\"deny\"").unwrap();
    assert_eq!(parsed, RuleCategory::Deny);
}
