// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Accessor naming conventions.
//!
//! | Convention | `x` | `member_name` | `memberName` |
//! |------------|-----|---------------|--------------|
//! | [`CamelCase`] (default) | `getX` / `setX` | `getMember_name` / `setMember_name` | `getMemberName` / `setMemberName` |
//! | [`Underscore`] | `get_x` / `set_x` | `get_member_name` / `set_member_name` | `get_memberName` / `set_memberName` |
//!
//! Both conventions keep the member name as written apart from the first
//! character, so distinct members never map to the same accessor.

/// Maps a member name to its getter and setter names.
pub trait NamingConvention: Send + Sync {
    /// Getter name for a member.
    fn getter_name(&self, member: &str) -> String;

    /// Setter name for a member.
    fn setter_name(&self, member: &str) -> String;

    /// Convention name for diagnostics.
    fn name(&self) -> &str {
        "custom"
    }
}

/// `prefix` followed by `member` with its first character upper-cased.
fn capitalized(prefix: &str, member: &str) -> String {
    let mut chars = member.chars();
    let mut name = String::with_capacity(prefix.len() + member.len());
    name.push_str(prefix);
    if let Some(first) = chars.next() {
        name.extend(first.to_uppercase());
        name.push_str(chars.as_str());
    }
    name
}

/// `getX` / `setX` convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CamelCase;

impl NamingConvention for CamelCase {
    fn getter_name(&self, member: &str) -> String {
        capitalized("get", member)
    }

    fn setter_name(&self, member: &str) -> String {
        capitalized("set", member)
    }

    fn name(&self) -> &str {
        "camel_case"
    }
}

/// `get_x` / `set_x` convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Underscore;

impl NamingConvention for Underscore {
    fn getter_name(&self, member: &str) -> String {
        format!("get_{member}")
    }

    fn setter_name(&self, member: &str) -> String {
        format!("set_{member}")
    }

    fn name(&self) -> &str {
        "underscore"
    }
}
