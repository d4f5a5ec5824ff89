// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Value contracts attached to synthetic members.
//!
//! The core treats a contract as an opaque pass/fail check. Two
//! implementations ship with the crate:
//!
//! - [`KindContract`] — parsed from descriptors like `"int"` or `"str|None"`
//! - [`FnContract`] — any closure
//!
//! # Descriptor Syntax
//!
//! | Descriptor | Accepts |
//! |------------|---------|
//! | `*` | anything |
//! | `None` | [`Value::None`] |
//! | `bool`, `int`, `float`, `str`, `list` | values of that kind |
//! | `a\|b` | values accepted by `a` or `b` |

use std::{fmt, str::FromStr};

use crate::value::{Value, ValueKind};

/// Pass/fail check applied to values written into a member.
pub trait Contract: Send + Sync {
    /// Check a value.
    ///
    /// # Errors
    ///
    /// A human-readable rejection reason.
    fn check(&self, value: &Value) -> Result<(), String>;

    /// Short description used in diagnostics.
    fn describe(&self) -> String;
}

/// Contract accepting values of the listed kinds.
///
/// # Example
///
/// ```rust
/// use synthetic_core::{Contract, KindContract, Value};
///
/// let contract: KindContract = "int|None".parse().unwrap();
/// assert!(contract.check(&Value::Int(1)).is_ok());
/// assert!(contract.check(&Value::None).is_ok());
/// assert!(contract.check(&Value::from("x")).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindContract {
    kinds: Vec<ValueKind>,
    any:   bool
}

impl KindContract {
    /// Contract accepting every value.
    pub const fn any() -> Self {
        Self {
            kinds: Vec::new(),
            any:   true
        }
    }

    /// Contract accepting exactly the given kinds.
    pub fn of(kinds: impl IntoIterator<Item = ValueKind>) -> Self {
        Self {
            kinds: kinds.into_iter().collect(),
            any:   false
        }
    }

    /// Check if the contract accepts every value.
    pub const fn is_any(&self) -> bool {
        self.any
    }
}

impl FromStr for KindContract {
    type Err = String;

    fn from_str(descriptor: &str) -> Result<Self, Self::Err> {
        if descriptor.trim().is_empty() {
            return Err("empty contract descriptor".to_string());
        }

        let mut contract = Self {
            kinds: Vec::new(),
            any:   false
        };
        for part in descriptor.split('|').map(str::trim) {
            let kind = match part {
                "*" => {
                    contract.any = true;
                    continue;
                }
                "None" | "none" => ValueKind::None,
                "bool" => ValueKind::Bool,
                "int" => ValueKind::Int,
                "float" => ValueKind::Float,
                "str" => ValueKind::Str,
                "list" => ValueKind::List,
                "" => return Err(format!("empty alternative in `{descriptor}`")),
                other => {
                    return Err(format!(
                        "unknown kind `{other}`, expected: *, None, bool, int, float, str, list"
                    ));
                }
            };
            if !contract.kinds.contains(&kind) {
                contract.kinds.push(kind);
            }
        }
        Ok(contract)
    }
}

impl Contract for KindContract {
    fn check(&self, value: &Value) -> Result<(), String> {
        if self.any || self.kinds.contains(&value.kind()) {
            Ok(())
        } else {
            Err(format!("expected {}, got {}", self.describe(), value.kind()))
        }
    }

    fn describe(&self) -> String {
        if self.any {
            return "*".to_string();
        }
        self.kinds
            .iter()
            .map(ValueKind::as_str)
            .collect::<Vec<_>>()
            .join("|")
    }
}

/// Contract backed by a closure.
///
/// # Example
///
/// ```rust
/// use synthetic_core::{Contract, FnContract, Value};
///
/// let positive = FnContract::new("positive", |value: &Value| match value.as_int() {
///     Some(v) if v > 0 => Ok(()),
///     _ => Err("must be a positive int".to_string())
/// });
/// assert!(positive.check(&Value::Int(3)).is_ok());
/// assert!(positive.check(&Value::Int(-3)).is_err());
/// ```
pub struct FnContract<F> {
    description: String,
    check:       F
}

impl<F> FnContract<F>
where
    F: Fn(&Value) -> Result<(), String> + Send + Sync
{
    /// Wrap a closure with a description.
    pub fn new(description: impl Into<String>, check: F) -> Self {
        Self {
            description: description.into(),
            check
        }
    }
}

impl<F> Contract for FnContract<F>
where
    F: Fn(&Value) -> Result<(), String> + Send + Sync
{
    fn check(&self, value: &Value) -> Result<(), String> {
        (self.check)(value)
    }

    fn describe(&self) -> String {
        self.description.clone()
    }
}

impl<F> fmt::Debug for FnContract<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnContract")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
