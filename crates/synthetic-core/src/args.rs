// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Caller-supplied call arguments.

use crate::value::Value;

/// Positional and keyword arguments of a single call.
///
/// Keywords keep insertion order and are unique: supplying a keyword twice
/// replaces the earlier value in place.
///
/// # Example
///
/// ```rust
/// use synthetic_core::{Arguments, Value};
///
/// let args = Arguments::new().arg(10).kwarg("b", 5);
/// assert_eq!(args.positional(), &[Value::Int(10)]);
/// assert_eq!(args.keyword("b"), Some(&Value::Int(5)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    positional: Vec<Value>,
    keywords:   Vec<(String, Value)>
}

impl Arguments {
    /// Create an empty argument set.
    pub const fn new() -> Self {
        Self {
            positional: Vec::new(),
            keywords:   Vec::new()
        }
    }

    /// Build from already split parts, collapsing repeated keywords.
    pub fn from_parts(positional: Vec<Value>, keywords: Vec<(String, Value)>) -> Self {
        let mut args = Self {
            positional,
            keywords: Vec::with_capacity(keywords.len())
        };
        for (name, value) in keywords {
            args.insert_keyword(name, value);
        }
        args
    }

    /// Append a positional argument.
    #[must_use]
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Add or replace a keyword argument.
    #[must_use]
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert_keyword(name.into(), value.into());
        self
    }

    /// Append a positional argument in place.
    pub fn push_positional(&mut self, value: impl Into<Value>) {
        self.positional.push(value.into());
    }

    /// Add or replace a keyword argument in place.
    ///
    /// Returns the replaced value, if any.
    pub fn insert_keyword(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let name = name.into();
        let value = value.into();
        match self.keywords.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.keywords.push((name, value));
                None
            }
        }
    }

    /// Positional values in call order.
    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    /// Keyword arguments in insertion order.
    pub fn keywords(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.keywords.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Look up a keyword argument by exact name.
    pub fn keyword(&self, name: &str) -> Option<&Value> {
        self.keywords
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Check if a keyword argument with this name is present.
    pub fn has_keyword(&self, name: &str) -> bool {
        self.keyword(name).is_some()
    }

    /// Total number of arguments.
    pub fn len(&self) -> usize {
        self.positional.len() + self.keywords.len()
    }

    /// Check if no argument was supplied.
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keywords.is_empty()
    }

    /// Split into positional values and keyword pairs.
    pub fn into_parts(self) -> (Vec<Value>, Vec<(String, Value)>) {
        (self.positional, self.keywords)
    }
}
