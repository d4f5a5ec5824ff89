// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Class instances.

use std::collections::BTreeMap;

use crate::value::Value;

/// An object produced by [`Class::instantiate`](crate::Class::instantiate).
///
/// Holds its own attributes only; methods live on the class.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    class_name: String,
    attributes: BTreeMap<String, Value>
}

impl Instance {
    pub(crate) fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            attributes: BTreeMap::new()
        }
    }

    /// Name of the class this instance was built from.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Read an attribute.
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Write an attribute, returning the previous value.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.attributes.insert(name.into(), value.into())
    }

    /// Check if the attribute exists.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Attribute names in sorted order.
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }
}
