// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Struct-level `#[synthetic(...)]` parsing with darling.
//!
//! | Attribute | Required | Default | Description |
//! |-----------|----------|---------|-------------|
//! | `name` | No | struct name | Runtime class name |
//! | `body` | No | none | `fn(&mut Class)` defining user methods and initializer |

use darling::FromDeriveInput;
use syn::{Generics, Ident, Path};

/// Struct-level attributes parsed from `#[synthetic(...)]`.
///
/// Internal; the public API is [`SyntheticDef`](super::SyntheticDef).
///
/// # Example
///
/// ```rust,ignore
/// #[synthetic(name = "Point", body = Self::define)]
/// ```
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(synthetic), supports(struct_any))]
pub struct SyntheticAttrs {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct generics.
    pub generics: Generics,

    /// Runtime class name override.
    #[darling(default)]
    pub name: Option<String>,

    /// Class body function.
    ///
    /// Accepts a path, quoted or not: `body = Self::define` or
    /// `body = "define_point"`.
    #[darling(default)]
    pub body: Option<Path>
}
