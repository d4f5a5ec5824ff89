// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! Procedural macro implementation for `synthetic`.
//!
//! Use the `synthetic` crate instead: this crate only provides the
//! [`Synthetic`](macro@Synthetic) derive, and the code it emits refers to
//! `::synthetic` paths.
//!
//! # Attribute Quick Reference
//!
//! ```rust,ignore
//! #[derive(Synthetic)]
//! #[synthetic(
//!     name = "Point",          // Optional: class name (default: struct name)
//!     body = Self::define      // Optional: fn(&mut Class) adding user methods
//! )]
//! #[synthesize_member(name = "x", default = 0, contract = "int")]
//! #[synthesize_member(name = "label", default = "", read_only, getter = "label")]
//! #[synthesize_constructor]
//! #[naming_convention(underscore)] // camel_case | underscore | <expr>
//! pub struct Point;
//! ```
//!
//! Attributes are read top to bottom and applied bottom-up, the same way a
//! hand-written decorator stack is.
//!
//! # `#[synthesize_member(...)]` Options
//!
//! | Option | Required | Description |
//! |--------|----------|-------------|
//! | `name = "..."` | **Yes** | Member name, an identifier |
//! | `default = <expr>` | No | Default value, anything convertible into `Value` |
//! | `contract = "..."` | No | Kind descriptor such as `"int"`, `"str\|None"` or `"*"` |
//! | `read_only` | No | Suppress setter generation |
//! | `getter = "..."` | No | Explicit getter name |
//! | `setter = "..."` | No | Explicit setter name |
//! | `private = "..."` | No | Storage attribute (default `_<name>`) |

mod synthetic;

use proc_macro::TokenStream;

/// Derive macro implementing `SyntheticClass` from stacked attributes.
///
/// # Example
///
/// ```rust,ignore
/// use synthetic::{Arguments, Synthetic, SyntheticClass, SyntheticDecoratorFactory};
///
/// #[derive(Synthetic)]
/// #[synthesize_member(name = "a", default = 1)]
/// #[synthesize_member(name = "b", default = 2)]
/// #[synthesize_constructor]
/// struct Pair;
///
/// let mut factory = SyntheticDecoratorFactory::new();
/// let class = Pair::synthesize(&mut factory)?;
/// let mut pair = class.instantiate(Arguments::new().kwarg("b", 5))?;
/// ```
///
/// # Compile Errors
///
/// - the input is not a struct
/// - a member has no `name`, or a name is not an identifier
/// - two members share a name
/// - an option is unknown, or `synthesize_constructor` has arguments
#[proc_macro_derive(
    Synthetic,
    attributes(synthetic, synthesize_member, synthesize_constructor, naming_convention)
)]
pub fn derive_synthetic(input: TokenStream) -> TokenStream {
    synthetic::derive(input)
}
