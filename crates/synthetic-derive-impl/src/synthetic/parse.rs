// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute parsing for the Synthetic derive macro.
//!
//! `#[synthetic(...)]` is a plain key-value attribute and goes through
//! darling's `FromDeriveInput`. The decorator attributes are parsed by hand:
//! their relative order is meaningful, and `default = <expr>` takes an
//! arbitrary expression.
//!
//! # Data Structures
//!
//! ```text
//! SyntheticDef
//! ├── ident: Ident              (struct name)
//! ├── generics: Generics
//! ├── class_name: String        (#[synthetic(name)] or the struct name)
//! ├── body: Option<Path>        (#[synthetic(body)])
//! └── decorators: Vec<DecoratorDef>   (textual order, top to bottom)
//!     ├── Member(MemberDef)
//!     ├── Constructor
//!     └── NamingConvention(ConventionDef)
//! ```

mod attrs;
mod convention;
mod member;


use std::collections::{HashMap, HashSet};

use darling::FromDeriveInput;
use syn::{Attribute, DeriveInput, Generics, Ident, Path};

use self::attrs::SyntheticAttrs;
pub use self::{convention::ConventionDef, member::MemberDef};

/// One decorator attribute on the struct.
#[derive(Debug)]
pub enum DecoratorDef {
    /// `#[synthesize_member(...)]`
    Member(MemberDef),

    /// `#[synthesize_constructor]`
    Constructor,

    /// `#[naming_convention(...)]`
    NamingConvention(ConventionDef)
}

/// Complete parsed definition of a synthetic class.
#[derive(Debug)]
pub struct SyntheticDef {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct generics, carried over to the impl.
    pub generics: Generics,

    /// Runtime class name.
    pub class_name: String,

    /// Class body function, `fn(&mut Class)`.
    pub body: Option<Path>,

    /// Decorators in textual order.
    pub decorators: Vec<DecoratorDef>
}

impl SyntheticDef {
    /// Parse the derive input.
    ///
    /// # Errors
    ///
    /// Every malformed attribute is reported, not only the first.
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = SyntheticAttrs::from_derive_input(input)?;
        let decorators = parse_decorators(&input.attrs)?;

        let class_name = attrs.name.unwrap_or_else(|| attrs.ident.to_string());
        Ok(Self {
            ident: attrs.ident,
            generics: attrs.generics,
            class_name,
            body: attrs.body,
            decorators
        })
    }

    /// Declared members in textual order.
    pub fn members(&self) -> impl Iterator<Item = &MemberDef> {
        self.decorators.iter().filter_map(|decorator| match decorator {
            DecoratorDef::Member(member) => Some(member),
            _ => None
        })
    }
}

/// Collect decorator attributes in order, rejecting duplicate member names
/// and members that share a storage attribute.
fn parse_decorators(attrs: &[Attribute]) -> darling::Result<Vec<DecoratorDef>> {
    let mut errors = darling::Error::accumulator();
    let mut decorators = Vec::new();
    let mut seen = HashSet::new();
    let mut storage = HashMap::new();

    for attr in attrs {
        let path = attr.path();
        let parsed = if path.is_ident("synthesize_member") {
            member::parse_member_attr(attr).and_then(|member| {
                if !seen.insert(member.name.clone()) {
                    return Err(syn::Error::new(
                        member.name_span,
                        format!("duplicate synthetic member `{}`", member.name)
                    ));
                }
                if let Some(other) = storage.insert(member.storage(), member.name.clone()) {
                    return Err(syn::Error::new(
                        member.name_span,
                        format!(
                            "synthetic members `{other}` and `{}` share private attribute `{}`",
                            member.name,
                            member.storage()
                        )
                    ));
                }
                Ok(DecoratorDef::Member(member))
            })
        } else if path.is_ident("synthesize_constructor") {
            attr.meta
                .require_path_only()
                .map(|_| DecoratorDef::Constructor)
                .map_err(|_| {
                    syn::Error::new_spanned(attr, "`synthesize_constructor` takes no arguments")
                })
        } else if path.is_ident("naming_convention") {
            convention::parse_convention_attr(attr).map(DecoratorDef::NamingConvention)
        } else {
            continue;
        };

        if let Some(decorator) = errors.handle(parsed.map_err(darling::Error::from)) {
            decorators.push(decorator);
        }
    }

    errors.finish_with(decorators)
}
