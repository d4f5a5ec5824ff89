// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[naming_convention(...)]` parsing.

use syn::{Attribute, Expr};

/// Naming convention selected by the attribute.
#[derive(Debug)]
pub enum ConventionDef {
    /// `camel_case`: `getName` / `setName`.
    CamelCase,

    /// `underscore`: `get_name` / `set_name`.
    Underscore,

    /// Any expression evaluating to a `NamingConvention`.
    Custom(Expr)
}

/// Parse a `#[naming_convention(...)]` attribute.
///
/// # Syntax Examples
///
/// ```text
/// #[naming_convention(camel_case)]
/// #[naming_convention(underscore)]
/// #[naming_convention(crate::naming::Verbose)]
/// #[naming_convention(Prefixed::new("fetch"))]
/// ```
pub fn parse_convention_attr(attr: &Attribute) -> syn::Result<ConventionDef> {
    let expr: Expr = attr.parse_args()?;

    let builtin = match &expr {
        Expr::Path(path) if path.qself.is_none() => path.path.get_ident().map(ToString::to_string),
        _ => None
    };

    Ok(match builtin.as_deref() {
        Some("camel_case") => ConventionDef::CamelCase,
        Some("underscore") => ConventionDef::Underscore,
        _ => ConventionDef::Custom(expr)
    })
}
