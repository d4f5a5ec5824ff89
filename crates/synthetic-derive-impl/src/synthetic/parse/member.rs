// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[synthesize_member(...)]` parsing.
//!
//! Names are checked here so a typo fails the build instead of surfacing as
//! an `InvalidDescriptor` at runtime. Contract descriptors are left to the
//! runtime parser.

use proc_macro2::Span;
use syn::{Attribute, Expr, LitBool, LitStr, meta::ParseNestedMeta};

/// Parsed member declaration.
#[derive(Debug)]
pub struct MemberDef {
    /// Member name.
    pub name: String,

    /// Span of the `name` literal, for diagnostics.
    pub name_span: Span,

    /// Default value expression.
    pub default: Option<Expr>,

    /// Contract descriptor string.
    pub contract: Option<String>,

    /// Suppress the setter.
    pub read_only: bool,

    /// Explicit getter name.
    pub getter: Option<String>,

    /// Explicit setter name.
    pub setter: Option<String>,

    /// Explicit storage attribute name.
    pub private: Option<String>
}

impl MemberDef {
    /// Attribute the member stores its value in.
    pub fn storage(&self) -> String {
        self.private
            .clone()
            .unwrap_or_else(|| format!("_{}", self.name))
    }
}

/// Parse a single `#[synthesize_member(...)]` attribute.
///
/// # Syntax Examples
///
/// ```text
/// #[synthesize_member(name = "a")]
/// #[synthesize_member(name = "a", default = 1, contract = "int|None")]
/// #[synthesize_member(name = "token", read_only)]
/// #[synthesize_member(name = "token", read_only = false, getter = "token")]
/// #[synthesize_member(name = "size", private = "__size", setter = "resize")]
/// ```
pub fn parse_member_attr(attr: &Attribute) -> syn::Result<MemberDef> {
    let mut name: Option<LitStr> = None;
    let mut default = None;
    let mut contract = None;
    let mut read_only = false;
    let mut getter = None;
    let mut setter = None;
    let mut private = None;

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("name") {
            name = Some(meta.value()?.parse()?);
        } else if meta.path.is_ident("default") {
            default = Some(meta.value()?.parse::<Expr>()?);
        } else if meta.path.is_ident("contract") {
            let lit: LitStr = meta.value()?.parse()?;
            contract = Some(lit.value());
        } else if meta.path.is_ident("read_only") {
            read_only = if meta.input.peek(syn::Token![=]) {
                meta.value()?.parse::<LitBool>()?.value
            } else {
                true
            };
        } else if meta.path.is_ident("getter") {
            getter = Some(identifier(&meta, "getter")?);
        } else if meta.path.is_ident("setter") {
            setter = Some(identifier(&meta, "setter")?);
        } else if meta.path.is_ident("private") {
            private = Some(identifier(&meta, "private")?);
        } else {
            return Err(meta.error(
                "unknown synthesize_member option, expected: name, default, contract, \
                 read_only, getter, setter, private"
            ));
        }
        Ok(())
    })?;

    let name = name.ok_or_else(|| {
        syn::Error::new_spanned(attr, "synthesize_member requires `name = \"...\"`")
    })?;
    if !is_identifier(&name.value()) {
        return Err(syn::Error::new(
            name.span(),
            "member name must be an identifier"
        ));
    }

    Ok(MemberDef {
        name: name.value(),
        name_span: name.span(),
        default,
        contract,
        read_only,
        getter,
        setter,
        private
    })
}

/// Parse `key = "ident"` and check the literal.
fn identifier(meta: &ParseNestedMeta<'_>, role: &str) -> syn::Result<String> {
    let lit: LitStr = meta.value()?.parse()?;
    let value = lit.value();
    if is_identifier(&value) {
        Ok(value)
    } else {
        Err(syn::Error::new(
            lit.span(),
            format!("{role} name must be an identifier")
        ))
    }
}

/// Check `[A-Za-z_][A-Za-z0-9_]*`, the rule the runtime applies.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false
    }
}
