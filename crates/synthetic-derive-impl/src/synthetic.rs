// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Synthetic derive macro implementation.
//!
//! # Architecture
//!
//! ```text
//! synthetic.rs (orchestrator)
//! │
//! ├── parse/        → Attribute parsing (SyntheticDef, DecoratorDef, MemberDef)
//! │   ├── attrs.rs      → #[synthetic(...)] via darling
//! │   ├── member.rs     → #[synthesize_member(...)]
//! │   └── convention.rs → #[naming_convention(...)]
//! │
//! └── codegen.rs    → impl ::synthetic::SyntheticClass
//! ```

mod codegen;
pub mod parse;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

use self::parse::SyntheticDef;

/// Main entry point for the Synthetic derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match SyntheticDef::from_derive_input(&input) {
        Ok(def) => codegen::generate(&def).into(),
        Err(err) => err.write_errors().into()
    }
}
