// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `impl SyntheticClass` generation.
//!
//! For
//!
//! ```rust,ignore
//! #[derive(Synthetic)]
//! #[synthesize_member(name = "a", default = 1, read_only)]
//! #[synthesize_constructor]
//! struct Pair;
//! ```
//!
//! the macro emits
//!
//! ```rust,ignore
//! impl ::synthetic::SyntheticClass for Pair {
//!     const NAME: &'static str = "Pair";
//!
//!     fn decorators() -> ::synthetic::Result<Vec<::synthetic::Decorator>> {
//!         Ok(vec![
//!             ::synthetic::Decorator::member(
//!                 ::synthetic::MemberDescriptor::new("a").default_value(1).read_only(true)
//!             )?,
//!             ::synthetic::Decorator::constructor(),
//!         ])
//!     }
//! }
//! ```

use proc_macro2::TokenStream;
use quote::quote;
use syn::Expr;

use super::parse::{ConventionDef, DecoratorDef, MemberDef, SyntheticDef};

/// Generate the trait implementation.
pub fn generate(def: &SyntheticDef) -> TokenStream {
    let ident = &def.ident;
    let class_name = &def.class_name;
    let (impl_generics, ty_generics, where_clause) = def.generics.split_for_impl();
    let decorators = def.decorators.iter().map(decorator);
    let body = def.body.as_ref().map(|path| {
        quote! {
            fn body(class: &mut ::synthetic::Class) {
                #path(class)
            }
        }
    });

    quote! {
        #[automatically_derived]
        impl #impl_generics ::synthetic::SyntheticClass for #ident #ty_generics #where_clause {
            const NAME: &'static str = #class_name;

            fn decorators(
            ) -> ::synthetic::Result<::std::vec::Vec<::synthetic::Decorator>> {
                ::std::result::Result::Ok(::std::vec![#(#decorators),*])
            }

            #body
        }
    }
}

fn decorator(def: &DecoratorDef) -> TokenStream {
    match def {
        DecoratorDef::Member(member) => {
            let descriptor = descriptor(member);
            quote! { ::synthetic::Decorator::member(#descriptor)? }
        }
        DecoratorDef::Constructor => quote! { ::synthetic::Decorator::constructor() },
        DecoratorDef::NamingConvention(convention) => {
            let convention = match convention {
                ConventionDef::CamelCase => quote! { ::synthetic::CamelCase },
                ConventionDef::Underscore => quote! { ::synthetic::Underscore },
                ConventionDef::Custom(expr) => quote! { #expr }
            };
            quote! { ::synthetic::Decorator::naming_convention(#convention) }
        }
    }
}

fn descriptor(member: &MemberDef) -> TokenStream {
    let name = &member.name;
    let default = member.default.as_ref().map(|expr| {
        let value = default_value(expr);
        quote! { .default_value(#value) }
    });
    let contract = member
        .contract
        .as_ref()
        .map(|contract| quote! { .contract(#contract) });
    let read_only = member.read_only.then(|| quote! { .read_only(true) });
    let getter = member
        .getter
        .as_ref()
        .map(|getter| quote! { .getter_name(#getter) });
    let setter = member
        .setter
        .as_ref()
        .map(|setter| quote! { .setter_name(#setter) });
    let private = member
        .private
        .as_ref()
        .map(|private| quote! { .private_name(#private) });

    quote! {
        ::synthetic::MemberDescriptor::new(#name)
            #default
            #contract
            #read_only
            #getter
            #setter
            #private
    }
}

/// A bare `None` has no type to convert from; map it to `Value::None`.
fn default_value(expr: &Expr) -> TokenStream {
    match expr {
        Expr::Path(path) if path.qself.is_none() && path.path.is_ident("None") => {
            quote! { ::synthetic::Value::None }
        }
        _ => quote! { #expr }
    }
}
