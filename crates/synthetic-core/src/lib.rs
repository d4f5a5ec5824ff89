// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core runtime for synthetic.
//!
//! This crate provides runtime classes and the decorator factory that
//! synthesizes members on them: private storage, initializer wiring, getters
//! and setters. It can be used on its own or through `#[derive(Synthetic)]`
//! from the `synthetic` crate.
//!
//! # Overview
//!
//! - [`SyntheticDecoratorFactory`] — produces and applies decorators, owns the
//!   per-class [`SyntheticMetaData`] registry
//! - [`Decorator`] — member declaration, constructor enabling, naming
//!   convention switch
//! - [`Class`] / [`Instance`] — runtime classes with a method table and an
//!   [`Initializer`] whose [`Signature`] is declared up front
//! - [`NamingConvention`] — [`CamelCase`] (default) and [`Underscore`]
//! - [`Contract`] — [`KindContract`] descriptors and [`FnContract`] closures
//! - [`prelude`] — Convenient re-exports
//!
//! # Usage
//!
//! ```rust
//! use synthetic_core::prelude::*;
//!
//! let mut factory = SyntheticDecoratorFactory::new();
//! let mut class = Class::new("Point");
//! let stack = [
//!     factory.synthesize_member(MemberDescriptor::new("x").default_value(0).contract("int"))?,
//!     factory.synthesize_member(MemberDescriptor::new("y").default_value(0).read_only(true))?,
//!     factory.synthesize_constructor()
//! ];
//! factory.decorate(&mut class, &stack)?;
//!
//! let mut point = class.instantiate(Arguments::new().arg(3).arg(4))?;
//! class.invoke(&mut point, "setX", Arguments::new().arg(7))?;
//! assert_eq!(class.invoke(&mut point, "getX", Arguments::new())?, Value::Int(7));
//! assert_eq!(class.invoke(&mut point, "getY", Arguments::new())?, Value::Int(4));
//! assert!(!class.has_method("setY"));
//! # Ok::<(), SyntheticError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod args;
mod class;
mod config;
mod contract;
mod error;
mod factory;
mod instance;
mod member;
mod metadata;
mod naming;
pub mod prelude;
mod registry;
mod signature;
mod synthesize;
mod value;

pub use args::Arguments;
pub use class::{Class, ClassId, Initializer, Method};
pub use config::SyntheticConfig;
pub use contract::{Contract, FnContract, KindContract};
pub use error::{Result, SyntheticError};
pub use factory::{Decorator, SyntheticDecoratorFactory};
pub use instance::Instance;
pub use member::{MemberDescriptor, SyntheticMember};
pub use metadata::SyntheticMetaData;
pub use naming::{CamelCase, NamingConvention, Underscore};
pub use signature::{BoundArguments, Parameter, Signature};
pub use synthesize::SyntheticClass;
pub use value::{Value, ValueKind};
