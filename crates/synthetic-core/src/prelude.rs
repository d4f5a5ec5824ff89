// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports.
//!
//! ```rust
//! use synthetic_core::prelude::*;
//! ```

pub use crate::{
    Arguments, BoundArguments, CamelCase, Class, Contract, Decorator, Initializer, Instance,
    MemberDescriptor, NamingConvention, Signature, SyntheticClass, SyntheticConfig,
    SyntheticDecoratorFactory, SyntheticError, Underscore, Value
};
