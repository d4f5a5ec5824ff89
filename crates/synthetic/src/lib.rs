// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # synthetic
//!
//! One crate, all features. Re-exports:
//! - [`Synthetic`](macro@Synthetic) derive macro from `synthetic-derive-impl`
//! - All types from `synthetic-core` ([`SyntheticDecoratorFactory`],
//!   [`Class`], [`Decorator`], [`SyntheticClass`])

pub use synthetic_core::*;
pub use synthetic_derive_impl::Synthetic;

/// Prelude with the derive macro and common runtime types.
pub mod prelude {
    pub use synthetic_core::prelude::*;
    pub use synthetic_derive_impl::Synthetic;
}
