// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Declarative class definitions.
//!
//! [`SyntheticClass`] is what `#[derive(Synthetic)]` implements. It can also
//! be implemented by hand:
//!
//! ```rust
//! use synthetic_core::{
//!     Arguments, Class, Decorator, MemberDescriptor, Result, SyntheticClass,
//!     SyntheticDecoratorFactory, Value
//! };
//!
//! struct Account;
//!
//! impl SyntheticClass for Account {
//!     const NAME: &'static str = "Account";
//!
//!     fn decorators() -> Result<Vec<Decorator>> {
//!         Ok(vec![
//!             Decorator::member(MemberDescriptor::new("owner").default_value("nobody"))?,
//!             Decorator::constructor(),
//!         ])
//!     }
//! }
//!
//! let mut factory = SyntheticDecoratorFactory::new();
//! let class = Account::synthesize(&mut factory)?;
//! let mut account = class.instantiate(Arguments::new().arg("ada"))?;
//! assert_eq!(class.invoke(&mut account, "getOwner", Arguments::new())?, Value::from("ada"));
//! # Ok::<(), synthetic_core::SyntheticError>(())
//! ```

use crate::{
    class::Class,
    error::Result,
    factory::{Decorator, SyntheticDecoratorFactory}
};

/// A class described by a decorator stack.
pub trait SyntheticClass {
    /// Class name.
    const NAME: &'static str;

    /// Decorators in textual order, top to bottom.
    ///
    /// # Errors
    ///
    /// Descriptor validation errors.
    fn decorators() -> Result<Vec<Decorator>>;

    /// Class body: user-authored methods and initializer.
    ///
    /// Runs before any decorator, so everything defined here counts as
    /// user-authored.
    fn body(class: &mut Class) {
        let _ = class;
    }

    /// Build the class and apply its decorator stack bottom-up.
    ///
    /// # Errors
    ///
    /// Descriptor validation errors, or any decoration error from
    /// [`SyntheticDecoratorFactory::apply`].
    fn synthesize(factory: &mut SyntheticDecoratorFactory) -> Result<Class> {
        let mut class = Class::new(Self::NAME);
        Self::body(&mut class);
        let decorators = Self::decorators()?;
        factory.decorate(&mut class, &decorators)?;
        Ok(class)
    }
}
