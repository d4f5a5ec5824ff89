// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Decorator factory: the metadata registry and class regeneration.
//!
//! # Architecture
//!
//! ```text
//! factory.rs (orchestrator)
//! │
//! ├── Decorator         → member / constructor / naming-convention decorators
//! ├── registry          → ClassId → SyntheticMetaData, created lazily and
//! │                       released when the class is dropped
//! │
//! ├── initializer.rs    → synthesized initializer (argument merging, forwarding)
//! └── accessors.rs      → getter/setter installation and removal
//! ```
//!
//! Every decorator application builds the next metadata record, validates
//! it, and then rebuilds the initializer and every accessor from the
//! complete record. Nothing is patched incrementally, so a member declared
//! below the constructor decorator still takes part once the whole stack has
//! been applied. A record that fails validation is discarded and the class
//! keeps its previous state.
//!
//! # Example
//!
//! ```rust
//! use synthetic_core::{
//!     Arguments, Class, MemberDescriptor, SyntheticDecoratorFactory, Value
//! };
//!
//! let mut factory = SyntheticDecoratorFactory::new();
//! let mut class = Class::new("Point");
//!
//! // Written top to bottom, applied bottom-up.
//! let stack = [
//!     factory.synthesize_member(MemberDescriptor::new("a").default_value(1))?,
//!     factory.synthesize_member(MemberDescriptor::new("b").default_value(2))?,
//!     factory.synthesize_constructor()
//! ];
//! factory.decorate(&mut class, &stack)?;
//!
//! let mut point = class.instantiate(Arguments::new().kwarg("b", 5))?;
//! assert_eq!(class.invoke(&mut point, "getA", Arguments::new())?, Value::Int(1));
//! assert_eq!(class.invoke(&mut point, "getB", Arguments::new())?, Value::Int(5));
//! # Ok::<(), synthetic_core::SyntheticError>(())
//! ```

mod accessors;
mod initializer;

use std::{fmt, sync::Arc};

use tracing::debug;

use crate::{
    class::Class,
    config::SyntheticConfig,
    error::Result,
    member::{MemberDescriptor, SyntheticMember},
    metadata::SyntheticMetaData,
    naming::NamingConvention,
    registry::Registry
};

/// A class decorator produced by the factory.
#[derive(Clone)]
pub enum Decorator {
    /// Declare a synthetic member.
    Member(SyntheticMember),

    /// Make the synthesized initializer consume arguments.
    Constructor,

    /// Switch the accessor naming convention.
    NamingConvention(Arc<dyn NamingConvention>)
}

impl Decorator {
    /// Member-declaration decorator.
    ///
    /// # Errors
    ///
    /// [`SyntheticError::InvalidDescriptor`](crate::SyntheticError::InvalidDescriptor)
    /// if the descriptor does not validate.
    pub fn member(descriptor: MemberDescriptor) -> Result<Self> {
        SyntheticMember::from_descriptor(descriptor).map(Self::Member)
    }

    /// Constructor-enable decorator.
    pub const fn constructor() -> Self {
        Self::Constructor
    }

    /// Naming-convention decorator.
    pub fn naming_convention(convention: impl NamingConvention + 'static) -> Self {
        Self::NamingConvention(Arc::new(convention))
    }
}

impl fmt::Debug for Decorator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Member(member) => f.debug_tuple("Member").field(member).finish(),
            Self::Constructor => f.write_str("Constructor"),
            Self::NamingConvention(convention) => f
                .debug_tuple("NamingConvention")
                .field(&convention.name())
                .finish()
        }
    }
}

/// Produces decorators and applies them to classes.
///
/// Owns the registry mapping each decorated class to its
/// [`SyntheticMetaData`]. An entry is released when its class is dropped.
#[derive(Debug, Default)]
pub struct SyntheticDecoratorFactory {
    config:   SyntheticConfig,
    registry: Arc<Registry>
}

impl SyntheticDecoratorFactory {
    /// Factory with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory with a custom configuration.
    pub fn with_config(config: SyntheticConfig) -> Self {
        Self {
            config,
            registry: Arc::default()
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &SyntheticConfig {
        &self.config
    }

    /// Member-declaration decorator.
    ///
    /// # Errors
    ///
    /// [`SyntheticError::InvalidDescriptor`](crate::SyntheticError::InvalidDescriptor)
    /// if the descriptor does not validate.
    pub fn synthesize_member(&self, descriptor: MemberDescriptor) -> Result<Decorator> {
        Decorator::member(descriptor)
    }

    /// Constructor-enable decorator.
    pub fn synthesize_constructor(&self) -> Decorator {
        Decorator::constructor()
    }

    /// Naming-convention decorator.
    pub fn naming_convention(&self, convention: impl NamingConvention + 'static) -> Decorator {
        Decorator::naming_convention(convention)
    }

    /// Snapshot of the metadata recorded for a class, if any decorator was
    /// applied to it.
    pub fn metadata(&self, class: &Class) -> Option<SyntheticMetaData> {
        self.registry.get(class.id())
    }

    /// Number of live classes this factory holds metadata for.
    pub fn tracked_classes(&self) -> usize {
        self.registry.len()
    }

    /// Apply a decorator stack written top to bottom.
    ///
    /// Decorators are applied bottom-up, the way stacked decorators evaluate.
    ///
    /// # Errors
    ///
    /// Stops at the first decorator that fails.
    pub fn decorate(&mut self, class: &mut Class, decorators: &[Decorator]) -> Result<()> {
        decorators
            .iter()
            .rev()
            .try_for_each(|decorator| self.apply(class, decorator))
    }

    /// Apply one decorator and regenerate the class.
    ///
    /// # Errors
    ///
    /// - [`SyntheticError::DuplicateMember`](crate::SyntheticError::DuplicateMember)
    ///   when declaring a member name the class already has
    /// - [`SyntheticError::SharedStorage`](crate::SyntheticError::SharedStorage)
    ///   when two members would store into one attribute
    /// - [`SyntheticError::AccessorCollision`](crate::SyntheticError::AccessorCollision)
    ///   when two generated accessors would share a name
    ///
    /// The class and its recorded metadata are left unchanged on error.
    pub fn apply(&mut self, class: &mut Class, decorator: &Decorator) -> Result<()> {
        let enforce_contracts = self.config.enforces_contracts();
        let current = self.registry.get_or_insert_with(class, |class| {
            debug!(class = class.name(), "creating synthetic metadata");
            SyntheticMetaData::new(
                class.initializer().cloned(),
                class.method_names().into_iter().map(str::to_string),
                self.config.default_naming_convention()
            )
        });

        let mut next = current.clone();
        match decorator {
            Decorator::Member(member) => {
                debug!(class = class.name(), member = member.name(), "declaring member");
                next.insert_member_at_front(member.clone(), class.name())?;
            }
            Decorator::Constructor => {
                debug!(class = class.name(), "enabling constructor synthesis");
                next.enable_argument_consumption();
            }
            Decorator::NamingConvention(convention) => {
                debug!(
                    class = class.name(),
                    from = current.naming_convention().name(),
                    to = convention.name(),
                    "switching naming convention"
                );
                next.set_naming_convention(Arc::clone(convention));
            }
        }
        next.check_accessors(class.name())?;

        if matches!(decorator, Decorator::NamingConvention(_)) {
            accessors::remove_all(class, &current);
        }
        regenerate(class, &next, enforce_contracts);
        self.registry.store(class.id(), next);
        Ok(())
    }
}

/// Rebuild the initializer and every accessor from complete metadata.
#[tracing::instrument(skip_all, fields(class = class.name(), members = metadata.members().len()))]
fn regenerate(class: &mut Class, metadata: &SyntheticMetaData, enforce_contracts: bool) {
    initializer::install(class, metadata, enforce_contracts);
    accessors::install_all(class, metadata, enforce_contracts);
}
