// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Runtime classes: a method table plus an optional initializer.
//!
//! Decorators mutate a [`Class`] in place. User code describes the class body
//! (its own methods and initializer) first, then hands the class to
//! [`SyntheticDecoratorFactory`](crate::SyntheticDecoratorFactory).
//!
//! # Example
//!
//! ```rust
//! use synthetic_core::{Arguments, Class, Initializer, Signature, Value};
//!
//! let class = Class::new("Counter")
//!     .with_initializer(Initializer::new(
//!         Signature::new().param_with_default("start", 0),
//!         |instance, args| {
//!             let start = args.get("start").cloned().unwrap_or_default();
//!             instance.set_attribute("count", start);
//!             Ok(())
//!         }
//!     ))
//!     .with_method("count", |instance, _args| {
//!         Ok(instance.attribute("count").cloned().unwrap_or_default())
//!     });
//!
//! let mut counter = class.instantiate(Arguments::new().arg(5)).unwrap();
//! let count = class.invoke(&mut counter, "count", Arguments::new()).unwrap();
//! assert_eq!(count, Value::Int(5));
//! ```

use std::{
    collections::BTreeMap,
    fmt,
    sync::{
        Arc, Weak,
        atomic::{AtomicU64, Ordering}
    }
};

use crate::{
    args::Arguments,
    error::{Result, SyntheticError},
    instance::Instance,
    registry::{self, Registry},
    signature::{BoundArguments, Signature},
    value::Value
};

static NEXT_CLASS_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique class identity.
///
/// Keys the metadata registry of the decorator factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(u64);

impl ClassId {
    fn next() -> Self {
        Self(NEXT_CLASS_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric identity.
    pub const fn get(&self) -> u64 {
        self.0
    }
}

type MethodFn = dyn Fn(&mut Instance, Arguments) -> Result<Value> + Send + Sync;
type BoundBody = dyn Fn(&mut Instance, BoundArguments) -> Result<()> + Send + Sync;
type RawBody = dyn Fn(&mut Instance, Arguments) -> Result<()> + Send + Sync;

/// A callable attached to a class.
#[derive(Clone)]
pub struct Method(Arc<MethodFn>);

impl Method {
    /// Wrap a closure as a method.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut Instance, Arguments) -> Result<Value> + Send + Sync + 'static
    {
        Self(Arc::new(f))
    }

    /// Call the method on an instance.
    ///
    /// # Errors
    ///
    /// Whatever the method body returns.
    pub fn call(&self, instance: &mut Instance, args: Arguments) -> Result<Value> {
        (self.0)(instance, args)
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Method(..)")
    }
}

#[derive(Clone)]
enum InitializerBody {
    Bound(Arc<BoundBody>),
    Raw(Arc<RawBody>)
}

/// Class initializer: a declared signature and a body.
///
/// Initializers created with [`Initializer::new`] receive their arguments
/// already bound against the signature. The initializer installed by the
/// decorator factory works on raw arguments instead.
#[derive(Clone)]
pub struct Initializer {
    signature: Signature,
    body:      InitializerBody
}

impl Initializer {
    /// Create a user-authored initializer.
    pub fn new<F>(signature: Signature, body: F) -> Self
    where
        F: Fn(&mut Instance, BoundArguments) -> Result<()> + Send + Sync + 'static
    {
        Self {
            signature,
            body: InitializerBody::Bound(Arc::new(body))
        }
    }

    pub(crate) fn synthesized<F>(body: F) -> Self
    where
        F: Fn(&mut Instance, Arguments) -> Result<()> + Send + Sync + 'static
    {
        Self {
            signature: Signature::new().variadic_args().variadic_kwargs(),
            body:      InitializerBody::Raw(Arc::new(body))
        }
    }

    /// Declared signature.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Check if this initializer was installed by the decorator factory.
    pub const fn is_synthesized(&self) -> bool {
        matches!(self.body, InitializerBody::Raw(_))
    }

    /// Run the initializer on a fresh instance.
    ///
    /// # Errors
    ///
    /// Argument binding errors, or whatever the body returns.
    pub fn call(&self, callable: &str, instance: &mut Instance, args: Arguments) -> Result<()> {
        match &self.body {
            InitializerBody::Bound(body) => body(instance, self.signature.bind(callable, args)?),
            InitializerBody::Raw(body) => body(instance, args)
        }
    }
}

impl fmt::Debug for Initializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Initializer")
            .field("signature", &self.signature)
            .field("synthesized", &self.is_synthesized())
            .finish()
    }
}

/// A runtime class.
///
/// Not `Clone`: every class value owns a distinct [`ClassId`]. Dropping a
/// class releases the metadata every factory recorded for it.
#[derive(Debug)]
pub struct Class {
    id:            ClassId,
    name:          String,
    methods:       BTreeMap<String, Method>,
    initializer:   Option<Initializer>,
    registrations: Vec<Weak<Registry>>
}

impl Class {
    /// Create an empty class.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id:            ClassId::next(),
            name:          name.into(),
            methods:       BTreeMap::new(),
            initializer:   None,
            registrations: Vec::new()
        }
    }

    /// Class identity.
    pub const fn id(&self) -> ClassId {
        self.id
    }

    /// Class name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Builder form of [`define_method`](Self::define_method).
    #[must_use]
    pub fn with_method<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&mut Instance, Arguments) -> Result<Value> + Send + Sync + 'static
    {
        self.define_method(name, Method::new(f));
        self
    }

    /// Builder form of [`define_initializer`](Self::define_initializer).
    #[must_use]
    pub fn with_initializer(mut self, initializer: Initializer) -> Self {
        self.define_initializer(initializer);
        self
    }

    /// Attach a method, returning the one it replaces.
    pub fn define_method(&mut self, name: impl Into<String>, method: Method) -> Option<Method> {
        self.methods.insert(name.into(), method)
    }

    /// Detach a method.
    pub fn remove_method(&mut self, name: &str) -> Option<Method> {
        self.methods.remove(name)
    }

    /// Look up a method.
    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.get(name)
    }

    /// Check if a method with this name is attached.
    pub fn has_method(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Attached method names in sorted order.
    pub fn method_names(&self) -> Vec<&str> {
        self.methods.keys().map(String::as_str).collect()
    }

    /// Install an initializer, returning the one it replaces.
    pub fn define_initializer(&mut self, initializer: Initializer) -> Option<Initializer> {
        self.initializer.replace(initializer)
    }

    /// Currently installed initializer.
    pub fn initializer(&self) -> Option<&Initializer> {
        self.initializer.as_ref()
    }

    /// Create an instance by running the installed initializer.
    ///
    /// Without an initializer the class accepts no arguments.
    ///
    /// # Errors
    ///
    /// Argument binding errors, contract violations, or errors raised by a
    /// user-authored initializer.
    pub fn instantiate(&self, args: Arguments) -> Result<Instance> {
        let mut instance = Instance::new(self.name.clone());
        match &self.initializer {
            Some(initializer) => initializer.call(&self.name, &mut instance, args)?,
            None => {
                Signature::new().bind(&self.name, args)?;
            }
        }
        Ok(instance)
    }

    /// Call a method by name.
    ///
    /// # Errors
    ///
    /// [`SyntheticError::UnknownMethod`] if nothing is attached under
    /// `name`, otherwise whatever the method returns.
    pub fn invoke(&self, instance: &mut Instance, name: &str, args: Arguments) -> Result<Value> {
        let method = self
            .methods
            .get(name)
            .ok_or_else(|| SyntheticError::UnknownMethod {
                class:  self.name.clone(),
                method: name.to_string()
            })?;
        method.call(instance, args)
    }

    pub(crate) fn register(&mut self, registry: Weak<Registry>) {
        self.registrations.push(registry);
    }
}

impl Drop for Class {
    fn drop(&mut self) {
        registry::release_all(self.id, &mut self.registrations);
    }
}
