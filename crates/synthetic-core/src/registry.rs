// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Class metadata registry.
//!
//! The factory owns the registry through an [`Arc`]. Each registered class
//! keeps a [`Weak`] handle and releases its entry when dropped, so a record
//! never outlives its class.

use std::{
    collections::HashMap,
    sync::{Arc, Weak}
};

use parking_lot::Mutex;
use tracing::trace;

use crate::{
    class::{Class, ClassId},
    metadata::SyntheticMetaData
};

#[derive(Debug, Default)]
pub(crate) struct Registry {
    entries: Mutex<HashMap<ClassId, SyntheticMetaData>>
}

impl Registry {
    /// Snapshot of a class's record.
    pub(crate) fn get(&self, id: ClassId) -> Option<SyntheticMetaData> {
        self.entries.lock().get(&id).cloned()
    }

    /// Record for `class`, created by `create` on first use.
    ///
    /// A new entry registers this registry with the class for release.
    pub(crate) fn get_or_insert_with(
        self: &Arc<Self>,
        class: &mut Class,
        create: impl FnOnce(&Class) -> SyntheticMetaData
    ) -> SyntheticMetaData {
        if let Some(metadata) = self.get(class.id()) {
            return metadata;
        }
        let metadata = create(class);
        self.entries.lock().insert(class.id(), metadata.clone());
        class.register(Arc::downgrade(self));
        metadata
    }

    /// Replace the record of an already registered class.
    pub(crate) fn store(&self, id: ClassId, metadata: SyntheticMetaData) {
        self.entries.lock().insert(id, metadata);
    }

    /// Drop the record of `id`.
    ///
    /// The record is dropped after the lock is released, since it may own
    /// user closures.
    pub(crate) fn release(&self, id: ClassId) {
        let released = self.entries.lock().remove(&id);
        if released.is_some() {
            trace!(class_id = id.get(), "released synthetic metadata");
        }
    }

    /// Number of classes with a record.
    pub(crate) fn len(&self) -> usize {
        self.entries.lock().len()
    }
}

/// Release `id` from every registry still alive.
pub(crate) fn release_all(id: ClassId, registrations: &mut Vec<Weak<Registry>>) {
    for registry in registrations.drain(..).filter_map(|registry| registry.upgrade()) {
        registry.release(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::CamelCase;

    fn record(_: &Class) -> SyntheticMetaData {
        SyntheticMetaData::new(None, [], Arc::new(CamelCase))
    }

    #[test]
    fn entry_is_created_once() {
        let registry = Arc::new(Registry::default());
        let mut class = Class::new("K");
        registry.get_or_insert_with(&mut class, record);
        registry.get_or_insert_with(&mut class, |_| unreachable!("created twice"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn dropping_the_class_releases_the_entry() {
        let registry = Arc::new(Registry::default());
        let mut class = Class::new("K");
        registry.get_or_insert_with(&mut class, record);
        let id = class.id();

        drop(class);
        assert!(registry.get(id).is_none());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn class_outliving_its_registry() {
        let registry = Arc::new(Registry::default());
        let mut class = Class::new("K");
        registry.get_or_insert_with(&mut class, record);
        drop(registry);
        drop(class);
    }
}
