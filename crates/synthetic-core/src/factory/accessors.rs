// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Getter and setter generation.
//!
//! A generated accessor never replaces a method the user wrote: names found
//! in the original method snapshot are skipped both when installing and when
//! removing.

use tracing::trace;

use crate::{
    args::Arguments,
    class::{Class, Method},
    error::SyntheticError,
    member::SyntheticMember,
    metadata::SyntheticMetaData,
    signature::Signature,
    value::Value
};

/// Install getters and setters for every member under the active convention.
pub(super) fn install_all(class: &mut Class, metadata: &SyntheticMetaData, enforce_contracts: bool) {
    for member in metadata.members() {
        let getter_name = metadata.getter_name(member);
        add(class, metadata, &getter_name, || getter(member, &getter_name));

        if member.is_read_only() {
            continue;
        }
        let setter_name = metadata.setter_name(member);
        add(class, metadata, &setter_name, || {
            setter(member, &setter_name, enforce_contracts)
        });
    }
}

/// Remove every accessor generated under the active convention.
pub(super) fn remove_all(class: &mut Class, metadata: &SyntheticMetaData) {
    for member in metadata.members() {
        remove(class, metadata, &metadata.getter_name(member));
        remove(class, metadata, &metadata.setter_name(member));
    }
}

fn add(class: &mut Class, metadata: &SyntheticMetaData, name: &str, make: impl FnOnce() -> Method) {
    if metadata.is_original_method(name) {
        trace!(class = class.name(), accessor = name, "keeping user-authored method");
        return;
    }
    trace!(class = class.name(), accessor = name, "installing accessor");
    class.define_method(name, make());
}

fn remove(class: &mut Class, metadata: &SyntheticMetaData, name: &str) {
    if metadata.is_original_method(name) {
        return;
    }
    if class.remove_method(name).is_some() {
        trace!(class = class.name(), accessor = name, "removed accessor");
    }
}

fn getter(member: &SyntheticMember, name: &str) -> Method {
    let callable = name.to_string();
    let private_name = member.private_name().to_string();
    Method::new(move |instance, args: Arguments| {
        Signature::new().bind(&callable, args)?;
        instance
            .attribute(&private_name)
            .cloned()
            .ok_or_else(|| SyntheticError::MissingAttribute {
                class:     instance.class_name().to_string(),
                attribute: private_name.clone()
            })
    })
}

fn setter(member: &SyntheticMember, name: &str, enforce_contracts: bool) -> Method {
    let callable = name.to_string();
    let member = member.clone();
    Method::new(move |instance, args: Arguments| {
        let bound = Signature::new().param("value").bind(&callable, args)?;
        let value = bound.get("value").cloned().unwrap_or_default();
        if enforce_contracts {
            member.check(&value)?;
        }
        instance.set_attribute(member.private_name(), value);
        Ok(Value::None)
    })
}
