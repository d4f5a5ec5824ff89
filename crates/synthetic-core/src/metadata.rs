// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-class synthesis metadata.

use std::{
    collections::{BTreeSet, HashMap},
    fmt,
    sync::Arc
};

use crate::{
    class::Initializer,
    error::{Result, SyntheticError},
    member::SyntheticMember,
    naming::NamingConvention
};

/// Everything the factory knows about one decorated class.
///
/// Created on the first decorator applied to a class and mutated
/// additively by every later one.
///
/// # Invariants
///
/// - members are kept in textual declaration order
/// - member names are unique
/// - private attribute names are unique
/// - generated accessor names are unique across all members
/// - the original method names are captured once and never updated
#[derive(Clone)]
pub struct SyntheticMetaData {
    members:               Vec<SyntheticMember>,
    original_initializer:  Option<Initializer>,
    original_method_names: BTreeSet<String>,
    naming_convention:     Arc<dyn NamingConvention>,
    consume_arguments:     bool
}

impl SyntheticMetaData {
    /// Create a record from the class state before any synthesis.
    pub fn new(
        original_initializer: Option<Initializer>,
        original_method_names: impl IntoIterator<Item = String>,
        naming_convention: Arc<dyn NamingConvention>
    ) -> Self {
        Self {
            members: Vec::new(),
            original_initializer,
            original_method_names: original_method_names.into_iter().collect(),
            naming_convention,
            consume_arguments: false
        }
    }

    /// Members in declaration order.
    pub fn members(&self) -> &[SyntheticMember] {
        &self.members
    }

    /// Look up a member by name.
    pub fn member(&self, name: &str) -> Option<&SyntheticMember> {
        self.members.iter().find(|member| member.name() == name)
    }

    /// Insert a member ahead of the ones already known.
    ///
    /// Stacked decorators are applied bottom-up, so front insertion keeps the
    /// list in top-to-bottom declaration order.
    ///
    /// # Errors
    ///
    /// [`SyntheticError::DuplicateMember`] if the name is already taken.
    /// [`SyntheticError::SharedStorage`] if another member already stores
    /// into the same private attribute.
    pub fn insert_member_at_front(&mut self, member: SyntheticMember, class: &str) -> Result<()> {
        if self.member(member.name()).is_some() {
            return Err(SyntheticError::DuplicateMember {
                class:  class.to_string(),
                member: member.name().to_string()
            });
        }
        if let Some(other) = self
            .members
            .iter()
            .find(|other| other.private_name() == member.private_name())
        {
            return Err(SyntheticError::SharedStorage {
                class:     class.to_string(),
                attribute: member.private_name().to_string(),
                member:    member.name().to_string(),
                other:     other.name().to_string()
            });
        }
        self.members.insert(0, member);
        Ok(())
    }

    /// Check that no two generated accessors share a name.
    ///
    /// Read-only members contribute their getter only. Names the user wrote
    /// are never generated, so they cannot collide.
    ///
    /// # Errors
    ///
    /// [`SyntheticError::AccessorCollision`] naming the first clash in
    /// declaration order.
    pub fn check_accessors(&self, class: &str) -> Result<()> {
        let mut owners: HashMap<String, &str> = HashMap::new();
        for member in &self.members {
            let setter = (!member.is_read_only()).then(|| self.setter_name(member));
            for accessor in std::iter::once(self.getter_name(member)).chain(setter) {
                if self.is_original_method(&accessor) {
                    continue;
                }
                if let Some(other) = owners.get(&accessor) {
                    return Err(SyntheticError::AccessorCollision {
                        class: class.to_string(),
                        accessor,
                        member: member.name().to_string(),
                        other: (*other).to_string()
                    });
                }
                owners.insert(accessor, member.name());
            }
        }
        Ok(())
    }

    /// Initializer written in the class body, if any.
    pub fn original_initializer(&self) -> Option<&Initializer> {
        self.original_initializer.as_ref()
    }

    /// Method names present before synthesis began.
    pub fn original_method_names(&self) -> &BTreeSet<String> {
        &self.original_method_names
    }

    /// Check if the user wrote a method with this name.
    pub fn is_original_method(&self, name: &str) -> bool {
        self.original_method_names.contains(name)
    }

    /// Active naming convention.
    pub fn naming_convention(&self) -> &dyn NamingConvention {
        self.naming_convention.as_ref()
    }

    /// Replace the naming convention.
    pub fn set_naming_convention(&mut self, naming_convention: Arc<dyn NamingConvention>) {
        self.naming_convention = naming_convention;
    }

    /// Check if the synthesized initializer consumes arguments.
    pub const fn consumes_arguments(&self) -> bool {
        self.consume_arguments
    }

    /// Turn argument consumption on. Stays on.
    pub fn enable_argument_consumption(&mut self) {
        self.consume_arguments = true;
    }

    /// Getter name of a member under the active convention.
    pub fn getter_name(&self, member: &SyntheticMember) -> String {
        member.getter_name().map_or_else(
            || self.naming_convention.getter_name(member.name()),
            str::to_string
        )
    }

    /// Setter name of a member under the active convention.
    pub fn setter_name(&self, member: &SyntheticMember) -> String {
        member.setter_name().map_or_else(
            || self.naming_convention.setter_name(member.name()),
            str::to_string
        )
    }
}

impl fmt::Debug for SyntheticMetaData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyntheticMetaData")
            .field("members", &self.members)
            .field("original_initializer", &self.original_initializer)
            .field("original_method_names", &self.original_method_names)
            .field("naming_convention", &self.naming_convention.name())
            .field("consume_arguments", &self.consume_arguments)
            .finish()
    }
}
