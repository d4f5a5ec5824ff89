// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Synthetic member declarations.
//!
//! A [`MemberDescriptor`] collects the arguments of a member declaration.
//! Validation turns it into an immutable [`SyntheticMember`].
//!
//! # Descriptor Fields
//!
//! | Field | Default | Description |
//! |-------|---------|-------------|
//! | `name` | required | Member name, must be an identifier |
//! | `default_value` | `None` | Value used when no argument supplies one |
//! | `contract` | none | Check applied to values written into the member |
//! | `read_only` | `false` | Suppresses the setter |
//! | `getter_name` / `setter_name` | convention | Explicit accessor names |
//! | `private_name` | `_<name>` | Instance attribute holding the value |

use std::{fmt, sync::Arc};

use crate::{
    contract::{Contract, KindContract},
    error::{Result, SyntheticError},
    value::Value
};

#[derive(Clone)]
enum ContractSource {
    Descriptor(String),
    Shared(Arc<dyn Contract>)
}

/// Arguments of a member declaration, before validation.
///
/// # Example
///
/// ```rust
/// use synthetic_core::{MemberDescriptor, SyntheticMember};
///
/// let member = SyntheticMember::try_from(
///     MemberDescriptor::new("port")
///         .default_value(8080)
///         .contract("int")
///         .read_only(true)
/// )
/// .unwrap();
/// assert_eq!(member.private_name(), "_port");
/// assert!(member.is_read_only());
/// ```
#[derive(Clone)]
pub struct MemberDescriptor {
    name:          String,
    default_value: Value,
    contract:      Option<ContractSource>,
    read_only:     bool,
    getter_name:   Option<String>,
    setter_name:   Option<String>,
    private_name:  Option<String>
}

impl MemberDescriptor {
    /// Start a declaration for the named member.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:          name.into(),
            default_value: Value::None,
            contract:      None,
            read_only:     false,
            getter_name:   None,
            setter_name:   None,
            private_name:  None
        }
    }

    /// Value used when no argument supplies one.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = value.into();
        self
    }

    /// Attach a [`KindContract`] descriptor such as `"int|None"`.
    ///
    /// The descriptor is parsed during validation.
    #[must_use]
    pub fn contract(mut self, descriptor: impl Into<String>) -> Self {
        self.contract = Some(ContractSource::Descriptor(descriptor.into()));
        self
    }

    /// Attach any [`Contract`] implementation.
    #[must_use]
    pub fn contract_with(mut self, contract: impl Contract + 'static) -> Self {
        self.contract = Some(ContractSource::Shared(Arc::new(contract)));
        self
    }

    /// Suppress setter generation.
    #[must_use]
    pub const fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Getter name overriding the naming convention.
    #[must_use]
    pub fn getter_name(mut self, name: impl Into<String>) -> Self {
        self.getter_name = Some(name.into());
        self
    }

    /// Setter name overriding the naming convention.
    #[must_use]
    pub fn setter_name(mut self, name: impl Into<String>) -> Self {
        self.setter_name = Some(name.into());
        self
    }

    /// Instance attribute name overriding `_<name>`.
    #[must_use]
    pub fn private_name(mut self, name: impl Into<String>) -> Self {
        self.private_name = Some(name.into());
        self
    }

    /// Member name as declared.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for MemberDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberDescriptor")
            .field("name", &self.name)
            .field("default_value", &self.default_value)
            .field("read_only", &self.read_only)
            .field("getter_name", &self.getter_name)
            .field("setter_name", &self.setter_name)
            .field("private_name", &self.private_name)
            .finish_non_exhaustive()
    }
}

/// One synthesized attribute of a class.
///
/// Immutable once built. Owned by the metadata record of a single class.
#[derive(Clone)]
pub struct SyntheticMember {
    name:          String,
    default_value: Value,
    contract:      Option<Arc<dyn Contract>>,
    read_only:     bool,
    getter_name:   Option<String>,
    setter_name:   Option<String>,
    private_name:  String
}

impl SyntheticMember {
    /// Validate a descriptor.
    ///
    /// # Errors
    ///
    /// [`SyntheticError::InvalidDescriptor`] if the member name or an
    /// explicit accessor/private name is not an identifier, or the contract
    /// descriptor does not parse.
    pub fn from_descriptor(descriptor: MemberDescriptor) -> Result<Self> {
        let MemberDescriptor {
            name,
            default_value,
            contract,
            read_only,
            getter_name,
            setter_name,
            private_name
        } = descriptor;

        if !is_identifier(&name) {
            return Err(SyntheticError::invalid_descriptor(
                &name,
                "member name must be an identifier"
            ));
        }
        for (role, explicit) in [
            ("getter", &getter_name),
            ("setter", &setter_name),
            ("private", &private_name)
        ] {
            if let Some(explicit) = explicit
                && !is_identifier(explicit)
            {
                return Err(SyntheticError::invalid_descriptor(
                    &name,
                    format!("{role} name `{explicit}` must be an identifier")
                ));
            }
        }

        let contract = match contract {
            None => None,
            Some(ContractSource::Shared(contract)) => Some(contract),
            Some(ContractSource::Descriptor(descriptor)) => {
                let parsed: KindContract = descriptor
                    .parse()
                    .map_err(|reason: String| SyntheticError::invalid_descriptor(&name, reason))?;
                Some(Arc::new(parsed) as Arc<dyn Contract>)
            }
        };

        let private_name = private_name.unwrap_or_else(|| format!("_{name}"));

        Ok(Self {
            name,
            default_value,
            contract,
            read_only,
            getter_name,
            setter_name,
            private_name
        })
    }

    /// Member name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value used when no argument supplies one.
    pub fn default_value(&self) -> &Value {
        &self.default_value
    }

    /// Attached contract, if any.
    pub fn contract(&self) -> Option<&dyn Contract> {
        self.contract.as_deref()
    }

    /// Check if setter generation is suppressed.
    pub const fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Explicit getter name, bypassing the naming convention.
    pub fn getter_name(&self) -> Option<&str> {
        self.getter_name.as_deref()
    }

    /// Explicit setter name, bypassing the naming convention.
    pub fn setter_name(&self) -> Option<&str> {
        self.setter_name.as_deref()
    }

    /// Instance attribute holding the value.
    pub fn private_name(&self) -> &str {
        &self.private_name
    }

    /// Run the contract against a value about to be stored.
    pub(crate) fn check(&self, value: &Value) -> Result<()> {
        let Some(contract) = &self.contract else {
            return Ok(());
        };
        contract
            .check(value)
            .map_err(|reason| SyntheticError::ContractViolation {
                member: self.name.clone(),
                contract: contract.describe(),
                reason
            })
    }
}

impl TryFrom<MemberDescriptor> for SyntheticMember {
    type Error = SyntheticError;

    fn try_from(descriptor: MemberDescriptor) -> Result<Self> {
        Self::from_descriptor(descriptor)
    }
}

impl fmt::Debug for SyntheticMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyntheticMember")
            .field("name", &self.name)
            .field("default_value", &self.default_value)
            .field("contract", &self.contract.as_ref().map(|c| c.describe()))
            .field("read_only", &self.read_only)
            .field("getter_name", &self.getter_name)
            .field("setter_name", &self.setter_name)
            .field("private_name", &self.private_name)
            .finish()
    }
}

/// Check `[A-Za-z_][A-Za-z0-9_]*`.
pub(crate) fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false
    }
}
