// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Decorator factory configuration.
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `naming_convention` | [`CamelCase`] | Convention given to newly created metadata |
//! | `enforce_contracts` | `true` | Check contracts in setters and for caller-supplied initializer arguments |

use std::{fmt, sync::Arc};

use crate::naming::{CamelCase, NamingConvention};

/// Settings shared by every class a factory decorates.
///
/// # Example
///
/// ```rust
/// use synthetic_core::{SyntheticConfig, SyntheticDecoratorFactory, Underscore};
///
/// let factory = SyntheticDecoratorFactory::with_config(
///     SyntheticConfig::new()
///         .naming_convention(Underscore)
///         .enforce_contracts(false)
/// );
/// assert!(!factory.config().enforces_contracts());
/// ```
#[derive(Clone)]
pub struct SyntheticConfig {
    naming_convention: Arc<dyn NamingConvention>,
    enforce_contracts: bool
}

impl SyntheticConfig {
    /// Configuration with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Default naming convention for new metadata.
    #[must_use]
    pub fn naming_convention(mut self, convention: impl NamingConvention + 'static) -> Self {
        self.naming_convention = Arc::new(convention);
        self
    }

    /// Toggle contract enforcement.
    #[must_use]
    pub const fn enforce_contracts(mut self, enforce: bool) -> Self {
        self.enforce_contracts = enforce;
        self
    }

    /// Default naming convention for new metadata.
    pub fn default_naming_convention(&self) -> Arc<dyn NamingConvention> {
        Arc::clone(&self.naming_convention)
    }

    /// Check if contracts are enforced.
    pub const fn enforces_contracts(&self) -> bool {
        self.enforce_contracts
    }
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            naming_convention: Arc::new(CamelCase),
            enforce_contracts: true
        }
    }
}

impl fmt::Debug for SyntheticConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyntheticConfig")
            .field("naming_convention", &self.naming_convention.name())
            .field("enforce_contracts", &self.enforce_contracts)
            .finish()
    }
}
