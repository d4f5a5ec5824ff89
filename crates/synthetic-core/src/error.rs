// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error taxonomy for decoration and instantiation.
//!
//! Errors fall into two groups:
//!
//! | Raised at | Variants |
//! |-----------|----------|
//! | Decoration time | [`InvalidDescriptor`](SyntheticError::InvalidDescriptor), [`DuplicateMember`](SyntheticError::DuplicateMember), [`SharedStorage`](SyntheticError::SharedStorage), [`AccessorCollision`](SyntheticError::AccessorCollision) |
//! | Call time | argument binding, [`ContractViolation`](SyntheticError::ContractViolation), [`UnknownMethod`](SyntheticError::UnknownMethod), [`MissingAttribute`](SyntheticError::MissingAttribute), [`Custom`](SyntheticError::Custom) |
//!
//! An accessor name that collides with a user-authored method is not an
//! error: the user method is kept and the accessor is skipped.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SyntheticError>;

/// Errors produced by decorators, synthesized initializers and accessors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyntheticError {
    /// Member declaration arguments are malformed.
    #[error("invalid descriptor for member `{member}`: {reason}")]
    InvalidDescriptor {
        /// Member name as written in the declaration.
        member: String,
        /// What is wrong with it.
        reason: String
    },

    /// The class already carries a synthetic member with this name.
    #[error("class `{class}` already declares a synthetic member named `{member}`")]
    DuplicateMember {
        /// Class being decorated.
        class:  String,
        /// Repeated member name.
        member: String
    },

    /// Two members would store their values in the same attribute.
    #[error("members `{member}` and `{other}` of `{class}` share storage attribute `{attribute}`")]
    SharedStorage {
        /// Class being decorated.
        class:     String,
        /// Contested attribute.
        attribute: String,
        /// Member being declared.
        member:    String,
        /// Member already using the attribute.
        other:     String
    },

    /// Two members would get an accessor with the same name.
    #[error("members `{member}` and `{other}` of `{class}` both generate accessor `{accessor}`")]
    AccessorCollision {
        /// Class being decorated.
        class:    String,
        /// Contested accessor name.
        accessor: String,
        /// Member whose accessor collides.
        member:   String,
        /// Member that generated the name first.
        other:    String
    },

    /// No method with this name is attached to the class.
    #[error("`{class}` has no method named `{method}`")]
    UnknownMethod {
        /// Class the lookup ran against.
        class:  String,
        /// Requested method name.
        method: String
    },

    /// An instance attribute was read before anything stored it.
    #[error("`{class}` instance has no attribute `{attribute}`")]
    MissingAttribute {
        /// Class of the instance.
        class:     String,
        /// Attribute that was read.
        attribute: String
    },

    /// More positional arguments than the signature declares.
    #[error("{callable}() takes {expected} positional arguments but {given} were given")]
    UnexpectedPositional {
        /// Method or class name.
        callable: String,
        /// Declared positional parameter count.
        expected: usize,
        /// Supplied positional argument count.
        given:    usize
    },

    /// Keyword argument the signature neither declares nor absorbs.
    #[error("{callable}() got an unexpected keyword argument `{keyword}`")]
    UnexpectedKeyword {
        /// Method or class name.
        callable: String,
        /// Offending keyword.
        keyword:  String
    },

    /// Parameter supplied both positionally and by keyword.
    #[error("{callable}() got multiple values for argument `{parameter}`")]
    MultipleValues {
        /// Method or class name.
        callable:  String,
        /// Parameter filled twice.
        parameter: String
    },

    /// Parameter without default received no value.
    #[error("{callable}() missing required argument `{parameter}`")]
    MissingArgument {
        /// Method or class name.
        callable:  String,
        /// Unfilled parameter.
        parameter: String
    },

    /// A value was rejected by the member's contract.
    #[error("value for `{member}` violates contract `{contract}`: {reason}")]
    ContractViolation {
        /// Member the value was meant for.
        member:   String,
        /// Contract description.
        contract: String,
        /// Rejection reason reported by the contract.
        reason:   String
    },

    /// Error raised by a user-authored method or initializer.
    #[error("{0}")]
    Custom(String)
}

impl SyntheticError {
    /// Create a [`SyntheticError::Custom`] from any message.
    ///
    /// User-authored methods and initializers use this to fail a call.
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }

    /// Check if the error is raised while decorating rather than calling.
    #[must_use]
    pub const fn is_decoration_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidDescriptor { .. }
                | Self::DuplicateMember { .. }
                | Self::SharedStorage { .. }
                | Self::AccessorCollision { .. }
        )
    }

    pub(crate) fn invalid_descriptor(member: &str, reason: impl Into<String>) -> Self {
        Self::InvalidDescriptor {
            member: member.to_string(),
            reason: reason.into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = SyntheticError::UnexpectedKeyword {
            callable: "Point".to_string(),
            keyword:  "z".to_string()
        };
        assert_eq!(
            err.to_string(),
            "Point() got an unexpected keyword argument `z`"
        );

        let err = SyntheticError::custom("boom");
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn decoration_errors_are_classified() {
        assert!(SyntheticError::invalid_descriptor("a", "bad").is_decoration_error());
        assert!(
            SyntheticError::DuplicateMember {
                class:  "Point".to_string(),
                member: "a".to_string()
            }
            .is_decoration_error()
        );
        assert!(
            SyntheticError::AccessorCollision {
                class:    "Point".to_string(),
                accessor: "getB".to_string(),
                member:   "b".to_string(),
                other:    "a".to_string()
            }
            .is_decoration_error()
        );
        assert!(!SyntheticError::custom("x").is_decoration_error());
    }
}
