// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Declared parameter lists and argument binding.
//!
//! A user-authored initializer states its parameters up front instead of
//! having them discovered at runtime. The synthesized initializer reads the
//! declaration to decide which arguments it may forward.
//!
//! # Binding Rules
//!
//! | Situation | Variadic flag set | Flag not set |
//! |-----------|-------------------|--------------|
//! | Surplus positional values | collected in [`BoundArguments::extra_positional`] | [`UnexpectedPositional`](crate::SyntheticError::UnexpectedPositional) |
//! | Unknown keyword | collected in [`BoundArguments::extra_keywords`] | [`UnexpectedKeyword`](crate::SyntheticError::UnexpectedKeyword) |
//!
//! A parameter filled positionally and by keyword fails with
//! [`MultipleValues`](crate::SyntheticError::MultipleValues); an unfilled
//! parameter without default fails with
//! [`MissingArgument`](crate::SyntheticError::MissingArgument).

use crate::{
    args::Arguments,
    error::{Result, SyntheticError},
    value::Value
};

/// One declared parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    name:    String,
    default: Option<Value>
}

impl Parameter {
    /// Parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Default used when the caller supplies nothing.
    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}

/// Parameter list of an initializer or method.
///
/// # Example
///
/// ```rust
/// use synthetic_core::{Arguments, Signature, Value};
///
/// let signature = Signature::new().param("x").param_with_default("y", 0);
/// let bound = signature.bind("Point", Arguments::new().arg(3)).unwrap();
/// assert_eq!(bound.get("x"), Some(&Value::Int(3)));
/// assert_eq!(bound.get("y"), Some(&Value::Int(0)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Signature {
    params:          Vec<Parameter>,
    variadic_args:   bool,
    variadic_kwargs: bool
}

impl Signature {
    /// Create a signature with no parameters.
    pub const fn new() -> Self {
        Self {
            params:          Vec::new(),
            variadic_args:   false,
            variadic_kwargs: false
        }
    }

    /// Declare a required parameter.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>) -> Self {
        self.params.push(Parameter {
            name:    name.into(),
            default: None
        });
        self
    }

    /// Declare a parameter with a default value.
    #[must_use]
    pub fn param_with_default(mut self, name: impl Into<String>, default: impl Into<Value>) -> Self {
        self.params.push(Parameter {
            name:    name.into(),
            default: Some(default.into())
        });
        self
    }

    /// Accept arbitrary extra positional arguments.
    #[must_use]
    pub const fn variadic_args(mut self) -> Self {
        self.variadic_args = true;
        self
    }

    /// Accept arbitrary extra keyword arguments.
    #[must_use]
    pub const fn variadic_kwargs(mut self) -> Self {
        self.variadic_kwargs = true;
        self
    }

    /// Declared parameters in order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.params
    }

    /// Declared parameter names in order.
    pub fn parameter_names(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(Parameter::name)
    }

    /// Check if a parameter with this name is declared.
    pub fn declares(&self, name: &str) -> bool {
        self.params.iter().any(|param| param.name == name)
    }

    /// Check if extra positional arguments are accepted.
    pub const fn accepts_variadic_args(&self) -> bool {
        self.variadic_args
    }

    /// Check if extra keyword arguments are accepted.
    pub const fn accepts_variadic_kwargs(&self) -> bool {
        self.variadic_kwargs
    }

    /// Bind call arguments to the declared parameters.
    ///
    /// `callable` names the function in error messages.
    ///
    /// # Errors
    ///
    /// See the module documentation for the binding rules.
    pub fn bind(&self, callable: &str, args: Arguments) -> Result<BoundArguments> {
        let (positional, keywords) = args.into_parts();

        if positional.len() > self.params.len() && !self.variadic_args {
            return Err(SyntheticError::UnexpectedPositional {
                callable: callable.to_string(),
                expected: self.params.len(),
                given:    positional.len()
            });
        }

        let mut slots: Vec<Option<Value>> = vec![None; self.params.len()];
        let mut extra_positional = Vec::new();
        for (index, value) in positional.into_iter().enumerate() {
            match slots.get_mut(index) {
                Some(slot) => *slot = Some(value),
                None => extra_positional.push(value)
            }
        }

        let mut extra_keywords = Vec::new();
        for (name, value) in keywords {
            match self.params.iter().position(|param| param.name == name) {
                Some(index) if slots[index].is_some() => {
                    return Err(SyntheticError::MultipleValues {
                        callable:  callable.to_string(),
                        parameter: name
                    });
                }
                Some(index) => slots[index] = Some(value),
                None if self.variadic_kwargs => extra_keywords.push((name, value)),
                None => {
                    return Err(SyntheticError::UnexpectedKeyword {
                        callable: callable.to_string(),
                        keyword:  name
                    });
                }
            }
        }

        let values = self
            .params
            .iter()
            .zip(slots)
            .map(|(param, slot)| {
                slot.or_else(|| param.default.clone())
                    .map(|value| (param.name.clone(), value))
                    .ok_or_else(|| SyntheticError::MissingArgument {
                        callable:  callable.to_string(),
                        parameter: param.name.clone()
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(BoundArguments {
            values,
            extra_positional,
            extra_keywords
        })
    }
}

/// Arguments bound against a [`Signature`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundArguments {
    values:           Vec<(String, Value)>,
    extra_positional: Vec<Value>,
    extra_keywords:   Vec<(String, Value)>
}

impl BoundArguments {
    /// Value bound to a declared parameter.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(param, _)| param == name)
            .map(|(_, value)| value)
    }

    /// Declared parameters with their bound values, in declaration order.
    pub fn values(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Positional values absorbed by the variadic-args flag.
    pub fn extra_positional(&self) -> &[Value] {
        &self.extra_positional
    }

    /// Keyword values absorbed by the variadic-kwargs flag.
    pub fn extra_keywords(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.extra_keywords
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binds_positional_then_keywords() {
        let signature = Signature::new().param("x").param("y");
        let bound = signature
            .bind("f", Arguments::new().arg(1).kwarg("y", 2))
            .unwrap();
        assert_eq!(bound.get("x"), Some(&Value::Int(1)));
        assert_eq!(bound.get("y"), Some(&Value::Int(2)));
    }

    #[test]
    fn surplus_positional_needs_variadic_args() {
        let strict = Signature::new().param("x");
        let err = strict.bind("f", Arguments::new().arg(1).arg(2)).unwrap_err();
        assert_eq!(
            err,
            SyntheticError::UnexpectedPositional {
                callable: "f".to_string(),
                expected: 1,
                given:    2
            }
        );

        let variadic = Signature::new().param("x").variadic_args();
        let bound = variadic.bind("f", Arguments::new().arg(1).arg(2)).unwrap();
        assert_eq!(bound.extra_positional(), &[Value::Int(2)]);
    }

    #[test]
    fn unknown_keyword_needs_variadic_kwargs() {
        let strict = Signature::new();
        assert!(matches!(
            strict.bind("f", Arguments::new().kwarg("z", 1)),
            Err(SyntheticError::UnexpectedKeyword { .. })
        ));

        let variadic = Signature::new().variadic_kwargs();
        let bound = variadic.bind("f", Arguments::new().kwarg("z", 1)).unwrap();
        let extra: Vec<_> = bound.extra_keywords().collect();
        assert_eq!(extra, vec![("z", &Value::Int(1))]);
    }

    #[test]
    fn parameter_filled_twice() {
        let signature = Signature::new().param("x");
        let err = signature
            .bind("f", Arguments::new().arg(1).kwarg("x", 2))
            .unwrap_err();
        assert!(matches!(err, SyntheticError::MultipleValues { parameter, .. } if parameter == "x"));
    }

    #[test]
    fn missing_argument_uses_default_or_fails() {
        let signature = Signature::new().param("x").param_with_default("y", "d");
        let err = signature.bind("f", Arguments::new()).unwrap_err();
        assert!(matches!(err, SyntheticError::MissingArgument { parameter, .. } if parameter == "x"));

        let bound = signature.bind("f", Arguments::new().arg(0)).unwrap();
        assert_eq!(bound.get("y"), Some(&Value::from("d")));
    }
}
