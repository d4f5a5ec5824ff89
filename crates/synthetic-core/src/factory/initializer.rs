// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Synthesized initializer.
//!
//! On every call with positional arguments `A` and keywords `K`:
//!
//! 1. `A` is paired with the expected names: the original initializer's
//!    parameters followed by the member names it does not declare. Surplus
//!    values stay unnamed.
//! 2. Each member is populated in declaration order. With argument
//!    consumption on, the value is taken from `K`, then from the pairing,
//!    then from the member default. Otherwise the default is used.
//! 3. Arguments naming a member the original does not declare are dropped
//!    from forwarding: positional ones unless the original takes extra
//!    positional arguments, keyword ones unless it takes extra keywords.
//! 4. The original initializer runs with what is left.

use tracing::trace;

use crate::{
    args::Arguments,
    class::{Class, Initializer},
    error::Result,
    instance::Instance,
    member::SyntheticMember,
    metadata::SyntheticMetaData,
    signature::Signature,
    value::Value
};

/// Positional value paired with the parameter or member name it fills.
type PositionalPair = (Option<String>, Value);

/// Snapshot of the metadata a synthesized initializer works from.
struct InitializerPlan {
    class_name:        String,
    members:           Vec<SyntheticMember>,
    original:          Option<Initializer>,
    original_params:   Vec<String>,
    variadic_args:     bool,
    variadic_kwargs:   bool,
    expected_names:    Vec<String>,
    consume_arguments: bool,
    enforce_contracts: bool
}

impl InitializerPlan {
    fn new(class_name: &str, metadata: &SyntheticMetaData, enforce_contracts: bool) -> Self {
        let original = metadata.original_initializer().cloned();
        let (original_params, variadic_args, variadic_kwargs) = match &original {
            Some(initializer) => {
                let signature = initializer.signature();
                (
                    signature.parameter_names().map(str::to_string).collect(),
                    signature.accepts_variadic_args(),
                    signature.accepts_variadic_kwargs()
                )
            }
            None => (Vec::new(), false, false)
        };

        let mut expected_names: Vec<String> = original_params.clone();
        for member in metadata.members() {
            if !expected_names.iter().any(|name| name == member.name()) {
                expected_names.push(member.name().to_string());
            }
        }

        Self {
            class_name: class_name.to_string(),
            members: metadata.members().to_vec(),
            original,
            original_params,
            variadic_args,
            variadic_kwargs,
            expected_names,
            consume_arguments: metadata.consumes_arguments(),
            enforce_contracts
        }
    }

    fn run(&self, instance: &mut Instance, args: Arguments) -> Result<()> {
        let (positional, keywords) = args.into_parts();
        let pairs = self.pair_positional(positional);

        for member in &self.members {
            let value = self.resolve(member, &pairs, &keywords)?;
            instance.set_attribute(member.private_name(), value);
        }

        let forwarded = self.forwarding(pairs, keywords);
        match &self.original {
            Some(original) => original.call(&self.class_name, instance, forwarded),
            None => Signature::new().bind(&self.class_name, forwarded).map(drop)
        }
    }

    fn pair_positional(&self, positional: Vec<Value>) -> Vec<PositionalPair> {
        let mut names = self.expected_names.iter();
        positional
            .into_iter()
            .map(|value| (names.next().cloned(), value))
            .collect()
    }

    fn resolve(
        &self,
        member: &SyntheticMember,
        pairs: &[PositionalPair],
        keywords: &[(String, Value)]
    ) -> Result<Value> {
        if !self.consume_arguments {
            return Ok(member.default_value().clone());
        }

        let name = member.name();
        let supplied = keywords
            .iter()
            .find(|(keyword, _)| keyword == name)
            .map(|(_, value)| value)
            .or_else(|| {
                pairs.iter().find_map(|(pair_name, value)| {
                    (pair_name.as_deref() == Some(name)).then_some(value)
                })
            });

        match supplied {
            Some(value) => {
                if self.enforce_contracts {
                    member.check(value)?;
                }
                Ok(value.clone())
            }
            None => Ok(member.default_value().clone())
        }
    }

    fn forwarding(&self, mut pairs: Vec<PositionalPair>, mut keywords: Vec<(String, Value)>) -> Arguments {
        for member in &self.members {
            let name = member.name();
            if self.original_params.iter().any(|param| param == name) {
                continue;
            }
            if !self.variadic_args {
                pairs.retain(|(pair_name, _)| pair_name.as_deref() != Some(name));
            }
            if !self.variadic_kwargs {
                keywords.retain(|(keyword, _)| keyword != name);
            }
        }
        Arguments::from_parts(pairs.into_iter().map(|(_, value)| value).collect(), keywords)
    }
}

/// Replace the class initializer with one built from `metadata`.
pub(super) fn install(class: &mut Class, metadata: &SyntheticMetaData, enforce_contracts: bool) {
    let plan = InitializerPlan::new(class.name(), metadata, enforce_contracts);
    trace!(
        class = class.name(),
        expected = ?plan.expected_names,
        consume_arguments = plan.consume_arguments,
        "installing synthesized initializer"
    );
    class.define_initializer(Initializer::synthesized(move |instance, args| plan.run(instance, args)));
}
