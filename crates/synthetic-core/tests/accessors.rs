// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generated getters and setters across naming conventions.

use synthetic_core::{
    Arguments, CamelCase, Class, Decorator, MemberDescriptor, NamingConvention, SyntheticConfig,
    SyntheticDecoratorFactory, SyntheticError, Underscore, Value
};

fn member(descriptor: MemberDescriptor) -> Decorator {
    Decorator::member(descriptor).unwrap()
}

#[test]
fn getter_and_setter_use_private_storage() {
    let mut factory = SyntheticDecoratorFactory::new();
    let mut class = Class::new("Account");
    factory
        .decorate(&mut class, &[member(MemberDescriptor::new("balance").default_value(0))])
        .unwrap();

    let mut account = class.instantiate(Arguments::new()).unwrap();
    assert_eq!(account.attribute("_balance"), Some(&Value::Int(0)));

    let returned = class
        .invoke(&mut account, "setBalance", Arguments::new().arg(250))
        .unwrap();
    assert_eq!(returned, Value::None);
    assert_eq!(account.attribute("_balance"), Some(&Value::Int(250)));
    assert_eq!(
        class.invoke(&mut account, "getBalance", Arguments::new()).unwrap(),
        Value::Int(250)
    );
}

#[test]
fn custom_private_and_accessor_names() {
    let mut factory = SyntheticDecoratorFactory::new();
    let mut class = Class::new("Shape");
    let descriptor = MemberDescriptor::new("size")
        .default_value(3)
        .private_name("__size")
        .getter_name("dimension")
        .setter_name("resize");
    factory.decorate(&mut class, &[member(descriptor)]).unwrap();

    assert!(class.has_method("dimension"));
    assert!(class.has_method("resize"));
    assert!(!class.has_method("getSize"));

    let mut shape = class.instantiate(Arguments::new()).unwrap();
    class
        .invoke(&mut shape, "resize", Arguments::new().kwarg("value", 9))
        .unwrap();
    assert_eq!(shape.attribute("__size"), Some(&Value::Int(9)));
}

#[test]
fn read_only_member_has_no_setter_under_any_convention() {
    let mut factory = SyntheticDecoratorFactory::new();
    let mut class = Class::new("Token");
    factory
        .decorate(&mut class, &[
            Decorator::naming_convention(Underscore),
            member(MemberDescriptor::new("secret").default_value("s").read_only(true)),
            Decorator::naming_convention(CamelCase)
        ])
        .unwrap();

    assert!(class.has_method("get_secret"));
    assert!(!class.has_method("set_secret"));
    assert!(!class.has_method("setSecret"));
    assert!(!class.has_method("getSecret"));
}

#[test]
fn user_method_is_never_replaced_or_removed() {
    let mut factory = SyntheticDecoratorFactory::new();
    let mut class = Class::new("Greeter")
        .with_method("getName", |_, _| Ok(Value::from("user-authored")));
    factory
        .decorate(&mut class, &[
            Decorator::naming_convention(Underscore),
            member(MemberDescriptor::new("name").default_value("anon"))
        ])
        .unwrap();

    // Generated under CamelCase first, then switched away.
    assert!(class.has_method("getName"));
    assert!(class.has_method("get_name"));
    assert!(!class.has_method("setName"));

    let mut greeter = class.instantiate(Arguments::new()).unwrap();
    assert_eq!(
        class.invoke(&mut greeter, "getName", Arguments::new()).unwrap(),
        Value::from("user-authored")
    );
    assert_eq!(
        class.invoke(&mut greeter, "get_name", Arguments::new()).unwrap(),
        Value::from("anon")
    );
}

#[test]
fn user_setter_survives_generated_getter() {
    let mut factory = SyntheticDecoratorFactory::new();
    let mut class = Class::new("Gauge").with_method("setLevel", |instance, args| {
        let level = args.positional().first().cloned().unwrap_or_default();
        let clamped = level.as_int().map(|n| n.clamp(0, 10)).unwrap_or_default();
        instance.set_attribute("_level", clamped);
        Ok(Value::None)
    });
    factory
        .decorate(&mut class, &[member(MemberDescriptor::new("level").default_value(5))])
        .unwrap();

    let mut gauge = class.instantiate(Arguments::new()).unwrap();
    class
        .invoke(&mut gauge, "setLevel", Arguments::new().arg(40))
        .unwrap();
    assert_eq!(
        class.invoke(&mut gauge, "getLevel", Arguments::new()).unwrap(),
        Value::Int(10)
    );
}

#[test]
fn switching_convention_moves_accessors() {
    let mut factory = SyntheticDecoratorFactory::new();
    let mut class = Class::new("Person");
    factory
        .decorate(&mut class, &[
            member(MemberDescriptor::new("first_name").default_value("ada")),
            member(MemberDescriptor::new("age").default_value(36))
        ])
        .unwrap();
    assert_eq!(class.method_names(), ["getAge", "getFirst_name", "setAge", "setFirst_name"]);

    factory
        .apply(&mut class, &Decorator::naming_convention(Underscore))
        .unwrap();
    assert_eq!(class.method_names(), ["get_age", "get_first_name", "set_age", "set_first_name"]);
    assert_eq!(factory.metadata(&class).unwrap().naming_convention().name(), "underscore");
}

#[test]
fn explicit_accessor_names_ignore_convention() {
    let mut factory = SyntheticDecoratorFactory::new();
    let mut class = Class::new("Timer");
    factory
        .decorate(&mut class, &[
            Decorator::naming_convention(Underscore),
            member(MemberDescriptor::new("elapsed").default_value(0).getter_name("elapsed"))
        ])
        .unwrap();

    assert!(class.has_method("elapsed"));
    assert!(class.has_method("set_elapsed"));
    assert!(!class.has_method("setElapsed"));
}

#[test]
fn custom_naming_convention() {
    struct Verbose;

    impl NamingConvention for Verbose {
        fn getter_name(&self, member: &str) -> String {
            format!("read_{member}")
        }

        fn setter_name(&self, member: &str) -> String {
            format!("write_{member}")
        }
    }

    let mut factory = SyntheticDecoratorFactory::with_config(
        SyntheticConfig::new().naming_convention(Verbose)
    );
    let mut class = Class::new("Cell");
    factory
        .decorate(&mut class, &[member(MemberDescriptor::new("value"))])
        .unwrap();
    assert_eq!(class.method_names(), ["read_value", "write_value"]);
}

#[test]
fn getter_rejects_arguments() {
    let mut factory = SyntheticDecoratorFactory::new();
    let mut class = Class::new("Box");
    factory
        .decorate(&mut class, &[member(MemberDescriptor::new("item"))])
        .unwrap();

    let mut boxed = class.instantiate(Arguments::new()).unwrap();
    assert!(matches!(
        class.invoke(&mut boxed, "getItem", Arguments::new().arg(1)),
        Err(SyntheticError::UnexpectedPositional { .. })
    ));
    assert!(matches!(
        class.invoke(&mut boxed, "setItem", Arguments::new()),
        Err(SyntheticError::MissingArgument { .. })
    ));
}

#[test]
fn getter_reports_missing_storage() {
    let mut factory = SyntheticDecoratorFactory::new();
    let mut class = Class::new("Lazy");
    factory
        .decorate(&mut class, &[member(MemberDescriptor::new("cache"))])
        .unwrap();

    // An instance created outside the synthesized initializer.
    let other = Class::new("Lazy");
    let mut bare = other.instantiate(Arguments::new()).unwrap();
    let err = class
        .invoke(&mut bare, "getCache", Arguments::new())
        .unwrap_err();
    assert_eq!(
        err,
        SyntheticError::MissingAttribute {
            class:     "Lazy".to_string(),
            attribute: "_cache".to_string()
        }
    );
}

#[test]
fn similar_member_names_keep_separate_accessors() {
    let conventions: [(Decorator, [&str; 4]); 2] = [
        (Decorator::naming_convention(CamelCase), ["getAB", "getA_b", "setAB", "setA_b"]),
        (Decorator::naming_convention(Underscore), [
            "get_aB", "get_a_b", "set_aB", "set_a_b"
        ])
    ];
    for (convention, expected) in conventions {
        let mut factory = SyntheticDecoratorFactory::new();
        let mut class = Class::new("Pair");
        factory
            .decorate(&mut class, &[
                member(MemberDescriptor::new("a_b").default_value(1)),
                member(MemberDescriptor::new("aB").default_value(2)),
                convention
            ])
            .unwrap();
        assert_eq!(class.method_names(), expected);

        let mut pair = class.instantiate(Arguments::new()).unwrap();
        let (snake, camel) = (expected[1], expected[0]);
        assert_eq!(class.invoke(&mut pair, snake, Arguments::new()).unwrap(), Value::Int(1));
        assert_eq!(class.invoke(&mut pair, camel, Arguments::new()).unwrap(), Value::Int(2));
    }
}

#[test]
fn explicit_getter_cannot_take_another_members_accessor() {
    let mut factory = SyntheticDecoratorFactory::new();
    let mut class = Class::new("Clash");
    let err = factory
        .decorate(&mut class, &[
            member(MemberDescriptor::new("a").default_value(1).getter_name("getB")),
            member(MemberDescriptor::new("b").default_value(2))
        ])
        .unwrap_err();
    assert_eq!(
        err,
        SyntheticError::AccessorCollision {
            class:    "Clash".to_string(),
            accessor: "getB".to_string(),
            member:   "b".to_string(),
            other:    "a".to_string()
        }
    );

    assert_eq!(class.method_names(), ["getB", "setB"]);
    let mut clash = class.instantiate(Arguments::new()).unwrap();
    assert_eq!(class.invoke(&mut clash, "getB", Arguments::new()).unwrap(), Value::Int(2));
    assert_eq!(clash.attribute("_a"), None);
}

#[test]
fn convention_switch_that_would_collide_is_rejected() {
    struct Folding;

    impl NamingConvention for Folding {
        fn getter_name(&self, member: &str) -> String {
            format!("get{}", member.replace('_', "").to_lowercase())
        }

        fn setter_name(&self, member: &str) -> String {
            format!("set{}", member.replace('_', "").to_lowercase())
        }
    }

    let mut factory = SyntheticDecoratorFactory::new();
    let mut class = Class::new("Pair");
    factory
        .decorate(&mut class, &[
            member(MemberDescriptor::new("a_b")),
            member(MemberDescriptor::new("aB"))
        ])
        .unwrap();

    let err = factory
        .apply(&mut class, &Decorator::naming_convention(Folding))
        .unwrap_err();
    assert!(matches!(err, SyntheticError::AccessorCollision { ref accessor, .. } if accessor == "getab"));
    assert_eq!(class.method_names(), ["getAB", "getA_b", "setAB", "setA_b"]);
    assert_eq!(factory.metadata(&class).unwrap().naming_convention().name(), "camel_case");
}
