// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use synthetic::{
    Arguments, Class, Initializer, Signature, Synthetic, SyntheticClass,
    SyntheticDecoratorFactory, Value
};

#[derive(Synthetic)]
#[synthetic(name = "Greeter", body = Self::define)]
#[synthesize_member(name = "name", default = "anon")]
#[synthesize_member(name = "greeting", default = "hello")]
#[synthesize_constructor]
pub struct GreeterDef;

impl GreeterDef {
    fn define(class: &mut Class) {
        class.define_initializer(Initializer::new(
            Signature::new().param_with_default("greeting", "hi"),
            |instance, args| {
                let greeting = args.get("greeting").cloned().unwrap_or_default();
                instance.set_attribute("seen_greeting", greeting);
                Ok(())
            }
        ));
        class.define_method(
            "getName",
            synthetic::Method::new(|_, _| Ok(Value::from("user-authored")))
        );
    }
}

fn main() {
    let mut factory = SyntheticDecoratorFactory::new();
    let class = GreeterDef::synthesize(&mut factory).unwrap();
    assert_eq!(class.name(), "Greeter");

    let mut greeter = class
        .instantiate(Arguments::new().kwarg("greeting", "hey").kwarg("name", "ada"))
        .unwrap();
    assert_eq!(greeter.attribute("seen_greeting"), Some(&Value::from("hey")));
    assert_eq!(greeter.attribute("_name"), Some(&Value::from("ada")));
    assert_eq!(
        class.invoke(&mut greeter, "getName", Arguments::new()).unwrap(),
        Value::from("user-authored")
    );
}
