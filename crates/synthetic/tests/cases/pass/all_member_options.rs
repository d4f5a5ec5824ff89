// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use synthetic::{Arguments, Synthetic, SyntheticClass, SyntheticDecoratorFactory, Value};

#[derive(Synthetic)]
#[synthesize_member(
    name = "size",
    default = 3,
    contract = "int",
    getter = "dimension",
    setter = "resize",
    private = "__size"
)]
#[synthesize_member(name = "label", default = "box", contract = "str|None", read_only)]
#[synthesize_member(name = "slot", default = None)]
#[synthesize_member(name = "tags", default = vec!["a", "b"], contract = "list")]
#[synthesize_constructor]
pub struct Shape;

fn main() {
    let mut factory = SyntheticDecoratorFactory::new();
    let class = Shape::synthesize(&mut factory).unwrap();

    assert!(class.has_method("dimension"));
    assert!(class.has_method("resize"));
    assert!(class.has_method("getLabel"));
    assert!(!class.has_method("setLabel"));

    let mut shape = class.instantiate(Arguments::new()).unwrap();
    assert_eq!(shape.attribute("__size"), Some(&Value::Int(3)));
    assert_eq!(shape.attribute("_slot"), Some(&Value::None));
    assert_eq!(
        class.invoke(&mut shape, "getTags", Arguments::new()).unwrap(),
        Value::from(vec!["a", "b"])
    );
}
