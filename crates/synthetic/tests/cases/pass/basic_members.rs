// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use synthetic::{Arguments, Synthetic, SyntheticClass, SyntheticDecoratorFactory, Value};

#[derive(Synthetic)]
#[synthesize_member(name = "a", default = 1)]
#[synthesize_member(name = "b", default = 2)]
#[synthesize_constructor]
pub struct Pair;

fn main() {
    let mut factory = SyntheticDecoratorFactory::new();
    let class = Pair::synthesize(&mut factory).unwrap();
    assert_eq!(Pair::NAME, "Pair");

    let mut pair = class.instantiate(Arguments::new().arg(10)).unwrap();
    assert_eq!(class.invoke(&mut pair, "getA", Arguments::new()).unwrap(), Value::Int(10));
    assert_eq!(class.invoke(&mut pair, "getB", Arguments::new()).unwrap(), Value::Int(2));
}
