// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use synthetic::{NamingConvention, Synthetic, SyntheticClass, SyntheticDecoratorFactory};

pub struct Verbose;

impl NamingConvention for Verbose {
    fn getter_name(&self, member: &str) -> String {
        format!("read_{member}")
    }

    fn setter_name(&self, member: &str) -> String {
        format!("write_{member}")
    }
}

#[derive(Synthetic)]
#[naming_convention(underscore)]
#[synthesize_member(name = "first_name", default = "ada")]
pub struct Person;

#[derive(Synthetic)]
#[naming_convention(Verbose)]
#[synthesize_member(name = "value")]
pub struct Cell;

fn main() {
    let mut factory = SyntheticDecoratorFactory::new();

    let person = Person::synthesize(&mut factory).unwrap();
    assert_eq!(person.method_names(), ["get_first_name", "set_first_name"]);

    let cell = Cell::synthesize(&mut factory).unwrap();
    assert_eq!(cell.method_names(), ["read_value", "write_value"]);
}
