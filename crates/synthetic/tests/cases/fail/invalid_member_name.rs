// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use synthetic::Synthetic;

#[derive(Synthetic)]
#[synthesize_member(name = "first name")]
pub struct Person;

fn main() {}
