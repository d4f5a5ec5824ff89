// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use synthetic::Synthetic;

/// `a` stores into the attribute that belongs to `b`.
#[derive(Synthetic)]
#[synthesize_member(name = "a", private = "_b")]
#[synthesize_member(name = "b")]
pub struct Shared;

fn main() {}
