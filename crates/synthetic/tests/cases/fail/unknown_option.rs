// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use synthetic::Synthetic;

#[derive(Synthetic)]
#[synthesize_member(name = "a", writable)]
pub struct Unknown;

fn main() {}
