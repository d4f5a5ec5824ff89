// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use synthetic::Synthetic;

/// The same member declared twice.
#[derive(Synthetic)]
#[synthesize_member(name = "a", default = 1)]
#[synthesize_member(name = "a", default = 2)]
pub struct Twice;

fn main() {}
