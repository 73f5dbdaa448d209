/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Coverage sample grids
//!
//! The input to the distance field pass: a dense grid of anti-aliased coverage
//! values, as produced by an ordinary 8-bit rasterizer. The grid is borrowed
//! and never mutated while a pass runs.
//!

mod coverage_map;

pub use self::coverage_map::*;
