/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::coverage::*;

/// The neighbours inspected when deciding whether a fully covered pixel
/// touches the outside
const NEIGHBOUR_OFFSETS: [(i32, i32); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

///
/// True if the pixel at (x, y) lies on or immediately beside the outline
///
/// A fully outside pixel (coverage 0) is never an edge, even when it touches
/// the outline's pixels. A partially covered pixel always is: the outline
/// provably passes through it. A fully covered pixel is an edge when any
/// in-bounds neighbour is fully outside, or when it sits on the bitmap border,
/// where it cannot be proven to be deep interior.
///
/// This is a pure predicate with no side effects; it only ever reads the pixel
/// itself and its 8 neighbours.
///
pub fn is_edge(coverage: &CoverageMap, x: usize, y: usize) -> bool {
    let alpha = coverage.sample(x, y);

    if alpha == 0 {
        return false;
    }

    if alpha < 255 {
        return true;
    }

    let mut num_neighbours = 0;

    for &(dx, dy) in NEIGHBOUR_OFFSETS.iter() {
        let nx = x as i64 + dx as i64;
        let ny = y as i64 + dy as i64;

        if nx >= 0 && ny >= 0 && (nx as usize) < coverage.width() && (ny as usize) < coverage.height() {
            num_neighbours += 1;

            if coverage.sample(nx as usize, ny as usize) == 0 {
                return true;
            }
        }
    }

    num_neighbours != 8
}
