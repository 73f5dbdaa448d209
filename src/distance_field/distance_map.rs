/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::edge_distance::*;

///
/// A dense row-major grid of distance records, one per coverage sample
///
/// The whole grid is allocated before a pass begins and every record is
/// overwritten exactly once by `approximate_edge_distances`, so no allocation
/// happens inside the per-pixel loop.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceMap {
    cells: Vec<EdgeDistance>,
    width: usize,
    height: usize,
}

impl DistanceMap {
    ///
    /// Allocates a distance map for a grid of the given size, with every
    /// record zeroed
    ///
    pub fn new(width: usize, height: usize) -> DistanceMap {
        DistanceMap {
            cells: vec![EdgeDistance::ZERO; width * height],
            width,
            height,
        }
    }

    /// The width of the grid in pixels
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// The number of rows in the grid
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    ///
    /// The record at a pixel position (panics if outside of the grid)
    ///
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> &EdgeDistance {
        &self.cells[y * self.width + x]
    }

    ///
    /// A mutable reference to the record at a pixel position
    ///
    #[inline]
    pub fn get_mut(&mut self, x: usize, y: usize) -> &mut EdgeDistance {
        &mut self.cells[y * self.width + x]
    }

    ///
    /// All of the records in row-major order
    ///
    #[inline]
    pub fn cells(&self) -> &[EdgeDistance] {
        &self.cells
    }

    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [EdgeDistance] {
        &mut self.cells
    }
}
