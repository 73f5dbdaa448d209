/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::coverage::*;
use crate::fixed::*;

use std::mem;

///
/// Estimates the displacement from the centre of an edge pixel to the nearest
/// point on the outline
///
/// Coverage alone cannot tell how far the outline is: a half-covered pixel
/// could be bisected by an edge at any angle. A Sobel filter over the 3x3
/// coverage neighbourhood recovers the edge direction, and the coverage value
/// is then inverted through the known area-vs-distance relationship for a
/// straight edge crossing a unit pixel at that angle.
///
/// This follows the anti-aliased Euclidean distance transform construction of
/// Gustavson and Strand (<http://weber.itn.liu.se/~stegu/aadist/edtaa_preprint.pdf>),
/// carried out entirely in 16.16 fixed point.
///
/// This is the expensive routine of the crate, so it must only be called for
/// pixels that `is_edge` classified as edges. A full 3x3 neighbourhood is
/// required: pixels on the outermost ring of the grid produce the zero
/// displacement instead. Bitmaps padded by the spread never have edge pixels
/// there.
///
pub fn estimate_edge_distance(coverage: &CoverageMap, x: usize, y: usize) -> F16D16Vec2 {
    if x < 1 || y < 1 || x + 1 >= coverage.width() || y + 1 >= coverage.height() {
        return F16D16Vec2::ZERO;
    }

    // The 3x3 neighbourhood, scaled into the fixed point domain
    let nw = F16D16::from_coverage(coverage.sample(x - 1, y - 1));
    let n = F16D16::from_coverage(coverage.sample(x, y - 1));
    let ne = F16D16::from_coverage(coverage.sample(x + 1, y - 1));
    let w = F16D16::from_coverage(coverage.sample(x - 1, y));
    let alpha = F16D16::from_coverage(coverage.sample(x, y));
    let e = F16D16::from_coverage(coverage.sample(x + 1, y));
    let sw = F16D16::from_coverage(coverage.sample(x - 1, y + 1));
    let s = F16D16::from_coverage(coverage.sample(x, y + 1));
    let se = F16D16::from_coverage(coverage.sample(x + 1, y + 1));

    // Sobel gradient, with the orthogonal taps weighted by sqrt(2)
    let gradient = F16D16Vec2 {
        x: -nw - w * F16D16::SQRT_2 - sw + ne + e * F16D16::SQRT_2 + se,
        y: -nw - n * F16D16::SQRT_2 - ne + sw + s * F16D16::SQRT_2 + se,
    };
    let gradient = gradient.normalize();

    let dist = if gradient.x == F16D16::ZERO || gradient.y == F16D16::ZERO {
        // Axis-aligned edge: coverage maps straight to distance
        F16D16::HALF - alpha
    } else {
        // Fold the gradient into the first octant, gx >= gy >= 0: the
        // area-vs-distance relationship only depends on the unsigned angle
        let mut gx = gradient.x.abs();
        let mut gy = gradient.y.abs();

        if gx < gy {
            mem::swap(&mut gx, &mut gy);
        }

        // Below a1 the covered region is a corner triangle, above 1-a1 the
        // uncovered region is; in between the edge crosses opposite sides
        let a1 = (gy / gx) / 2;

        if alpha < a1 {
            (gx + gy) / 2 - (gx * (gy * alpha) * 2).sqrt()
        } else if alpha < F16D16::ONE - a1 {
            gx * (F16D16::HALF - alpha)
        } else {
            -((gx + gy) / 2) + (gx * (gy * (F16D16::ONE - alpha)) * 2).sqrt()
        }
    };

    // Push the unit gradient out to the estimated distance
    F16D16Vec2 {
        x: gradient.x * dist,
        y: gradient.y * dist,
    }
}
