/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::consts::*;
use crate::fixed::*;

///
/// The per-pixel result of the edge approximation pass
///
/// Edge pixels carry an estimate of the displacement to the nearest outline
/// point; every other pixel carries a 'far' placeholder that a distance
/// propagation pass treats as unresolved.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(C)]
pub struct EdgeDistance {
    /// The length of `near` under the distance metric the crate was built with
    pub dist: F16D16,

    /// Displacement from the pixel centre to the nearest point on the outline
    pub near: F16D16Vec2,

    /// The coverage sample this pixel had in the source bitmap (reused later
    /// for sign assignment)
    pub alpha: u8,
}

impl EdgeDistance {
    /// An all-zero record, the state of a freshly allocated distance map
    pub const ZERO: EdgeDistance = EdgeDistance {
        dist: F16D16::ZERO,
        near: F16D16Vec2::ZERO,
        alpha: 0,
    };

    ///
    /// Creates the record for an edge pixel, deriving `dist` from the
    /// displacement so the two can never disagree
    ///
    #[inline]
    pub fn from_near(near: F16D16Vec2, alpha: u8) -> EdgeDistance {
        EdgeDistance {
            dist: edge_vector_length(near),
            near,
            alpha,
        }
    }

    ///
    /// Creates the placeholder record for a pixel that is not an edge pixel
    ///
    #[inline]
    pub fn far(alpha: u8) -> EdgeDistance {
        EdgeDistance {
            dist: FAR_DISTANCE,
            near: FAR_NEAR,
            alpha,
        }
    }

    ///
    /// True if this record still carries the 'far' placeholder rather than a
    /// computed edge estimate
    ///
    #[inline]
    pub fn is_far(&self) -> bool {
        self.dist == FAR_DISTANCE && self.near == FAR_NEAR
    }
}

///
/// The length of a displacement under the configured distance metric: absolute
/// vector length by default, or the squared length when the crate is built
/// with the `squared_distances` feature
///
#[inline]
pub fn edge_vector_length(near: F16D16Vec2) -> F16D16 {
    if cfg!(feature = "squared_distances") {
        near.squared_length()
    } else {
        near.length()
    }
}
