/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::sdf_error::*;

///
/// A read-only grid of 8-bit coverage samples
///
/// Each sample is the fraction of the pixel's area covered by the filled shape:
/// 0 is fully outside, 255 fully inside, and anything in between means the
/// outline passes through the pixel. Samples are stored in row-major order.
///
/// To produce useful distance estimates near the image border, the bitmap
/// should be padded so that no part of the outline comes within the spread of
/// the border (see `SdfParams`).
///
#[derive(Copy, Clone, Debug)]
pub struct CoverageMap<'a> {
    samples: &'a [u8],
    width: usize,
    height: usize,
}

impl<'a> CoverageMap<'a> {
    ///
    /// Creates a coverage map from a row-major slice of samples
    ///
    /// Produces `SdfError::InvalidArguments` if the slice does not contain
    /// exactly `width * height` samples
    ///
    pub fn from_samples(
        samples: &'a [u8],
        width: usize,
        height: usize,
    ) -> Result<CoverageMap<'a>, SdfError> {
        match width.checked_mul(height) {
            Some(len) if len == samples.len() => Ok(CoverageMap {
                samples,
                width,
                height,
            }),
            _ => Err(SdfError::InvalidArguments),
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
    /// The coverage sample at a pixel position
    ///
    /// Panics if the position is outside of the grid
    ///
    #[inline]
    pub fn sample(&self, x: usize, y: usize) -> u8 {
        self.samples[y * self.width + x]
    }
}
