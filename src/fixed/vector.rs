/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::f16d16::*;

///
/// A 2D displacement in 16.16 fixed point
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[repr(C)]
pub struct F16D16Vec2 {
    pub x: F16D16,
    pub y: F16D16,
}

impl F16D16Vec2 {
    /// The zero displacement
    pub const ZERO: F16D16Vec2 = F16D16Vec2 {
        x: F16D16::ZERO,
        y: F16D16::ZERO,
    };

    ///
    /// Creates a displacement from its two components
    ///
    #[inline]
    pub fn new(x: F16D16, y: F16D16) -> F16D16Vec2 {
        F16D16Vec2 { x, y }
    }

    ///
    /// The Euclidean length of this displacement
    ///
    /// The squared length is formed at full 32.32 precision before the square
    /// root is taken, so this saturates only when the true length does not fit
    /// in 16.16
    ///
    #[inline]
    pub fn length(&self) -> F16D16 {
        // x*x in 32.32 cannot be negative, and the u64 sum cannot overflow
        let xx = ((self.x.0 as i64) * (self.x.0 as i64)) as u64;
        let yy = ((self.y.0 as i64) * (self.y.0 as i64)) as u64;

        // sqrt of a 32.32 value is already in 16.16
        let length = isqrt_u64(xx + yy);

        if length > i32::MAX as u64 {
            F16D16::MAX
        } else {
            F16D16(length as i32)
        }
    }

    ///
    /// The squared Euclidean length of this displacement, saturating when it
    /// exceeds the 16.16 range
    ///
    #[inline]
    pub fn squared_length(&self) -> F16D16 {
        let xx = ((self.x.0 as i64) * (self.x.0 as i64)) as u64;
        let yy = ((self.y.0 as i64) * (self.y.0 as i64)) as u64;

        let squared = (xx + yy) >> 16;

        if squared > i32::MAX as u64 {
            F16D16::MAX
        } else {
            F16D16(squared as i32)
        }
    }

    ///
    /// This displacement scaled to unit length (the zero vector normalizes to
    /// itself)
    ///
    #[inline]
    pub fn normalize(&self) -> F16D16Vec2 {
        let length = self.length();

        if length == F16D16::ZERO {
            F16D16Vec2::ZERO
        } else {
            F16D16Vec2 {
                x: self.x / length,
                y: self.y / length,
            }
        }
    }
}
