/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ops::*;

///
/// Indicates a signed 16.16 fixed point value stored in an i32
///
/// A scale factor of 65536 represents 1.0. Arithmetic is carried out with i64
/// intermediates and saturates on the way back to i32, so every operation is
/// total: overflow clamps and division by zero saturates by the sign of the
/// numerator.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
#[repr(C)]
pub struct F16D16(pub i32);

impl F16D16 {
    /// 0.0 in 16.16 fixed point
    pub const ZERO: F16D16 = F16D16(0);

    /// 1.0 in 16.16 fixed point
    pub const ONE: F16D16 = F16D16(65536);

    /// 0.5 in 16.16 fixed point
    pub const HALF: F16D16 = F16D16(32768);

    /// sqrt(2) in 16.16 fixed point
    pub const SQRT_2: F16D16 = F16D16(92681);

    /// The largest representable value
    pub const MAX: F16D16 = F16D16(i32::MAX);

    /// The smallest representable value
    pub const MIN: F16D16 = F16D16(i32::MIN);

    ///
    /// Creates a fixed point value from an integer, clamping values outside the
    /// 16 available integer bits
    ///
    #[inline]
    pub fn from_int(val: i32) -> F16D16 {
        F16D16(saturate_to_i32((val as i64) << 16))
    }

    ///
    /// Scales an 8-bit coverage sample into the fixed point domain, so that a
    /// fully covered sample of 255 becomes 65280 (just under 1.0)
    ///
    #[inline]
    pub fn from_coverage(val: u8) -> F16D16 {
        F16D16((val as i32) << 8)
    }

    ///
    /// The absolute value, clamped to the representable range
    ///
    #[inline]
    pub fn abs(self) -> F16D16 {
        F16D16(self.0.saturating_abs())
    }

    ///
    /// The fixed point square root of this value
    ///
    /// Negative values have no square root and produce 0
    ///
    #[inline]
    pub fn sqrt(self) -> F16D16 {
        if self.0 <= 0 {
            F16D16::ZERO
        } else {
            F16D16(isqrt_u64((self.0 as u64) << 16) as i32)
        }
    }

    ///
    /// This value as a float, for reporting and tests
    ///
    #[inline]
    pub fn to_f64(self) -> f64 {
        (self.0 as f64) / 65536.0
    }
}

impl Add<F16D16> for F16D16 {
    type Output = F16D16;

    #[inline]
    fn add(self, val: F16D16) -> F16D16 {
        F16D16(self.0.saturating_add(val.0))
    }
}

impl Sub<F16D16> for F16D16 {
    type Output = F16D16;

    #[inline]
    fn sub(self, val: F16D16) -> F16D16 {
        F16D16(self.0.saturating_sub(val.0))
    }
}

impl Neg for F16D16 {
    type Output = F16D16;

    #[inline]
    fn neg(self) -> F16D16 {
        F16D16(self.0.saturating_neg())
    }
}

impl Mul<F16D16> for F16D16 {
    type Output = F16D16;

    #[inline]
    fn mul(self, val: F16D16) -> F16D16 {
        F16D16(saturate_to_i32(((self.0 as i64) * (val.0 as i64)) >> 16))
    }
}

impl Div<F16D16> for F16D16 {
    type Output = F16D16;

    #[inline]
    fn div(self, val: F16D16) -> F16D16 {
        if val.0 == 0 {
            match self.0 {
                0 => F16D16::ZERO,
                v if v > 0 => F16D16::MAX,
                _ => F16D16::MIN,
            }
        } else {
            F16D16(saturate_to_i32(((self.0 as i64) << 16) / (val.0 as i64)))
        }
    }
}

impl Mul<i32> for F16D16 {
    type Output = F16D16;

    #[inline]
    fn mul(self, val: i32) -> F16D16 {
        F16D16(saturate_to_i32((self.0 as i64) * (val as i64)))
    }
}

impl Div<i32> for F16D16 {
    type Output = F16D16;

    #[inline]
    fn div(self, val: i32) -> F16D16 {
        if val == 0 {
            match self.0 {
                0 => F16D16::ZERO,
                v if v > 0 => F16D16::MAX,
                _ => F16D16::MIN,
            }
        } else {
            F16D16(saturate_to_i32((self.0 as i64) / (val as i64)))
        }
    }
}

#[inline]
pub(crate) fn saturate_to_i32(val: i64) -> i32 {
    if val > i32::MAX as i64 {
        i32::MAX
    } else if val < i32::MIN as i64 {
        i32::MIN
    } else {
        val as i32
    }
}

///
/// Integer square root of a u64, by the digit-by-digit method
///
pub(crate) fn isqrt_u64(val: u64) -> u64 {
    let mut num = val;
    let mut result = 0u64;
    let mut bit = 1u64 << 62;

    while bit > num {
        bit >>= 2;
    }

    while bit != 0 {
        if num >= result + bit {
            num -= result + bit;
            result = (result >> 1) + bit;
        } else {
            result >>= 1;
        }

        bit >>= 2;
    }

    result
}
