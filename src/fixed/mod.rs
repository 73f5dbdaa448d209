/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # 16.16 fixed point arithmetic
//!
//! Everything in this crate computes in 16.16 fixed point: 16 integer bits, 16
//! fractional bits, a scale factor of 65536 for 1.0. The pipeline that consumes
//! the distance records depends on bit-for-bit reproducible results across
//! platforms, which floating point cannot guarantee, so these types keep every
//! multiply, divide and square root in integer arithmetic.
//!

mod f16d16;
mod vector;

pub use self::f16d16::*;
pub use self::vector::*;
