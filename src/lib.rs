/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # flo_sdf
//!
//! ```
//! use flo_sdf::*;
//!
//! // An anti-aliased coverage bitmap (all empty here), padded by the spread
//! let samples         = vec![0u8; 64 * 64];
//! let coverage        = CoverageMap::from_samples(&samples, 64, 64).unwrap();
//!
//! // Estimate the distance to the outline for every edge pixel
//! let mut distance_map = DistanceMap::new(64, 64);
//! let mut worker       = SdfWorker {
//!     coverage:       coverage,
//!     distance_map:   &mut distance_map,
//!     params:         SdfParams::default(),
//! };
//!
//! approximate_edge_distances(&mut worker).unwrap();
//! ```
//!
//! This crate turns an anti-aliased 8-bit coverage bitmap into per-pixel
//! estimates of the distance to the outline it was rasterized from, the local
//! stage of converting a bitmap into a signed distance field. Pixels the
//! outline passes through get a sub-pixel displacement vector reconstructed
//! from the coverage gradient; all other pixels get a 'far' placeholder for a
//! later propagation pass to resolve.
//!
//! All results are in 16.16 fixed point (see the `fixed` module), so the
//! output is bit-for-bit reproducible across platforms.
//!

#[macro_use]
mod extra_checks;

pub mod consts;
pub mod coverage;
pub mod distance_field;
pub mod fixed;

mod sdf_error;

pub use self::consts::*;
pub use self::coverage::*;
pub use self::distance_field::*;
pub use self::fixed::*;
pub use self::sdf_error::*;
