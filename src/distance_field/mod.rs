/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Distance field seeds from coverage bitmaps
//!
//! The local stage of a bitmap-to-signed-distance-field conversion. For every
//! pixel of a coverage bitmap, `approximate_edge_distances` decides whether the
//! outline passes through or beside it (`is_edge`), and for those edge pixels
//! reconstructs a sub-pixel displacement to the outline from the coverage
//! gradient (`estimate_edge_distance`). Everything else receives a 'far'
//! placeholder.
//!
//! The resulting `DistanceMap` is a sparse seed field: a Euclidean distance
//! propagation pass (outside the scope of this crate) spreads the seed
//! estimates to the rest of the grid before sign assignment and quantization.
//!

mod approximate_edge_distances;
mod distance_map;
mod edge_classifier;
mod edge_distance;
mod estimate_edge_distance;

pub use self::approximate_edge_distances::*;
pub use self::distance_map::*;
pub use self::edge_classifier::*;
pub use self::edge_distance::*;
pub use self::estimate_edge_distance::*;
