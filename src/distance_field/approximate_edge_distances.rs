/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::distance_map::*;
use super::edge_classifier::*;
use super::edge_distance::*;
use super::estimate_edge_distance::*;
use crate::consts::*;
use crate::coverage::*;
use crate::sdf_error::*;

///
/// Rasterization parameters for a conversion pass
///
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SdfParams {
    /// Minimum padding, in pixels, between the outline and the bitmap border.
    /// The caller is responsible for padding the coverage bitmap accordingly;
    /// this keeps edge pixels off the outermost ring of the grid, where the
    /// estimator has no full neighbourhood to work with
    pub spread: usize,
}

impl Default for SdfParams {
    fn default() -> SdfParams {
        SdfParams {
            spread: DEFAULT_SPREAD,
        }
    }
}

///
/// Groups the grids and parameters used during a single conversion call
///
/// The worker only lives for the duration of one `approximate_edge_distances`
/// call: the caller owns both grids and nothing is retained afterwards.
///
pub struct SdfWorker<'a> {
    /// The coverage samples the distance field is generated from
    pub coverage: CoverageMap<'a>,

    /// The records the pass writes, one per coverage sample
    pub distance_map: &'a mut DistanceMap,

    /// Rasterization parameters
    pub params: SdfParams,
}

///
/// Writes a local edge distance estimate into every edge pixel's record, and
/// the 'far' placeholder into every other record
///
/// Every record in the distance map is overwritten exactly once, with its
/// `alpha` field carrying the original coverage sample. Edge pixels become the
/// seeds for a later Euclidean distance propagation pass; their `dist` field is
/// the length of `near` under the configured distance metric.
///
/// Produces `SdfError::InvalidArguments` when the coverage and distance map
/// dimensions disagree, or when the spread is outside of
/// `MIN_SPREAD..=MAX_SPREAD`. Nothing is written in that case. The pass itself
/// cannot fail: the fixed point arithmetic is total.
///
pub fn approximate_edge_distances(worker: &mut SdfWorker) -> Result<(), SdfError> {
    let coverage = worker.coverage;
    let width = coverage.width();
    let height = coverage.height();

    if worker.distance_map.width() != width || worker.distance_map.height() != height {
        return Err(SdfError::InvalidArguments);
    }

    if worker.params.spread < MIN_SPREAD || worker.params.spread > MAX_SPREAD {
        return Err(SdfError::InvalidArguments);
    }

    if width == 0 || height == 0 {
        return Ok(());
    }

    // Each row only reads the immutable coverage map and writes its own slice
    // of records, so rows can be processed in any order or in parallel
    process_rows(worker.distance_map, width, move |y, row| {
        for (x, pixel) in row.iter_mut().enumerate() {
            let alpha = coverage.sample(x, y);

            *pixel = if is_edge(&coverage, x, y) {
                extra_check!(
                    x > 0 && y > 0 && x + 1 < width && y + 1 < height,
                    "Edge pixel on the bitmap border: the coverage bitmap is not padded by the spread"
                );

                EdgeDistance::from_near(estimate_edge_distance(&coverage, x, y), alpha)
            } else {
                EdgeDistance::far(alpha)
            };
        }
    });

    Ok(())
}

#[cfg(feature = "multithreading")]
fn process_rows<TRowOp>(distance_map: &mut DistanceMap, width: usize, row_op: TRowOp)
where
    TRowOp: Fn(usize, &mut [EdgeDistance]) + Send + Sync,
{
    use rayon::prelude::*;

    distance_map
        .cells_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| row_op(y, row));
}

#[cfg(not(feature = "multithreading"))]
fn process_rows<TRowOp>(distance_map: &mut DistanceMap, width: usize, row_op: TRowOp)
where
    TRowOp: Fn(usize, &mut [EdgeDistance]),
{
    for (y, row) in distance_map.cells_mut().chunks_mut(width).enumerate() {
        row_op(y, row);
    }
}
