/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

extern crate flo_sdf;

use flo_sdf::*;

use itertools::iproduct;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn build(samples: &[u8], width: usize, height: usize) -> DistanceMap {
    let coverage = CoverageMap::from_samples(samples, width, height).unwrap();
    let mut distance_map = DistanceMap::new(width, height);

    let mut worker = SdfWorker {
        coverage: coverage,
        distance_map: &mut distance_map,
        params: SdfParams::default(),
    };
    approximate_edge_distances(&mut worker).unwrap();

    distance_map
}

#[test]
fn mismatched_dimensions_are_invalid() {
    let samples = vec![0u8; 16];
    let coverage = CoverageMap::from_samples(&samples, 4, 4).unwrap();
    let mut distance_map = DistanceMap::new(5, 4);

    let mut worker = SdfWorker {
        coverage: coverage,
        distance_map: &mut distance_map,
        params: SdfParams::default(),
    };

    assert!(approximate_edge_distances(&mut worker) == Err(SdfError::InvalidArguments));

    // Nothing was written
    assert!(distance_map.cells().iter().all(|cell| *cell == EdgeDistance::ZERO));
}

#[test]
fn out_of_range_spread_is_invalid() {
    let samples = vec![0u8; 16];
    let coverage = CoverageMap::from_samples(&samples, 4, 4).unwrap();
    let mut distance_map = DistanceMap::new(4, 4);

    for &spread in [0, 1, MAX_SPREAD + 1].iter() {
        let mut worker = SdfWorker {
            coverage: coverage,
            distance_map: &mut distance_map,
            params: SdfParams { spread: spread },
        };

        assert!(approximate_edge_distances(&mut worker) == Err(SdfError::InvalidArguments));
    }
}

#[test]
fn empty_grid_is_a_no_op() {
    let coverage = CoverageMap::from_samples(&[], 0, 0).unwrap();
    let mut distance_map = DistanceMap::new(0, 0);

    let mut worker = SdfWorker {
        coverage: coverage,
        distance_map: &mut distance_map,
        params: SdfParams::default(),
    };

    assert!(approximate_edge_distances(&mut worker) == Ok(()));
}

#[test]
fn empty_bitmap_is_entirely_far() {
    let distance_map = build(&vec![0u8; 64], 8, 8);

    for cell in distance_map.cells() {
        assert!(cell.dist == FAR_DISTANCE);
        assert!(cell.near == FAR_NEAR);
        assert!(cell.alpha == 0);
    }
}

#[test]
fn single_dot() {
    // One fully covered pixel in an empty grid: the dot seeds the transform,
    // its fully outside neighbours stay far
    let mut samples = vec![0u8; 25];
    samples[2 * 5 + 2] = 255;

    let distance_map = build(&samples, 5, 5);

    for (y, x) in iproduct!(0..5, 0..5) {
        let cell = distance_map.get(x, y);

        if x == 2 && y == 2 {
            // Zero gradient: the dot's estimate collapses to the zero vector
            assert!(!cell.is_far());
            assert!(cell.near == F16D16Vec2::ZERO);
            assert!(cell.dist == F16D16::ZERO);
            assert!(cell.alpha == 255);
        } else {
            assert!(cell.is_far());
            assert!(cell.alpha == 0);
        }
    }
}

#[test]
fn column_boundary_scenario() {
    // Left half covered, an anti-aliased boundary column, right half empty
    let width = 12;
    let height = 8;
    let boundary = 5;

    let mut samples = vec![0u8; width * height];
    for (y, x) in iproduct!(0..height, 0..width) {
        samples[y * width + x] = if x < boundary {
            255
        } else if x == boundary {
            64
        } else {
            0
        };
    }

    let distance_map = build(&samples, width, height);

    // Interior pixels two or more columns from the boundary are far
    for (y, x) in iproduct!(1..height - 1, 1..boundary - 1) {
        assert!(distance_map.get(x, y).is_far());
    }

    // Fully outside pixels are far everywhere, right up to the border
    for (y, x) in iproduct!(0..height, boundary + 1..width) {
        assert!(distance_map.get(x, y).is_far());
    }

    // The column next to the anti-aliased one is fully covered with no fully
    // outside neighbour, so it is not an edge either
    for y in 1..height - 1 {
        assert!(distance_map.get(boundary - 1, y).is_far());
    }

    // Boundary column pixels point at the covered side, a quarter pixel away
    for y in 1..height - 1 {
        let cell = distance_map.get(boundary, y);

        assert!(!cell.is_far());
        assert!(cell.near.y == F16D16::ZERO);
        assert!(cell.near.x == F16D16(-16384));
        assert!(cell.dist == edge_vector_length(cell.near));
    }
}

#[test]
fn seed_distances_match_the_metric() {
    let mut rng = StdRng::seed_from_u64(42);
    let width = 32;
    let height = 24;
    let samples = (0..width * height).map(|_| rng.gen()).collect::<Vec<u8>>();

    let coverage = CoverageMap::from_samples(&samples, width, height).unwrap();
    let distance_map = build(&samples, width, height);

    for (y, x) in iproduct!(0..height, 0..width) {
        let cell = distance_map.get(x, y);

        assert!(cell.alpha == samples[y * width + x]);
        assert!(cell.is_far() == !is_edge(&coverage, x, y));

        if !cell.is_far() {
            assert!(cell.dist == edge_vector_length(cell.near));
        }
    }
}

#[test]
fn conversion_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(9001);
    let width = 48;
    let height = 17;
    let samples = (0..width * height).map(|_| rng.gen()).collect::<Vec<u8>>();

    let first = build(&samples, width, height);
    let second = build(&samples, width, height);

    assert!(first == second);
}
