// Host-side tests for the spatial index.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/field/mod.rs"]
mod field;

use field::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn desktop_layout(width: f32, height: f32) -> Layout {
    let mut rng = StdRng::seed_from_u64(7);
    compute_layout(
        width,
        height,
        &FieldProfile::for_device(DeviceClass::Desktop),
        &mut rng,
    )
}

#[test]
fn every_dot_is_indexed_exactly_once_in_its_own_cell() {
    let layout = desktop_layout(1280.0, 720.0);
    let index = &layout.index;
    for (i, dot) in layout.dots.iter().enumerate() {
        let bucket = index.bucket(index.cell_of(dot.position));
        let hits = bucket.iter().filter(|&&j| j as usize == i).count();
        assert_eq!(hits, 1, "dot {i} appears {hits} times in its cell");
    }
    let total: usize = index.keys().map(|k| index.bucket(*k).len()).sum();
    assert_eq!(total, layout.dots.len());
    assert_eq!(index.len(), layout.dots.len());
}

#[test]
fn query_is_a_superset_of_the_exact_neighbourhood() {
    let layout = desktop_layout(900.0, 700.0);
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..200 {
        let p = Vec2::new(rng.gen_range(-200.0..1100.0), rng.gen_range(-200.0..900.0));
        let r = rng.gen_range(0.0..400.0);
        let candidates = layout.index.query_set(p, r);
        for (i, dot) in layout.dots.iter().enumerate() {
            if dot.position.distance(p) <= r {
                assert!(
                    candidates.contains(&(i as u32)),
                    "dot {i} at {:?} within {r} of {p:?} missing from candidates",
                    dot.position
                );
            }
        }
    }
}

#[test]
fn query_prunes_far_cells() {
    let layout = desktop_layout(2000.0, 2000.0);
    let p = Vec2::new(1000.0, 1000.0);
    let candidates = layout.index.query_set(p, 150.0);
    assert!(!candidates.is_empty());
    // 150px reach over 100px cells scans a 5x5 block of 4x4 dots per cell
    assert!(candidates.len() <= 25 * 16, "got {}", candidates.len());
    assert!(candidates.len() < layout.dots.len());
}

#[test]
fn query_visits_each_dot_once() {
    let layout = desktop_layout(400.0, 400.0);
    let mut seen = Vec::new();
    layout.index.query(Vec2::new(200.0, 200.0), 1000.0, |i| seen.push(i));
    let unique: std::collections::HashSet<u32> = seen.iter().copied().collect();
    assert_eq!(seen.len(), unique.len());
    assert_eq!(unique.len(), layout.dots.len());
}

#[test]
fn empty_index_and_degenerate_queries_return_nothing() {
    let empty = SpatialIndex::empty(100.0);
    assert!(empty.query_set(Vec2::ZERO, 500.0).is_empty());

    let layout = desktop_layout(300.0, 300.0);
    assert!(layout.index.query_set(Vec2::new(f32::NAN, 10.0), 100.0).is_empty());
    assert!(layout.index.query_set(Vec2::new(10.0, 10.0), -1.0).is_empty());
    assert!(layout.index.query_set(Vec2::new(10.0, 10.0), f32::NAN).is_empty());
}

#[test]
fn zero_radius_query_still_covers_the_point_cell() {
    let layout = desktop_layout(300.0, 300.0);
    let dot = &layout.dots[5];
    let candidates = layout.index.query_set(dot.position, 0.0);
    assert!(candidates.contains(&5));
}

#[test]
fn invalid_cell_size_falls_back_to_unit_cells() {
    let index = SpatialIndex::empty(0.0);
    assert_eq!(index.cell_size(), 1.0);
    assert_eq!(index.cell_of(Vec2::new(3.7, -0.2)), (3, -1));
}
