// Host-side tests for grid layout and device profiles.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/field/mod.rs"]
mod field;

use field::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn layout_for(width: f32, height: f32, class: DeviceClass) -> Layout {
    let mut rng = StdRng::seed_from_u64(1);
    compute_layout(width, height, &FieldProfile::for_device(class), &mut rng)
}

#[test]
fn desktop_800x600_matches_expected_grid() {
    let layout = layout_for(800.0, 600.0, DeviceClass::Desktop);
    assert_eq!((layout.cols, layout.rows), (32, 24));
    assert_eq!(layout.dots.len(), 768);
    assert_eq!(layout.index.cell_size(), 100.0);

    let mut keys: Vec<CellKey> = layout.index.keys().copied().collect();
    keys.sort();
    assert_eq!(keys.len(), 8 * 6);
    for (x, y) in keys {
        assert!((0..8).contains(&x), "cell x {x}");
        assert!((0..6).contains(&y), "cell y {y}");
    }
}

#[test]
fn dots_sit_at_cell_centres() {
    let layout = layout_for(100.0, 60.0, DeviceClass::Desktop);
    assert_eq!((layout.cols, layout.rows), (4, 3));
    let first = layout.dots[0].position;
    assert_eq!((first.x, first.y), (12.5, 12.5));
    let last = layout.dots.last().unwrap().position;
    assert_eq!((last.x, last.y), (87.5, 62.5));
}

#[test]
fn dots_start_at_rest_within_bounds() {
    let profile = FieldProfile::for_device(DeviceClass::Desktop);
    let layout = layout_for(640.0, 480.0, DeviceClass::Desktop);
    for dot in &layout.dots {
        assert!(dot.opacity >= profile.opacity_min && dot.opacity <= profile.opacity_max);
        assert_eq!(dot.opacity, dot.target_opacity);
        assert!(dot.opacity_speed > 0.0 && dot.opacity_speed < 0.01);
        assert_eq!(dot.base_radius, profile.base_radius);
        assert_eq!(dot.radius, profile.base_radius);
    }
}

#[test]
fn mobile_profile_uses_coarser_spacing() {
    let mobile = FieldProfile::for_device(DeviceClass::Mobile);
    assert!((mobile.spacing - 52.5).abs() < 1e-4);
    assert_eq!(mobile.cell_size, 73.0);

    let layout = layout_for(500.0, 800.0, DeviceClass::Mobile);
    assert_eq!((layout.cols, layout.rows), (10, 16));
}

#[test]
fn cell_size_never_drops_below_floor() {
    assert_eq!(cell_size_for(150.0), 100.0);
    assert_eq!(cell_size_for(30.0), 50.0);
}

#[test]
fn degenerate_viewports_yield_empty_layouts() {
    let sizes = [
        (0.0, 600.0),
        (800.0, 0.0),
        (-5.0, 10.0),
        (f32::NAN, 10.0),
        (10.0, f32::INFINITY),
    ];
    for (w, h) in sizes {
        let layout = layout_for(w, h, DeviceClass::Desktop);
        assert!(layout.dots.is_empty(), "{w}x{h}");
        assert!(layout.index.is_empty());
    }
}

#[test]
fn device_class_follows_breakpoint() {
    assert_eq!(DeviceClass::for_width(767.0, 768.0), DeviceClass::Mobile);
    assert_eq!(DeviceClass::for_width(768.0, 768.0), DeviceClass::Desktop);
    assert_eq!(DeviceClass::for_width(f32::NAN, 768.0), DeviceClass::Desktop);
}
