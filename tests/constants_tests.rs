// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/field/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn opacity_bounds_are_ordered_and_visible() {
    assert!(DESKTOP_OPACITY_MIN > 0.0 && DESKTOP_OPACITY_MIN < DESKTOP_OPACITY_MAX);
    assert!(MOBILE_OPACITY_MIN > 0.0 && MOBILE_OPACITY_MIN < MOBILE_OPACITY_MAX);
    assert!(DESKTOP_OPACITY_MAX <= 1.0 && MOBILE_OPACITY_MAX <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn oscillation_speed_is_small_and_positive() {
    assert!(OPACITY_SPEED_MIN > 0.0);
    assert!(OPACITY_SPEED_MAX > OPACITY_SPEED_MIN);
    // a full sweep across the desktop band takes many frames
    assert!(OPACITY_SPEED_MAX < (DESKTOP_OPACITY_MAX - DESKTOP_OPACITY_MIN) / 10.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn mobile_grid_is_coarser_than_desktop() {
    assert!(MOBILE_BASE_SPACING * MOBILE_SPACING_FACTOR > DESKTOP_SPACING);
    assert!(MOBILE_DOT_STRIDE >= DESKTOP_DOT_STRIDE);
    assert!(DESKTOP_DOT_STRIDE >= 1);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn interaction_reaches_past_neighbouring_dots() {
    assert!(DESKTOP_INTERACTION_RADIUS > DESKTOP_SPACING * 2.0);
    assert!(MOBILE_INTERACTION_RADIUS > MOBILE_BASE_SPACING * MOBILE_SPACING_FACTOR);
    assert!(MIN_CELL_SIZE > 0.0 && CELL_SIZE_DIVISOR >= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn idle_animation_stays_inside_the_viewport() {
    assert!(IDLE_DRIFT_X > 0.0 && IDLE_DRIFT_X < 0.5);
    assert!(IDLE_DRIFT_Y > 0.0 && IDLE_DRIFT_Y < 0.5);
    assert!(IDLE_PULSE_GAIN > 0.0 && IDLE_PULSE_GAIN <= 1.0);
}
