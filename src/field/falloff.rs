use glam::Vec2;

use super::constants::*;

/// Squared linear falloff used for a live pointer: 1 at the centre, 0 at and
/// beyond `radius`.
#[inline]
pub fn pointer_factor(distance: f32, radius: f32) -> f32 {
    if !(distance.is_finite() && radius > 0.0) || distance >= radius {
        return 0.0;
    }
    let t = (1.0 - distance / radius).clamp(0.0, 1.0);
    t * t
}

/// Outward-travelling pulse around the synthetic idle centre, damped linearly
/// towards `radius`. Pure in `elapsed_sec` and `distance`.
#[inline]
pub fn idle_pulse_factor(distance: f32, radius: f32, elapsed_sec: f32) -> f32 {
    if !(distance.is_finite() && elapsed_sec.is_finite() && radius > 0.0) || distance >= radius {
        return 0.0;
    }
    let damping = 1.0 - distance / radius;
    let wave = (elapsed_sec * IDLE_PULSE_RATE - distance * IDLE_PULSE_WAVENUMBER).sin() * 0.5 + 0.5;
    (damping * wave * IDLE_PULSE_GAIN).clamp(0.0, 1.0)
}

/// Slow Lissajous drift around the viewport middle.
#[inline]
pub fn idle_center(width: f32, height: f32, elapsed_sec: f32) -> Vec2 {
    let t = if elapsed_sec.is_finite() { elapsed_sec } else { 0.0 };
    Vec2::new(
        width * 0.5 + (t * IDLE_DRIFT_RATE_X).sin() * width * IDLE_DRIFT_X,
        height * 0.5 + (t * IDLE_DRIFT_RATE_Y).cos() * height * IDLE_DRIFT_Y,
    )
}
