use glam::Vec2;
use rand::Rng;

use super::config::FieldProfile;
use super::constants::{OPACITY_SPEED_MAX, OPACITY_SPEED_MIN};
use super::dot::Dot;
use super::spatial::SpatialIndex;

/// A complete dot set together with the index built from it.
///
/// Produced in one piece so the two can only ever be swapped in together.
#[derive(Clone, Debug)]
pub struct Layout {
    pub dots: Vec<Dot>,
    pub index: SpatialIndex,
    pub cols: usize,
    pub rows: usize,
}

impl Layout {
    pub fn empty(profile: &FieldProfile) -> Self {
        Self {
            dots: Vec::new(),
            index: SpatialIndex::empty(profile.cell_size),
            cols: 0,
            rows: 0,
        }
    }
}

/// Place one dot at the centre of every `spacing`-sized grid cell covering
/// the viewport and index them.
///
/// Zero, negative or non-finite sizes produce an empty layout.
pub fn compute_layout<R: Rng + ?Sized>(
    width: f32,
    height: f32,
    profile: &FieldProfile,
    rng: &mut R,
) -> Layout {
    let spacing = profile.spacing;
    let usable = |v: f32| v.is_finite() && v > 0.0;
    if !usable(width) || !usable(height) || !usable(spacing) {
        return Layout::empty(profile);
    }

    let cols = (width / spacing).ceil() as usize;
    let rows = (height / spacing).ceil() as usize;
    let half = spacing * 0.5;
    let bounds = (profile.opacity_min, profile.opacity_max);

    let mut dots = Vec::with_capacity(cols * rows);
    for i in 0..cols {
        for j in 0..rows {
            let position = Vec2::new(i as f32 * spacing + half, j as f32 * spacing + half);
            let base_opacity = if bounds.1 > bounds.0 {
                rng.gen_range(bounds.0..=bounds.1)
            } else {
                bounds.0
            };
            let speed = rng.gen_range(OPACITY_SPEED_MIN..=OPACITY_SPEED_MAX);
            dots.push(Dot::new(
                position,
                base_opacity,
                speed,
                bounds,
                profile.base_radius,
            ));
        }
    }

    let index = SpatialIndex::build(&dots, profile.cell_size);
    log::debug!(
        "[layout] {}x{} spacing={} -> {}x{} dots={} cells={}",
        width,
        height,
        spacing,
        cols,
        rows,
        dots.len(),
        index.keys().count()
    );
    Layout {
        dots,
        index,
        cols,
        rows,
    }
}
