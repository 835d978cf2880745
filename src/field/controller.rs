use glam::Vec2;
use rand::rngs::StdRng;

use super::config::{DeviceClass, FieldOptions, FieldProfile};
use super::dot::Dot;
use super::falloff::{idle_center, idle_pulse_factor, pointer_factor};
use super::interaction::InteractionTracker;
use super::layout::{compute_layout, Layout};
use super::spatial::SpatialIndex;

/// Raster target for one frame. Coordinates are CSS pixels.
pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [u8; 3], alpha: f32);
}

/// Where this frame's interaction comes from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InteractionSource {
    Pointer(Vec2),
    Idle(Vec2),
}

impl InteractionSource {
    #[inline]
    pub fn center(self) -> Vec2 {
        match self {
            InteractionSource::Pointer(c) | InteractionSource::Idle(c) => c,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub skipped: bool,
    pub painted: usize,
    /// Dots updated this frame with a non-zero interaction factor. Dots left
    /// out by the mobile stride are not counted.
    pub boosted: usize,
}

/// Owns the dot store, its spatial index and the interaction point, and runs
/// the per-frame update.
///
/// Layout swaps happen inside [`FieldController::resize`] and replace dots and
/// index together, so [`FieldController::step`] always sees a matching pair.
pub struct FieldController {
    options: FieldOptions,
    profile: FieldProfile,
    layout: Layout,
    tracker: InteractionTracker,
    width: f32,
    height: f32,
    rebuilds: u64,
    // per-frame scratch, indexed by dot
    boost: Vec<f32>,
    active: Vec<u32>,
    rng: StdRng,
}

impl FieldController {
    pub fn new(options: FieldOptions, rng: StdRng) -> Self {
        let profile = FieldProfile::for_device(DeviceClass::Desktop);
        let layout = Layout::empty(&profile);
        Self {
            options,
            profile,
            layout,
            tracker: InteractionTracker::default(),
            width: 0.0,
            height: 0.0,
            rebuilds: 0,
            boost: Vec::new(),
            active: Vec::new(),
            rng,
        }
    }

    /// Apply a viewport size. Rebuilds the layout only when the size or the
    /// device class changed; returns whether a rebuild happened.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        let width = if width.is_finite() { width.max(0.0) } else { 0.0 };
        let height = if height.is_finite() { height.max(0.0) } else { 0.0 };
        let class = DeviceClass::for_width(width, self.options.breakpoint);
        if class == self.profile.class && width == self.width && height == self.height {
            return false;
        }
        self.rebuild(width, height, class);
        true
    }

    fn rebuild(&mut self, width: f32, height: f32, class: DeviceClass) {
        if class != self.profile.class {
            log::info!("[field] device class {:?} -> {:?}", self.profile.class, class);
            self.profile = FieldProfile::for_device(class);
        }
        let layout = compute_layout(width, height, &self.profile, &mut self.rng);
        self.boost.clear();
        self.boost.resize(layout.dots.len(), 0.0);
        self.active.clear();
        self.layout = layout;
        self.width = width;
        self.height = height;
        self.rebuilds += 1;
    }

    pub fn set_options(&mut self, options: FieldOptions) {
        let breakpoint_changed = options.breakpoint != self.options.breakpoint;
        self.options = options;
        if breakpoint_changed {
            let class = DeviceClass::for_width(self.width, self.options.breakpoint);
            if class != self.profile.class {
                self.rebuild(self.width, self.height, class);
            }
        }
    }

    #[inline]
    pub fn options(&self) -> &FieldOptions {
        &self.options
    }

    #[inline]
    pub fn profile(&self) -> &FieldProfile {
        &self.profile
    }

    #[inline]
    pub fn dots(&self) -> &[Dot] {
        &self.layout.dots
    }

    #[inline]
    pub fn index(&self) -> &SpatialIndex {
        &self.layout.index
    }

    #[inline]
    pub fn grid(&self) -> (usize, usize) {
        (self.layout.cols, self.layout.rows)
    }

    #[inline]
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    #[inline]
    pub fn tracker(&self) -> &InteractionTracker {
        &self.tracker
    }

    #[inline]
    pub fn tracker_mut(&mut self) -> &mut InteractionTracker {
        &mut self.tracker
    }

    /// Live pointer if any; otherwise the drifting idle centre on touch
    /// devices in the mobile class; otherwise none.
    pub fn interaction_source(&self, elapsed_sec: f32) -> Option<InteractionSource> {
        if let Some(p) = self.tracker.point() {
            return Some(InteractionSource::Pointer(p));
        }
        if self.options.touch_capable && self.profile.class.is_mobile() {
            return Some(InteractionSource::Idle(idle_center(
                self.width,
                self.height,
                elapsed_sec,
            )));
        }
        None
    }

    /// Advance one frame and paint it onto `surface` when one is available.
    ///
    /// Without a surface the oscillation still advances so the field resumes
    /// smoothly once drawing is possible again.
    pub fn step(
        &mut self,
        elapsed_sec: f32,
        mut surface: Option<&mut dyn Surface>,
    ) -> FrameReport {
        if self.width <= 0.0 || self.height <= 0.0 || self.layout.dots.is_empty() {
            return FrameReport {
                skipped: true,
                ..FrameReport::default()
            };
        }
        if let Some(s) = surface.as_deref_mut() {
            s.clear(self.width, self.height);
        }

        let radius = self.profile.interaction_radius;
        if let Some(source) = self.interaction_source(elapsed_sec) {
            let center = source.center();
            let dots = &self.layout.dots;
            let boost = &mut self.boost;
            let active = &mut self.active;
            self.layout.index.query(center, radius, |i| {
                let Some(dot) = dots.get(i as usize) else {
                    return;
                };
                let d = dot.position.distance(center);
                if d >= radius {
                    return;
                }
                let factor = match source {
                    InteractionSource::Pointer(_) => pointer_factor(d, radius),
                    InteractionSource::Idle(_) => idle_pulse_factor(d, radius, elapsed_sec),
                };
                if factor > 0.0 {
                    boost[i as usize] = factor;
                    active.push(i);
                }
            });
        }

        let stride = self.profile.dot_stride.max(1);
        let opacity_boost = self.profile.opacity_boost;
        let radius_boost = self.profile.radius_boost;
        let color = self.options.color;
        let rows = self.layout.rows.max(1);
        let mut painted = 0;
        let mut boosted = 0;
        for (i, dot) in self.layout.dots.iter_mut().enumerate() {
            // Dots are stored column-major; sample on (col + row) so the
            // skipped set is a checkerboard regardless of grid parity.
            if (i / rows + i % rows) % stride != 0 {
                continue;
            }
            dot.oscillate(&mut self.rng);
            let factor = self.boost.get(i).copied().unwrap_or(0.0).clamp(0.0, 1.0);
            if factor > 0.0 {
                boosted += 1;
            }
            dot.alpha = (dot.opacity + factor * opacity_boost).min(1.0);
            dot.radius = dot.base_radius + factor * radius_boost;
            if let Some(s) = surface.as_deref_mut() {
                s.fill_circle(dot.position, dot.radius, color, dot.alpha);
                painted += 1;
            }
        }

        for &i in &self.active {
            if let Some(b) = self.boost.get_mut(i as usize) {
                *b = 0.0;
            }
        }
        self.active.clear();

        FrameReport {
            skipped: false,
            painted,
            boosted,
        }
    }
}
