use glam::Vec2;
use rand::Rng;

/// One rendering unit of the field.
///
/// `position` and the opacity bounds are fixed at layout time; the remaining
/// fields are rewritten every frame by the controller.
#[derive(Clone, Debug)]
pub struct Dot {
    pub position: Vec2,
    pub opacity_min: f32,
    pub opacity_max: f32,
    pub opacity: f32,
    pub target_opacity: f32,
    /// Signed; the sign tracks the direction of the current target.
    pub opacity_speed: f32,
    pub base_radius: f32,
    /// Radius painted in the last frame, boost included.
    pub radius: f32,
    /// Opacity painted in the last frame, boost included.
    pub alpha: f32,
}

impl Dot {
    pub fn new(
        position: Vec2,
        base_opacity: f32,
        opacity_speed: f32,
        bounds: (f32, f32),
        base_radius: f32,
    ) -> Self {
        let (lo, hi) = bounds;
        let base = base_opacity.clamp(lo, hi);
        Self {
            position,
            opacity_min: lo,
            opacity_max: hi,
            opacity: base,
            target_opacity: base,
            opacity_speed,
            base_radius,
            radius: base_radius,
            alpha: base,
        }
    }

    /// Advance the resting oscillation by one frame.
    ///
    /// When the opacity reaches its target or a bound, a new target is drawn
    /// inside the bounds and the speed is pointed at it. The result is always
    /// clamped to `[opacity_min, opacity_max]`.
    pub fn oscillate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if !self.opacity.is_finite() {
            self.opacity = self.opacity_min;
        }
        if !self.opacity_speed.is_finite() {
            self.opacity_speed = 0.0;
        }

        self.opacity += self.opacity_speed;

        let reached = if self.opacity_speed >= 0.0 {
            self.opacity >= self.target_opacity
        } else {
            self.opacity <= self.target_opacity
        };
        let out_of_bounds = self.opacity <= self.opacity_min || self.opacity >= self.opacity_max;
        self.opacity = self.opacity.clamp(self.opacity_min, self.opacity_max);

        if reached || out_of_bounds {
            self.target_opacity = if self.opacity_max > self.opacity_min {
                rng.gen_range(self.opacity_min..=self.opacity_max)
            } else {
                self.opacity_min
            };
            let magnitude = self.opacity_speed.abs();
            self.opacity_speed = if self.target_opacity >= self.opacity {
                magnitude
            } else {
                -magnitude
            };
        }
    }
}
