// Tuning constants for the dot field. Distances are CSS pixels.

// Viewports narrower than this are laid out with the mobile profile
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;

// Grid spacing
pub const DESKTOP_SPACING: f32 = 25.0;
pub const MOBILE_BASE_SPACING: f32 = 35.0;
pub const MOBILE_SPACING_FACTOR: f32 = 1.5; // coarser grid on phones

// Resting opacity oscillation bounds
pub const DESKTOP_OPACITY_MIN: f32 = 0.30;
pub const DESKTOP_OPACITY_MAX: f32 = 0.55;
pub const MOBILE_OPACITY_MIN: f32 = 0.25;
pub const MOBILE_OPACITY_MAX: f32 = 0.45;

// Oscillation speed magnitude range (opacity units per frame)
pub const OPACITY_SPEED_MIN: f32 = 0.002;
pub const OPACITY_SPEED_MAX: f32 = 0.006;

// Dot sizing
pub const DESKTOP_BASE_RADIUS: f32 = 1.2;
pub const MOBILE_BASE_RADIUS: f32 = 1.6;

// Interaction reach and strength
pub const DESKTOP_INTERACTION_RADIUS: f32 = 150.0;
pub const MOBILE_INTERACTION_RADIUS: f32 = 110.0;
pub const DESKTOP_OPACITY_BOOST: f32 = 0.6;
pub const MOBILE_OPACITY_BOOST: f32 = 0.5;
pub const DESKTOP_RADIUS_BOOST: f32 = 2.4;
pub const MOBILE_RADIUS_BOOST: f32 = 2.0;

// Spatial cells are a fraction of the interaction radius, never below the floor
pub const CELL_SIZE_DIVISOR: f32 = 1.5;
pub const MIN_CELL_SIZE: f32 = 50.0;

// Only every Nth dot is advanced and painted on mobile
pub const DESKTOP_DOT_STRIDE: usize = 1;
pub const MOBILE_DOT_STRIDE: usize = 2;

// Idle drift of the synthetic touch centre (fractions of the viewport)
pub const IDLE_DRIFT_X: f32 = 0.15;
pub const IDLE_DRIFT_Y: f32 = 0.10;
pub const IDLE_DRIFT_RATE_X: f32 = 0.5; // rad/s
pub const IDLE_DRIFT_RATE_Y: f32 = 0.35; // rad/s

// Idle pulse: a ring travelling outward from the synthetic centre
pub const IDLE_PULSE_RATE: f32 = 2.0; // rad/s
pub const IDLE_PULSE_WAVENUMBER: f32 = 0.05; // rad/px
pub const IDLE_PULSE_GAIN: f32 = 0.7;

// sRGB dot colour
pub const DEFAULT_DOT_COLOR: [u8; 3] = [96, 200, 255];
