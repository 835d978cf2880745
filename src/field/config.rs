use super::constants::*;

/// Binary layout class derived from the viewport width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Desktop,
    Mobile,
}

impl DeviceClass {
    /// Classify a viewport. Non-finite widths fall back to desktop.
    #[inline]
    pub fn for_width(width: f32, breakpoint: f32) -> Self {
        if width.is_finite() && width < breakpoint {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    #[inline]
    pub fn is_mobile(self) -> bool {
        self == DeviceClass::Mobile
    }
}

/// Everything the layout and the frame step need to know about a device class.
///
/// Selected once per class change via [`FieldProfile::for_device`]; nothing
/// downstream branches on the class directly.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldProfile {
    pub class: DeviceClass,
    pub spacing: f32,
    pub opacity_min: f32,
    pub opacity_max: f32,
    pub base_radius: f32,
    pub interaction_radius: f32,
    pub opacity_boost: f32,
    pub radius_boost: f32,
    pub cell_size: f32,
    pub dot_stride: usize,
}

impl FieldProfile {
    pub fn for_device(class: DeviceClass) -> Self {
        match class {
            DeviceClass::Desktop => Self {
                class,
                spacing: DESKTOP_SPACING,
                opacity_min: DESKTOP_OPACITY_MIN,
                opacity_max: DESKTOP_OPACITY_MAX,
                base_radius: DESKTOP_BASE_RADIUS,
                interaction_radius: DESKTOP_INTERACTION_RADIUS,
                opacity_boost: DESKTOP_OPACITY_BOOST,
                radius_boost: DESKTOP_RADIUS_BOOST,
                cell_size: cell_size_for(DESKTOP_INTERACTION_RADIUS),
                dot_stride: DESKTOP_DOT_STRIDE,
            },
            DeviceClass::Mobile => Self {
                class,
                spacing: MOBILE_BASE_SPACING * MOBILE_SPACING_FACTOR,
                opacity_min: MOBILE_OPACITY_MIN,
                opacity_max: MOBILE_OPACITY_MAX,
                base_radius: MOBILE_BASE_RADIUS,
                interaction_radius: MOBILE_INTERACTION_RADIUS,
                opacity_boost: MOBILE_OPACITY_BOOST,
                radius_boost: MOBILE_RADIUS_BOOST,
                cell_size: cell_size_for(MOBILE_INTERACTION_RADIUS),
                dot_stride: MOBILE_DOT_STRIDE,
            },
        }
    }
}

#[inline]
pub fn cell_size_for(interaction_radius: f32) -> f32 {
    (interaction_radius / CELL_SIZE_DIVISOR)
        .floor()
        .max(MIN_CELL_SIZE)
}

/// Host-adjustable knobs that are not tied to a device class.
#[derive(Clone, Debug)]
pub struct FieldOptions {
    pub color: [u8; 3],
    pub breakpoint: f32,
    /// Whether the device reports touch input. Combined with the mobile class
    /// this enables the synthetic idle centre.
    pub touch_capable: bool,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            color: DEFAULT_DOT_COLOR,
            breakpoint: MOBILE_BREAKPOINT_PX,
            touch_capable: false,
        }
    }
}
