use crate::constants::{
    LABEL_FONT_FAMILY, LABEL_FONT_WEIGHT, MAX_FRAME_DT_SEC, NOMINAL_FRAME_DT_SEC, VIEWPORT_EPSILON_PX,
};

/// Scroll offset as a fraction of the scrollable range, clamped to [0, 1].
///
/// Pages that cannot scroll report 0.
#[inline]
pub fn scroll_fraction(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f32 {
    let range = scroll_height - viewport_height;
    if !(range > 0.0) || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / range).clamp(0.0, 1.0) as f32
}

/// Seconds to advance the smoother for a tick; `None` on the first tick.
#[inline]
pub fn frame_dt(elapsed_sec: Option<f32>) -> f32 {
    match elapsed_sec {
        Some(dt) if dt.is_finite() && dt >= 0.0 => dt.min(MAX_FRAME_DT_SEC),
        Some(_) => 0.0,
        None => NOMINAL_FRAME_DT_SEC,
    }
}

/// CSS font shorthand for node labels.
#[inline]
pub fn label_font(px: f32) -> String {
    format!("{} {:.1}px {}", LABEL_FONT_WEIGHT, px, LABEL_FONT_FAMILY)
}

/// CSS `letterSpacing` value for a spacing in logical pixels.
#[inline]
pub fn letter_spacing(px: f32) -> String {
    format!("{}px", px)
}

/// Whether the published viewport should be replaced by a fresh measurement.
///
/// `current` and `measured` are `[width, height, device_pixel_ratio]`. An
/// invalid viewport is always re-measured so a canvas that was hidden or not
/// laid out at mount time recovers without a window resize.
pub fn viewport_stale(valid: bool, current: [f32; 3], measured: [f32; 3]) -> bool {
    !valid
        || current
            .iter()
            .zip(measured)
            // NaN never compares as close, so it counts as changed
            .any(|(a, b)| !((a - b).abs() <= VIEWPORT_EPSILON_PX))
}
