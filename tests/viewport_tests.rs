// Responsive viewport metrics.

use scrollview_core::{ResizeEvent, ResponsiveConfig, Viewport, ViewportManager};

fn compute(w: f32, h: f32, dpr: f32) -> Viewport {
    Viewport::compute(ResizeEvent::new(w, h, dpr), &ResponsiveConfig::default())
}

#[test]
fn reference_width_has_unit_scale() {
    let vp = compute(1400.0, 900.0, 2.0);
    assert!(vp.valid);
    assert_eq!(vp.scale_factor, 1.0);
    assert!(!vp.is_mobile);
    assert_eq!(vp.explode_factor, 1.0);
    assert_eq!((vp.backing_width, vp.backing_height), (2800, 1800));
}

#[test]
fn scale_factor_is_clamped() {
    assert_eq!(compute(1920.0, 1080.0, 1.0).scale_factor, 1.2);
    assert_eq!(compute(375.0, 812.0, 1.0).scale_factor, 0.5);
    assert_eq!(compute(1050.0, 800.0, 1.0).scale_factor, 0.75);
}

#[test]
fn mobile_breakpoint_is_exclusive() {
    assert!(!compute(768.0, 1024.0, 1.0).is_mobile);
    let phone = compute(767.0, 1024.0, 1.0);
    assert!(phone.is_mobile);
    assert_eq!(phone.explode_factor, 0.6);
}

#[test]
fn zero_or_non_finite_size_is_invalid() {
    assert!(!compute(0.0, 900.0, 1.0).valid);
    assert!(!compute(1400.0, 0.0, 1.0).valid);
    assert!(!compute(f32::NAN, 900.0, 1.0).valid);
    assert!(!compute(-10.0, 900.0, 1.0).valid);
    assert_eq!(Viewport::default(), Viewport::invalid());
}

#[test]
fn bad_device_pixel_ratio_falls_back_to_one() {
    for dpr in [0.0, -2.0, f32::NAN] {
        let vp = compute(800.0, 600.0, dpr);
        assert!(vp.valid);
        assert_eq!(vp.device_pixel_ratio, 1.0);
        assert_eq!((vp.backing_width, vp.backing_height), (800, 600));
    }
}

#[test]
fn fractional_backing_size_truncates() {
    let vp = compute(375.5, 667.0, 3.0);
    assert_eq!(vp.backing_width, 1126);
    assert_eq!(vp.backing_height, 2001);
}

#[test]
fn center_and_orientation() {
    let vp = compute(375.0, 812.0, 1.0);
    assert_eq!(vp.center(), glam::Vec2::new(187.5, 406.0));
    assert!(vp.is_portrait());
    assert!(!compute(1400.0, 900.0, 1.0).is_portrait());
}

#[test]
fn manager_publishes_latest_resize() {
    let manager = ViewportManager::new(ResponsiveConfig::default());
    assert!(!manager.current().valid);

    let vp = manager.on_resize(ResizeEvent::new(1400.0, 900.0, 1.0));
    assert_eq!(manager.current(), vp);

    manager.on_resize(ResizeEvent::new(0.0, 0.0, 1.0));
    assert!(!manager.current().valid);
}

#[test]
fn custom_breakpoints_apply() {
    let config = ResponsiveConfig {
        mobile_breakpoint: 1024.0,
        mobile_explode_factor: 0.4,
        ..ResponsiveConfig::default()
    };
    let vp = Viewport::compute(ResizeEvent::new(900.0, 1200.0, 1.0), &config);
    assert!(vp.is_mobile);
    assert_eq!(vp.explode_factor, 0.4);
}
