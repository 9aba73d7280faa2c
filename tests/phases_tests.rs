// Progress → influence curves, checked against the reference phase windows.

use scrollview_core::phases::*;
use scrollview_core::{HaloConfig, PhaseConfig};

const EPS: f32 = 1e-4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

#[test]
fn hero_is_opaque_at_start_and_fades_out() {
    let ph = PhaseConfig::default();
    assert_eq!(hero_alpha(0.0, &ph), 1.0);
    assert!(approx(hero_alpha(0.075, &ph), 0.5));
    assert_eq!(hero_alpha(0.15, &ph), 0.0);
    assert_eq!(hero_alpha(0.5, &ph), 0.0);
}

#[test]
fn hero_fades_back_in_over_the_outro() {
    let ph = PhaseConfig::default();
    assert!(approx(hero_alpha(0.925, &ph), 0.5));
    assert!(approx(hero_alpha(1.0, &ph), 1.0));
}

#[test]
fn hero_alpha_is_continuous_at_window_edges() {
    let ph = PhaseConfig::default();
    for edge in [0.25f32, 0.85] {
        let below = hero_alpha(edge - 1e-3, &ph);
        let at = hero_alpha(edge, &ph);
        let above = hero_alpha(edge + 1e-3, &ph);
        assert!((below - at).abs() < 0.01, "jump below {edge}");
        assert!((above - at).abs() < 0.01, "jump above {edge}");
    }
}

#[test]
fn hero_alpha_clamps_out_of_range_progress() {
    let ph = PhaseConfig::default();
    assert_eq!(hero_alpha(-0.3, &ph), 1.0);
    assert!(approx(hero_alpha(1.7, &ph), 1.0));
    assert_eq!(hero_alpha(f32::NAN, &ph), 1.0);
}

#[test]
fn active_explode_reference_points() {
    let ph = PhaseConfig::default();
    assert_eq!(active_explode(0.0, &ph), 0.0);
    assert_eq!(active_explode(0.1, &ph), 0.0);
    // linear ramp over [0.1, 0.7]
    assert!(approx(active_explode(0.4, &ph), 0.5));
    assert_eq!(active_explode(0.7, &ph), 1.0);
    assert_eq!(active_explode(0.72, &ph), 1.0);
    assert!(approx(active_explode(0.85, &ph), 0.5));
    assert_eq!(active_explode(0.95, &ph), 0.0);
    assert_eq!(active_explode(1.0, &ph), 0.0);
}

#[test]
fn active_explode_rises_then_falls() {
    let ph = PhaseConfig::default();
    let mut prev = 0.0;
    for i in 0..=70 {
        let v = active_explode(i as f32 / 100.0, &ph);
        assert!(v >= prev, "not non-decreasing at p={}", i as f32 / 100.0);
        prev = v;
    }
    let mut prev = 1.0;
    for i in 75..=100 {
        let v = active_explode(i as f32 / 100.0, &ph);
        assert!(v <= prev, "not non-increasing at p={}", i as f32 / 100.0);
        prev = v;
    }
}

#[test]
fn active_explode_stays_in_unit_range() {
    let ph = PhaseConfig::default();
    for i in -20..=120 {
        let v = active_explode(i as f32 / 100.0, &ph);
        assert!((0.0..=1.0).contains(&v));
    }
}

#[test]
fn node_and_label_alpha() {
    assert_eq!(node_alpha(0.0), 0.0);
    assert!(approx(node_alpha(0.25), 0.5));
    assert_eq!(node_alpha(0.5), 1.0);
    assert_eq!(node_alpha(0.9), 1.0);

    assert_eq!(label_alpha(0.3, 0.4), 0.0);
    assert_eq!(label_alpha(0.4, 0.4), 0.0);
    assert!(approx(label_alpha(0.5, 0.4), 0.2));
    assert_eq!(label_alpha(1.0, 0.4), 1.0);
}

#[test]
fn halo_absent_at_or_below_threshold() {
    let cfg = HaloConfig::default();
    assert!(halo(0.0, &cfg).is_none());
    assert!(halo(0.05, &cfg).is_none());
    assert!(halo(cfg.threshold, &cfg).is_none());
    assert!(halo(f32::NAN, &cfg).is_none());
}

#[test]
fn halo_grows_with_speed_in_either_direction() {
    let cfg = HaloConfig::default();
    let h = halo(0.2, &cfg).unwrap();
    assert!(approx(h.radius, 270.0));
    assert!(approx(h.alpha, 0.1));
    assert_eq!(halo(-0.2, &cfg), Some(h));

    let mut prev = 0.0;
    for i in 2..60 {
        let h = halo(i as f32 / 10.0, &cfg).unwrap();
        assert!(h.radius >= prev);
        prev = h.radius;
    }
}

#[test]
fn halo_is_capped_for_velocity_spikes() {
    let cfg = HaloConfig::default();
    let h = halo(1_000.0, &cfg).unwrap();
    assert_eq!(h.speed, cfg.max_speed);
    assert!(approx(h.radius, cfg.base_radius + cfg.radius_per_speed * cfg.max_speed));
    assert_eq!(h.alpha, cfg.max_alpha);
    assert!(halo(f32::INFINITY, &cfg).is_some());
}

#[test]
fn glow_alpha_is_quantised_to_alpha_byte_steps() {
    assert_eq!(glow_alpha(0.0), 0.0);
    // below one step of 1/40: no glow at all
    assert_eq!(glow_alpha(0.02), 0.0);
    assert_eq!(glow_alpha(0.5), 20.0 / 255.0);
    assert_eq!(glow_alpha(1.0), 40.0 / 255.0);
    assert_eq!(glow_alpha(3.0), 40.0 / 255.0);
    assert_eq!(glow_alpha(f32::NAN), 0.0);
}

#[test]
fn per_mille_velocity_scale_raises_the_halo_threshold() {
    let cfg = HaloConfig {
        velocity_scale: 0.001,
        ..HaloConfig::default()
    };
    assert!(halo(50.0, &cfg).is_none());
    let h = halo(200.0, &cfg).unwrap();
    assert!(approx(h.radius, 270.0));
}
