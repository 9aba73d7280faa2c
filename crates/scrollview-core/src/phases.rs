//! Progress → influence curves for each visual phase.
//!
//! Every function clamps its inputs first, so smoothing overshoot or a
//! misbehaving progress source can never push a value outside [0, 1] into
//! geometry or color.

use crate::config::{HaloConfig, PhaseConfig};
use crate::constants::GLOW_ALPHA_LEVELS;
use crate::paint::unit;

/// Hero layer opacity: fades out over the start of the intro window and back
/// in over the outro window, zero in between.
pub fn hero_alpha(progress: f32, phases: &PhaseConfig) -> f32 {
    let p = unit(progress);
    let (intro, outro, fade) = (phases.hero_intro, phases.hero_outro, phases.hero_fade);
    if p >= intro.start && p < intro.end {
        unit(1.0 - (p - intro.start) / fade)
    } else if p > outro.start && p <= outro.end {
        unit((p - outro.start) / fade)
    } else {
        0.0
    }
}

/// Fraction of full dispersal reached on the way out (0→1 over the explode window).
#[inline]
pub fn explode_factor(progress: f32, phases: &PhaseConfig) -> f32 {
    phases.explode.ramp(unit(progress))
}

/// 1 before the reassemble window, falling to 0 across it.
#[inline]
pub fn reassemble_factor(progress: f32, phases: &PhaseConfig) -> f32 {
    1.0 - phases.reassemble.ramp(unit(progress))
}

/// Product of the explode and reassemble ramps.
///
/// The windows overlap at their edges; multiplying keeps the transition free
/// of a seam where a min/max rule would switch curves.
#[inline]
pub fn active_explode(progress: f32, phases: &PhaseConfig) -> f32 {
    unit(explode_factor(progress, phases) * reassemble_factor(progress, phases))
}

/// Glow/ring opacity of a node; reaches full strength halfway through the explosion.
#[inline]
pub fn node_alpha(active_explode: f32) -> f32 {
    unit(active_explode * 2.0)
}

/// Glow center opacity for a node at `node_alpha`.
///
/// Quantised to whole steps of an 8-bit alpha channel capped at
/// `GLOW_ALPHA_LEVELS`, so a barely started explosion shows no glow at all.
#[inline]
pub fn glow_alpha(node_alpha: f32) -> f32 {
    (unit(node_alpha) * GLOW_ALPHA_LEVELS).floor() / 255.0
}

/// Label opacity; zero at or below `threshold`.
#[inline]
pub fn label_alpha(active_explode: f32, threshold: f32) -> f32 {
    if active_explode > threshold {
        unit((active_explode - threshold) * 2.0)
    } else {
        0.0
    }
}

/// Unscaled halo geometry for one tick.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Halo {
    pub speed: f32,
    /// Radius in reference pixels, before the viewport scale factor.
    pub radius: f32,
    pub alpha: f32,
}

/// Velocity halo, present only above the speed threshold.
///
/// Speed is capped at `max_speed` so a velocity spike cannot blow up the
/// radius; alpha is capped at `max_alpha`.
pub fn halo(velocity: f32, config: &HaloConfig) -> Option<Halo> {
    let speed = (velocity * config.velocity_scale).abs();
    if speed.is_nan() {
        return None;
    }
    let speed = speed.min(config.max_speed);
    if speed <= config.threshold {
        return None;
    }
    Some(Halo {
        speed,
        radius: config.base_radius + config.radius_per_speed * speed,
        alpha: (config.alpha_per_speed * speed).min(config.max_alpha).clamp(0.0, 1.0),
    })
}
