//! Declarative engine configuration.
//!
//! Every field defaults to the reference composition, so an empty JSON object
//! `{}` is a complete configuration. Parse with [`EngineConfig::from_json`],
//! which also validates.

use crate::constants::*;
use crate::error::ConfigError;
use crate::paint::Rgba;
use crate::scene::{reference_connectors, reference_nodes, ConnectorSpec, NodeSpec};
use serde::Deserialize;

/// Progress interval `[start, end]` in normalized units.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct Window {
    pub start: f32,
    pub end: f32,
}

impl Window {
    #[inline]
    pub const fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn span(self) -> f32 {
        self.end - self.start
    }

    /// Linear 0→1 ramp across the window, clamped outside it.
    #[inline]
    pub fn ramp(self, progress: f32) -> f32 {
        crate::paint::unit((progress - self.start) / self.span())
    }

    fn validate(self, name: &'static str) -> Result<(), ConfigError> {
        let ok = self.start.is_finite()
            && self.end.is_finite()
            && 0.0 <= self.start
            && self.start < self.end
            && self.end <= 1.0;
        if ok {
            Ok(())
        } else {
            Err(ConfigError::Window {
                name,
                start: self.start,
                end: self.end,
            })
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SmootherConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    pub rest_delta: f32,
    pub rest_speed: f32,
}

impl Default for SmootherConfig {
    fn default() -> Self {
        Self {
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
            mass: SPRING_MASS,
            rest_delta: SPRING_REST_DELTA,
            rest_speed: SPRING_REST_SPEED,
        }
    }
}

impl SmootherConfig {
    /// ζ = c / (2·√(k·m)); below 1 the spring overshoots.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Largest fractional overshoot of a step response for this damping ratio.
    pub fn overshoot_bound(&self) -> f32 {
        let zeta = self.damping_ratio();
        if zeta >= 1.0 {
            0.0
        } else {
            (-std::f32::consts::PI * zeta / (1.0 - zeta * zeta).sqrt()).exp()
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ResponsiveConfig {
    pub mobile_breakpoint: f32,
    pub reference_width: f32,
    pub min_scale: f32,
    pub max_scale: f32,
    pub mobile_explode_factor: f32,
}

impl Default for ResponsiveConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: MOBILE_BREAKPOINT_PX,
            reference_width: REFERENCE_WIDTH_PX,
            min_scale: MIN_SCALE_FACTOR,
            max_scale: MAX_SCALE_FACTOR,
            mobile_explode_factor: MOBILE_EXPLODE_FACTOR,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct PhaseConfig {
    pub hero_intro: Window,
    pub hero_outro: Window,
    /// Length of the hero fade ramps at both ends.
    pub hero_fade: f32,
    pub explode: Window,
    pub reassemble: Window,
    pub label_threshold: f32,
    pub connector_threshold: f32,
}

impl Default for PhaseConfig {
    fn default() -> Self {
        Self {
            hero_intro: Window::new(HERO_INTRO.0, HERO_INTRO.1),
            hero_outro: Window::new(HERO_OUTRO.0, HERO_OUTRO.1),
            hero_fade: HERO_FADE,
            explode: Window::new(EXPLODE_WINDOW.0, EXPLODE_WINDOW.1),
            reassemble: Window::new(REASSEMBLE_WINDOW.0, REASSEMBLE_WINDOW.1),
            label_threshold: LABEL_THRESHOLD,
            connector_threshold: CONNECTOR_THRESHOLD,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct HaloConfig {
    /// Minimum normalized speed before the halo appears.
    pub threshold: f32,
    /// Multiplier from smoother velocity (progress/sec) to normalized speed.
    ///
    /// The default of 1 compares the threshold against progress/sec directly.
    /// `0.001` divides the velocity by 1000 before the threshold test, so the
    /// halo only shows for very fast flicks.
    pub velocity_scale: f32,
    pub max_speed: f32,
    pub base_radius: f32,
    pub radius_per_speed: f32,
    pub alpha_per_speed: f32,
    pub max_alpha: f32,
    pub color: Rgba,
}

impl Default for HaloConfig {
    fn default() -> Self {
        let [r, g, b] = HALO_RGB;
        Self {
            threshold: HALO_THRESHOLD,
            velocity_scale: HALO_VELOCITY_SCALE,
            max_speed: HALO_MAX_SPEED,
            base_radius: HALO_BASE_RADIUS,
            radius_per_speed: HALO_RADIUS_PER_SPEED,
            alpha_per_speed: HALO_ALPHA_PER_SPEED,
            max_alpha: HALO_MAX_ALPHA,
            color: Rgba::opaque(r, g, b),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Procedural hero + exploded technical view.
    #[default]
    Exploded,
    /// Pre-rendered raster frames indexed by progress.
    Sequence,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SequenceConfig {
    pub frame_count: u32,
    /// Progress at which the last frame is reached.
    pub progress_end: f32,
    /// Frame URL with an `{index}` placeholder.
    pub url_template: String,
    /// Zero-padding applied to the substituted index.
    pub index_width: usize,
    /// Fraction-of-sequence band in which the analysis ring is overlaid.
    pub analysis_band: [f32; 2],
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            frame_count: SEQUENCE_FRAME_COUNT,
            progress_end: SEQUENCE_PROGRESS_END,
            url_template: "sequence/frame_{index}.webp".to_string(),
            index_width: SEQUENCE_INDEX_WIDTH,
            analysis_band: SEQUENCE_ANALYSIS_BAND,
        }
    }
}

impl SequenceConfig {
    pub fn frame_url(&self, index: u32) -> String {
        let padded = format!("{:0width$}", index, width = self.index_width);
        self.url_template.replace("{index}", &padded)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub nodes: Vec<NodeSpec>,
    pub connectors: Vec<ConnectorSpec>,
    pub connector_color: Rgba,
    pub phases: PhaseConfig,
    pub halo: HaloConfig,
    pub smoother: SmootherConfig,
    pub responsive: ResponsiveConfig,
    pub strategy: Strategy,
    pub sequence: SequenceConfig,
    /// Hero product image; the hero layer is skipped entirely when absent.
    pub hero_url: Option<String>,
    /// Wire the window scroll position as the progress source.
    pub track_window_scroll: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let [r, g, b] = CONNECTOR_RGB;
        Self {
            nodes: reference_nodes(),
            connectors: reference_connectors(),
            connector_color: Rgba::opaque(r, g, b),
            phases: PhaseConfig::default(),
            halo: HaloConfig::default(),
            smoother: SmootherConfig::default(),
            responsive: ResponsiveConfig::default(),
            strategy: Strategy::default(),
            sequence: SequenceConfig::default(),
            hero_url: Some("assets/hero.webp".to_string()),
            track_window_scroll: true,
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.phases;
        p.hero_intro.validate("hero_intro")?;
        p.hero_outro.validate("hero_outro")?;
        p.explode.validate("explode")?;
        p.reassemble.validate("reassemble")?;
        positive("hero_fade", p.hero_fade)?;
        if p.hero_fade > p.hero_intro.span() {
            return Err(ConfigError::HeroFade {
                fade: p.hero_fade,
                span: p.hero_intro.span(),
            });
        }
        in_unit("label_threshold", p.label_threshold)?;
        in_unit("connector_threshold", p.connector_threshold)?;

        let s = &self.smoother;
        positive("stiffness", s.stiffness)?;
        positive("damping", s.damping)?;
        positive("mass", s.mass)?;
        positive("rest_delta", s.rest_delta)?;
        positive("rest_speed", s.rest_speed)?;

        let r = &self.responsive;
        positive("mobile_breakpoint", r.mobile_breakpoint)?;
        positive("reference_width", r.reference_width)?;
        positive("min_scale", r.min_scale)?;
        positive("max_scale", r.max_scale)?;
        positive("mobile_explode_factor", r.mobile_explode_factor)?;
        if r.min_scale > r.max_scale {
            return Err(ConfigError::ScaleBounds {
                min: r.min_scale,
                max: r.max_scale,
            });
        }

        let h = &self.halo;
        positive("halo.threshold", h.threshold)?;
        positive("halo.velocity_scale", h.velocity_scale)?;
        positive("halo.max_speed", h.max_speed)?;
        in_unit("halo.max_alpha", h.max_alpha)?;

        if self.nodes.is_empty() {
            return Err(ConfigError::NoNodes);
        }
        for (i, node) in self.nodes.iter().enumerate() {
            positive("node.radius", node.radius)?;
            if self.nodes[..i].iter().any(|n| n.id == node.id) {
                return Err(ConfigError::DuplicateNode(node.id.clone()));
            }
        }

        if self.strategy == Strategy::Sequence {
            let q = &self.sequence;
            if q.frame_count == 0 {
                return Err(ConfigError::NoFrames);
            }
            positive("sequence.progress_end", q.progress_end)?;
            in_unit("sequence.progress_end", q.progress_end)?;
            if !q.url_template.contains("{index}") {
                return Err(ConfigError::UrlTemplate(q.url_template.clone()));
            }
            let [lo, hi] = q.analysis_band;
            in_unit("sequence.analysis_band", lo)?;
            in_unit("sequence.analysis_band", hi)?;
            if lo > hi {
                return Err(ConfigError::Window {
                    name: "sequence.analysis_band",
                    start: lo,
                    end: hi,
                });
            }
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

fn in_unit(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfUnitRange { name, value })
    }
}
