//! Procedural strategy: hero image, exploded component nodes, connectors and
//! the velocity halo.

use crate::assets::{AssetId, AssetSource};
use crate::composer::{Composer, FrameInput};
use crate::config::{EngineConfig, HaloConfig, PhaseConfig};
use crate::constants::*;
use crate::draw::{DrawList, Rect};
use crate::paint::{unit, Rgba};
use crate::phases::{active_explode, glow_alpha, halo, hero_alpha, label_alpha, node_alpha};
use crate::scene::ComponentNode;
use glam::Vec2;

/// Everything besides the node table that shapes the exploded view.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneStyle {
    pub phases: PhaseConfig,
    pub halo: HaloConfig,
    /// Reference-pixel endpoints of each connector line.
    pub connectors: Vec<(Vec2, Vec2)>,
    pub connector_color: Rgba,
    /// Hero product image; the hero layer is skipped entirely when absent.
    pub hero_url: Option<String>,
}

/// Record the exploded view for one tick.
///
/// Command order: hero image, then per node glow → ring → label → leader,
/// then connectors, then the halo on top.
pub fn composite(
    input: &FrameInput,
    nodes: &[ComponentNode],
    style: &SceneStyle,
    assets: &dyn AssetSource,
    out: &mut DrawList,
) {
    let vp = &input.viewport;
    let p = unit(input.progress);
    let center = vp.center();
    let scale = vp.scale_factor;
    let phases = &style.phases;

    if style.hero_url.is_some() {
        let alpha = hero_alpha(p, phases);
        if alpha > 0.0 {
            if let Some(size) = assets.image(AssetId::Hero) {
                let base = if vp.is_portrait() {
                    HERO_SCALE_PORTRAIT
                } else {
                    HERO_SCALE_LANDSCAPE
                };
                let k = (base + p * HERO_SCALE_GROWTH) * scale;
                let rect = Rect::centered(center, Vec2::new(size.width * k, size.height * k));
                out.push_image(AssetId::Hero, rect, alpha);
            }
        }
    }

    let explode = active_explode(p, phases);
    if explode > 0.0 {
        let displacement = explode * vp.explode_factor * scale;
        let alpha = node_alpha(explode);
        let ring = Rgba::WHITE.with_alpha(alpha * RING_ALPHA);
        let text_alpha = if vp.is_mobile {
            0.0
        } else {
            label_alpha(explode, phases.label_threshold)
        };
        let font_px = (LABEL_FONT_PX * scale).max(LABEL_FONT_MIN_PX);

        for node in nodes {
            let pos = center + node.offset * displacement;
            let r = node.radius * scale;
            out.push_glow(
                pos,
                r * GLOW_RADIUS_MULTIPLIER,
                node.color.with_alpha(glow_alpha(alpha)),
            );
            out.push_ring(pos, r, ring, Some(RING_DASH));
            if text_alpha > 0.0 {
                out.push_label(
                    pos + Vec2::new(r + LABEL_GAP_PX, LABEL_BASELINE_PX),
                    node.caption.clone(),
                    font_px,
                    LABEL_LETTER_SPACING_PX,
                    Rgba::WHITE.with_alpha(text_alpha),
                );
                out.push_line(
                    pos + Vec2::new(r, 0.0),
                    pos + Vec2::new(r + LEADER_LENGTH_PX, 0.0),
                    ring,
                );
            }
        }

        if explode > phases.connector_threshold {
            let stroke = style.connector_color.with_alpha(explode * CONNECTOR_ALPHA);
            for &(from, to) in &style.connectors {
                out.push_line(center + from * displacement, center + to * displacement, stroke);
            }
        }
    }

    if let Some(h) = halo(input.velocity, &style.halo) {
        out.push_ring(center, h.radius * scale, style.halo.color.with_alpha(h.alpha), None);
    }
}

/// [`Composer`] wrapper owning the node table and style.
#[derive(Clone, Debug)]
pub struct ExplodedView {
    nodes: Vec<ComponentNode>,
    style: SceneStyle,
}

impl ExplodedView {
    pub fn new(nodes: Vec<ComponentNode>, style: SceneStyle) -> Self {
        Self { nodes, style }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        let nodes = config.nodes.iter().map(ComponentNode::from).collect();
        let style = SceneStyle {
            phases: config.phases,
            halo: config.halo,
            connectors: config
                .connectors
                .iter()
                .map(|c| (Vec2::from(c.from), Vec2::from(c.to)))
                .collect(),
            connector_color: config.connector_color,
            hero_url: config.hero_url.clone(),
        };
        Self::new(nodes, style)
    }
}

impl Composer for ExplodedView {
    fn name(&self) -> &'static str {
        "exploded"
    }

    fn compose(&self, input: &FrameInput, assets: &dyn AssetSource, out: &mut DrawList) {
        composite(input, &self.nodes, &self.style, assets, out);
    }

    fn assets(&self) -> Vec<(AssetId, String)> {
        self.style
            .hero_url
            .iter()
            .map(|url| (AssetId::Hero, url.clone()))
            .collect()
    }
}
