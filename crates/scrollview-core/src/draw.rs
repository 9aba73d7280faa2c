//! Renderer-agnostic draw command stream.
//!
//! Composers record into a [`DrawList`]; a surface replays it in insertion
//! order. The `push_*` helpers are the single gate where alpha and extents
//! are clamped, and where fully invisible primitives are dropped, so no
//! out-of-range value ever reaches a surface.

use crate::assets::AssetId;
use crate::paint::{unit, Rgba};
use glam::Vec2;
use std::rc::Rc;

/// Axis-aligned rectangle in logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    /// Rectangle of size `size` centered on `center`.
    #[inline]
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self {
            x: center.x - size.x * 0.5,
            y: center.y - size.y * 0.5,
            w: size.x,
            h: size.y,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageCmd {
    pub asset: AssetId,
    pub rect: Rect,
    pub alpha: f32,
}

/// Radial gradient from `color` at the center to transparent at `radius`.
#[derive(Debug, Clone, PartialEq)]
pub struct GlowCmd {
    pub center: Vec2,
    pub radius: f32,
    pub color: Rgba,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RingCmd {
    pub center: Vec2,
    pub radius: f32,
    pub stroke: Rgba,
    pub line_width: f32,
    /// `[dash, gap]` in logical pixels; `None` draws a solid ring.
    pub dash: Option<[f32; 2]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub stroke: Rgba,
    pub line_width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelCmd {
    /// Left end of the text baseline.
    pub origin: Vec2,
    pub text: Rc<str>,
    pub font_px: f32,
    /// Extra space between glyphs, in logical pixels.
    pub letter_spacing: f32,
    pub color: Rgba,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Image(ImageCmd),
    Glow(GlowCmd),
    Ring(RingCmd),
    Line(LineCmd),
    Label(LabelCmd),
}

/// Ordered draw commands for one tick.
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    cmds: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops recorded commands, keeping capacity for the next tick.
    #[inline]
    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    #[inline]
    pub fn cmds(&self) -> &[DrawCmd] {
        &self.cmds
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    pub fn push_image(&mut self, asset: AssetId, rect: Rect, alpha: f32) {
        let alpha = unit(alpha);
        if alpha <= 0.0 || !(rect.w > 0.0 && rect.h > 0.0) {
            return;
        }
        self.cmds.push(DrawCmd::Image(ImageCmd { asset, rect, alpha }));
    }

    pub fn push_glow(&mut self, center: Vec2, radius: f32, color: Rgba) {
        let color = color.with_alpha(color.a);
        if !color.is_visible() || !(radius > 0.0) {
            return;
        }
        self.cmds.push(DrawCmd::Glow(GlowCmd {
            center,
            radius,
            color,
        }));
    }

    pub fn push_ring(&mut self, center: Vec2, radius: f32, stroke: Rgba, dash: Option<[f32; 2]>) {
        let stroke = stroke.with_alpha(stroke.a);
        if !stroke.is_visible() || !(radius > 0.0) {
            return;
        }
        self.cmds.push(DrawCmd::Ring(RingCmd {
            center,
            radius,
            stroke,
            line_width: 1.0,
            dash,
        }));
    }

    pub fn push_line(&mut self, from: Vec2, to: Vec2, stroke: Rgba) {
        let stroke = stroke.with_alpha(stroke.a);
        if !stroke.is_visible() || from == to {
            return;
        }
        self.cmds.push(DrawCmd::Line(LineCmd {
            from,
            to,
            stroke,
            line_width: 1.0,
        }));
    }

    pub fn push_label(
        &mut self,
        origin: Vec2,
        text: Rc<str>,
        font_px: f32,
        letter_spacing: f32,
        color: Rgba,
    ) {
        let color = color.with_alpha(color.a);
        if !color.is_visible() || !(font_px > 0.0) || text.is_empty() {
            return;
        }
        self.cmds.push(DrawCmd::Label(LabelCmd {
            origin,
            text,
            font_px,
            // NaN fails the comparison and becomes 0
            letter_spacing: if letter_spacing > 0.0 { letter_spacing } else { 0.0 },
            color,
        }));
    }
}
