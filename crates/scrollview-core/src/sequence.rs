//! Frame-indexed strategy: progress picks one pre-rendered raster per tick.

use crate::assets::{AssetId, AssetSource};
use crate::composer::{Composer, FrameInput};
use crate::config::SequenceConfig;
use crate::constants::{ANALYSIS_RING_ALPHA, ANALYSIS_RING_RADIUS, ANALYSIS_RING_RGB};
use crate::draw::{DrawList, Rect};
use crate::paint::{unit, Rgba};
use glam::Vec2;
use std::cell::Cell;

/// Map progress onto `[0, frame_count - 1]`, reaching the last frame at `progress_end`.
pub fn frame_index(progress: f32, frame_count: u32, progress_end: f32) -> u32 {
    let last = frame_count.saturating_sub(1);
    let t = unit(unit(progress) / progress_end);
    ((t * last as f32).round() as u32).min(last)
}

#[derive(Debug)]
pub struct FrameSequence {
    config: SequenceConfig,
    shown: Cell<Option<u32>>,
}

impl FrameSequence {
    pub fn new(config: SequenceConfig) -> Self {
        Self {
            config,
            shown: Cell::new(None),
        }
    }

    pub fn config(&self) -> &SequenceConfig {
        &self.config
    }

    /// Whether `index` falls in the band that gets the analysis ring overlay.
    pub fn in_analysis_band(&self, index: u32) -> bool {
        let last = self.config.frame_count.saturating_sub(1);
        if last == 0 {
            return false;
        }
        let frac = index as f32 / last as f32;
        let [lo, hi] = self.config.analysis_band;
        (lo..=hi).contains(&frac)
    }
}

impl Composer for FrameSequence {
    fn name(&self) -> &'static str {
        "sequence"
    }

    fn compose(&self, input: &FrameInput, assets: &dyn AssetSource, out: &mut DrawList) {
        let vp = &input.viewport;
        let index = frame_index(
            input.progress,
            self.config.frame_count,
            self.config.progress_end,
        );
        if self.shown.replace(Some(index)) != Some(index) {
            log::debug!("[sequence] frame {index}");
        }

        if let Some(size) = assets.image(AssetId::Frame(index)) {
            // cover-fit, centered
            let k = (vp.width / size.width).max(vp.height / size.height);
            let rect = Rect::centered(vp.center(), Vec2::new(size.width * k, size.height * k));
            out.push_image(AssetId::Frame(index), rect, 1.0);
        }

        if self.in_analysis_band(index) {
            let [r, g, b] = ANALYSIS_RING_RGB;
            out.push_ring(
                vp.center(),
                ANALYSIS_RING_RADIUS * vp.scale_factor,
                Rgba::opaque(r, g, b).with_alpha(ANALYSIS_RING_ALPHA),
                None,
            );
        }
    }

    fn assets(&self) -> Vec<(AssetId, String)> {
        (0..self.config.frame_count)
            .map(|i| (AssetId::Frame(i), self.config.frame_url(i)))
            .collect()
    }
}
