use crate::assets::{AssetId, AssetSource};
use crate::compositor::ExplodedView;
use crate::config::{EngineConfig, Strategy};
use crate::draw::DrawList;
use crate::paint::unit;
use crate::sequence::FrameSequence;
use crate::viewport::Viewport;

/// Everything a composer may read for one tick.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameInput {
    pub progress: f32,
    /// Smoothed velocity in progress units per second.
    pub velocity: f32,
    pub viewport: Viewport,
}

impl FrameInput {
    /// Clamps progress into [0, 1] and zeroes a NaN velocity.
    pub fn new(progress: f32, velocity: f32, viewport: Viewport) -> Self {
        Self {
            progress: unit(progress),
            velocity: if velocity.is_nan() { 0.0 } else { velocity },
            viewport,
        }
    }
}

/// A rendering strategy: progress in, ordered draw commands out.
///
/// Implementations are pure with respect to their inputs; the presentation
/// layer does not know which one is active.
pub trait Composer {
    fn name(&self) -> &'static str;

    /// Record this tick's commands into `out` (which the caller has cleared).
    fn compose(&self, input: &FrameInput, assets: &dyn AssetSource, out: &mut DrawList);

    /// Raster assets this strategy may reference, with their URLs.
    fn assets(&self) -> Vec<(AssetId, String)>;
}

/// Build the composer selected by `config.strategy`.
pub fn build_composer(config: &EngineConfig) -> Box<dyn Composer> {
    match config.strategy {
        Strategy::Exploded => Box::new(ExplodedView::from_config(config)),
        Strategy::Sequence => Box::new(FrameSequence::new(config.sequence.clone())),
    }
}

/// One-shot convenience around [`Composer::compose`].
///
/// Returns an empty list for an invalid viewport.
pub fn render(composer: &dyn Composer, input: &FrameInput, assets: &dyn AssetSource) -> DrawList {
    let mut out = DrawList::new();
    if input.viewport.valid {
        composer.compose(input, assets, &mut out);
    }
    out
}
