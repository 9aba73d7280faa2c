/// Identifies a raster asset the composers may reference.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AssetId {
    Hero,
    Frame(u32),
}

/// Natural pixel size of a loaded image.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ImageSize {
    pub width: f32,
    pub height: f32,
}

/// Non-blocking readiness check. `None` means "not present this tick".
pub trait AssetSource {
    fn image(&self, id: AssetId) -> Option<ImageSize>;
}

/// Source with nothing loaded; image layers are simply omitted.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoAssets;

impl AssetSource for NoAssets {
    fn image(&self, _id: AssetId) -> Option<ImageSize> {
        None
    }
}
