use thiserror::Error;

/// Rejected engine configuration. Raised once at mount time, never per tick.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("window `{name}` must satisfy 0 <= start < end <= 1 (got {start}..{end})")]
    Window { name: &'static str, start: f32, end: f32 },

    #[error("`{name}` must be finite and positive (got {value})")]
    NonPositive { name: &'static str, value: f32 },

    #[error("`{name}` must lie in [0, 1] (got {value})")]
    OutOfUnitRange { name: &'static str, value: f32 },

    #[error("hero fade {fade} is longer than the intro window ({span})")]
    HeroFade { fade: f32, span: f32 },

    #[error("scale clamp bounds inverted: min {min} > max {max}")]
    ScaleBounds { min: f32, max: f32 },

    #[error("invalid color `{0}`; expected #RRGGBB")]
    Color(String),

    #[error("node table is empty")]
    NoNodes,

    #[error("duplicate node id `{0}`")]
    DuplicateNode(String),

    #[error("frame sequence needs at least one frame")]
    NoFrames,

    #[error("url template `{0}` has no `{{index}}` placeholder")]
    UrlTemplate(String),
}
