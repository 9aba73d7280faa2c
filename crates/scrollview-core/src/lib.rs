//! Platform-independent core of the scroll-driven product view.
//!
//! Nothing here touches the DOM: the web front-end feeds raw progress and
//! resize events in, advances the [`Smoother`] once per display refresh, and
//! replays the [`DrawList`] produced by the active [`Composer`].

pub mod assets;
pub mod composer;
pub mod compositor;
pub mod config;
pub mod constants;
pub mod draw;
pub mod error;
pub mod paint;
pub mod phases;
pub mod progress;
pub mod scene;
pub mod sequence;
pub mod smoother;
pub mod viewport;

pub use assets::{AssetId, AssetSource, ImageSize, NoAssets};
pub use composer::{build_composer, render, Composer, FrameInput};
pub use compositor::{composite, ExplodedView, SceneStyle};
pub use config::{
    EngineConfig, HaloConfig, PhaseConfig, ResponsiveConfig, SequenceConfig, SmootherConfig,
    Strategy, Window,
};
pub use draw::{DrawCmd, DrawList, GlowCmd, ImageCmd, LabelCmd, LineCmd, Rect, RingCmd};
pub use error::ConfigError;
pub use paint::Rgba;
pub use progress::{ProgressCell, Subscription};
pub use scene::{ComponentNode, ConnectorSpec, NodeSpec};
pub use sequence::{frame_index, FrameSequence};
pub use smoother::Smoother;
pub use viewport::{ResizeEvent, Viewport, ViewportManager};
