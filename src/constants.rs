// Web front-end wiring and frame timing constants. Composition tuning lives
// in `scrollview_core::constants`; these only cover how the engine attaches
// to the page.

// Canvas looked up when the host passes no id
pub const DEFAULT_CANVAS_ID: &str = "scrollview-canvas";

// DOM events
pub const RESIZE_EVENT: &str = "resize";
pub const SCROLL_EVENT: &str = "scroll";

// Frame timing
pub const NOMINAL_FRAME_DT_SEC: f32 = 1.0 / 60.0; // assumed for the very first tick
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // longer gaps (hidden tab) are treated as this

// Canvas measurement
pub const VIEWPORT_EPSILON_PX: f32 = 0.01; // sub-pixel layout jitter is not a resize

// Label typography
pub const LABEL_FONT_WEIGHT: u32 = 500;
pub const LABEL_FONT_FAMILY: &str = "Inter, system-ui, sans-serif";
