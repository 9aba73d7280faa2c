//! Reference tuning for the scroll composition.
//!
//! Every value here is a default for a field of [`crate::EngineConfig`]; hosts
//! can override any of them through the JSON configuration surface.

// Spring smoothing (mass-spring-damper driven by raw scroll progress)
pub const SPRING_STIFFNESS: f32 = 60.0;
pub const SPRING_DAMPING: f32 = 30.0;
pub const SPRING_MASS: f32 = 1.0;
pub const SPRING_REST_DELTA: f32 = 0.0001;
pub const SPRING_REST_SPEED: f32 = 0.001; // progress units per second

// Integration limits
pub const SPRING_MAX_SUBSTEP_SEC: f32 = 0.004;
pub const SPRING_MAX_DT_SEC: f32 = 0.25; // a backgrounded tab must not fling the value

// Responsive layout
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;
pub const REFERENCE_WIDTH_PX: f32 = 1400.0;
pub const MIN_SCALE_FACTOR: f32 = 0.5;
pub const MAX_SCALE_FACTOR: f32 = 1.2;
pub const MOBILE_EXPLODE_FACTOR: f32 = 0.6;

// Phase windows (normalized progress)
pub const HERO_INTRO: (f32, f32) = (0.0, 0.25);
pub const HERO_OUTRO: (f32, f32) = (0.85, 1.0);
pub const HERO_FADE: f32 = 0.15;
pub const EXPLODE_WINDOW: (f32, f32) = (0.1, 0.7);
pub const REASSEMBLE_WINDOW: (f32, f32) = (0.75, 0.95);
pub const LABEL_THRESHOLD: f32 = 0.4;
pub const CONNECTOR_THRESHOLD: f32 = 0.2;

// Hero product sizing, applied to the image's natural size
pub const HERO_SCALE_LANDSCAPE: f32 = 0.4;
pub const HERO_SCALE_PORTRAIT: f32 = 0.6;
pub const HERO_SCALE_GROWTH: f32 = 0.05; // extra scale at progress = 1

// Node styling
pub const GLOW_RADIUS_MULTIPLIER: f32 = 1.5;
pub const GLOW_ALPHA_LEVELS: f32 = 40.0; // glow center alpha byte at full strength, out of 255
pub const RING_ALPHA: f32 = 0.2;
pub const RING_DASH: [f32; 2] = [4.0, 4.0];
pub const LABEL_GAP_PX: f32 = 15.0;
pub const LABEL_BASELINE_PX: f32 = 4.0;
pub const LEADER_LENGTH_PX: f32 = 10.0;
pub const LABEL_FONT_PX: f32 = 10.0;
pub const LABEL_FONT_MIN_PX: f32 = 8.0;
pub const LABEL_LETTER_SPACING_PX: f32 = 2.0;

// Connector lines
pub const CONNECTOR_ALPHA: f32 = 0.1;
pub const CONNECTOR_RGB: [u8; 3] = [0, 80, 255];

// Velocity halo
pub const HALO_THRESHOLD: f32 = 0.1;
pub const HALO_VELOCITY_SCALE: f32 = 1.0;
pub const HALO_MAX_SPEED: f32 = 5.0;
pub const HALO_BASE_RADIUS: f32 = 250.0;
pub const HALO_RADIUS_PER_SPEED: f32 = 100.0;
pub const HALO_ALPHA_PER_SPEED: f32 = 0.5;
pub const HALO_MAX_ALPHA: f32 = 0.2;
pub const HALO_RGB: [u8; 3] = [0, 214, 255];

// Frame sequence strategy
pub const SEQUENCE_FRAME_COUNT: u32 = 120;
pub const SEQUENCE_PROGRESS_END: f32 = 0.9;
pub const SEQUENCE_INDEX_WIDTH: usize = 4;
pub const SEQUENCE_ANALYSIS_BAND: [f32; 2] = [0.35, 0.65];
pub const ANALYSIS_RING_RADIUS: f32 = 220.0;
pub const ANALYSIS_RING_ALPHA: f32 = 0.08;
pub const ANALYSIS_RING_RGB: [u8; 3] = [0, 214, 255];
