use crate::config::ResponsiveConfig;
use glam::Vec2;
use std::cell::Cell;

/// Host resize notification payload, in logical (CSS) pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ResizeEvent {
    pub width: f32,
    pub height: f32,
    pub device_pixel_ratio: f32,
}

impl ResizeEvent {
    #[inline]
    pub const fn new(width: f32, height: f32, device_pixel_ratio: f32) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio,
        }
    }
}

/// Derived viewport metrics, published as one value.
///
/// All drawing happens in logical pixels; the surface maps them onto the
/// `backing_width × backing_height` store with a uniform DPR transform.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub device_pixel_ratio: f32,
    pub backing_width: u32,
    pub backing_height: u32,
    pub scale_factor: f32,
    pub is_mobile: bool,
    /// Displacement multiplier for exploded nodes (reduced on mobile).
    pub explode_factor: f32,
    /// False for zero-area or detached surfaces; such ticks are skipped.
    pub valid: bool,
}

impl Viewport {
    pub fn invalid() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            device_pixel_ratio: 1.0,
            backing_width: 0,
            backing_height: 0,
            scale_factor: 0.0,
            is_mobile: false,
            explode_factor: 1.0,
            valid: false,
        }
    }

    pub fn compute(event: ResizeEvent, config: &ResponsiveConfig) -> Self {
        let ResizeEvent {
            width,
            height,
            device_pixel_ratio,
        } = event;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Self::invalid();
        }
        let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        let is_mobile = width < config.mobile_breakpoint;
        Self {
            width,
            height,
            device_pixel_ratio: dpr,
            backing_width: ((width * dpr) as u32).max(1),
            backing_height: ((height * dpr) as u32).max(1),
            scale_factor: (width / config.reference_width).clamp(config.min_scale, config.max_scale),
            is_mobile,
            explode_factor: if is_mobile {
                config.mobile_explode_factor
            } else {
                1.0
            },
            valid: true,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    #[inline]
    pub fn is_portrait(&self) -> bool {
        self.width < self.height
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::invalid()
    }
}

/// Sole owner of the current [`Viewport`].
///
/// Resize handlers call [`ViewportManager::on_resize`]; the render loop only
/// reads [`ViewportManager::current`]. The new value is computed in full
/// before it replaces the old one, so a tick never sees a mix of the two.
#[derive(Debug)]
pub struct ViewportManager {
    config: ResponsiveConfig,
    current: Cell<Viewport>,
}

impl ViewportManager {
    pub fn new(config: ResponsiveConfig) -> Self {
        Self {
            config,
            current: Cell::new(Viewport::invalid()),
        }
    }

    pub fn on_resize(&self, event: ResizeEvent) -> Viewport {
        let next = Viewport::compute(event, &self.config);
        let prev = self.current.replace(next);
        if prev.is_mobile != next.is_mobile || prev.valid != next.valid {
            log::info!(
                "[viewport] {}x{} dpr={:.2} scale={:.3} mobile={} valid={}",
                next.width,
                next.height,
                next.device_pixel_ratio,
                next.scale_factor,
                next.is_mobile,
                next.valid
            );
        }
        next
    }

    #[inline]
    pub fn current(&self) -> Viewport {
        self.current.get()
    }
}
