use crate::config::SmootherConfig;
use crate::constants::{SPRING_MAX_DT_SEC, SPRING_MAX_SUBSTEP_SEC};

/// Mass-spring-damper filter turning raw scroll progress into a smooth value.
///
/// `update` only moves the target; the value advances when the render loop
/// calls [`Smoother::tick`]. Velocity is the derivative of the smoothed value
/// in progress units per second, never of the raw input.
#[derive(Clone, Debug)]
pub struct Smoother {
    config: SmootherConfig,
    target: f32,
    value: f32,
    velocity: f32,
}

impl Smoother {
    pub fn new(config: SmootherConfig) -> Self {
        Self {
            config,
            target: 0.0,
            value: 0.0,
            velocity: 0.0,
        }
    }

    pub fn config(&self) -> &SmootherConfig {
        &self.config
    }

    /// Set a new target. Non-finite input is ignored.
    #[inline]
    pub fn update(&mut self, raw: f32) {
        if raw.is_finite() {
            self.target = raw;
        }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub fn is_at_rest(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Snap to `value` with zero velocity (e.g. restoring a scroll position).
    pub fn jump_to(&mut self, value: f32) {
        if value.is_finite() {
            self.target = value;
            self.value = value;
            self.velocity = 0.0;
        }
    }

    /// Advance the spring by `dt_sec` seconds using fixed sub-steps.
    pub fn tick(&mut self, dt_sec: f32) {
        // also rejects NaN
        if !(dt_sec > 0.0) || self.is_at_rest() {
            return;
        }
        let dt = dt_sec.min(SPRING_MAX_DT_SEC);
        let steps = (dt / SPRING_MAX_SUBSTEP_SEC).ceil().max(1.0) as u32;
        let h = dt / steps as f32;

        let SmootherConfig {
            stiffness: k,
            damping: c,
            mass: m,
            rest_delta,
            rest_speed,
        } = self.config;

        // semi-implicit Euler: velocity first, then position
        for _ in 0..steps {
            let x = self.value - self.target;
            let accel = (-k * x - c * self.velocity) / m;
            self.velocity += accel * h;
            self.value += self.velocity * h;
        }

        if (self.value - self.target).abs() < rest_delta && self.velocity.abs() < rest_speed {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }
}

impl Default for Smoother {
    fn default() -> Self {
        Self::new(SmootherConfig::default())
    }
}
