use crate::constants::*;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("sensitivity must be finite and positive, got {0}")]
    Sensitivity(f64),
    #[error("lerp factor must lie in (0, 1), got {0}")]
    LerpFactor(f64),
    #[error("frame step must be finite and positive, got {0}")]
    FrameStep(f64),
    #[error("flick threshold must be finite and non-negative, got {0}")]
    FlickThreshold(f64),
    #[error("playback rate must be finite and positive, got {0}")]
    Rate(f64),
    #[error("epsilon must be finite and positive, got {0}")]
    Epsilon(f64),
    #[error("{0} must be non-zero")]
    ZeroDuration(&'static str),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ControllerConfig {
    pub sensitivity: f64,
    pub lerp_factor: f64,
    pub frame_step: f64,
    pub flick_threshold: f64,
    pub flick_rate: f64,
    pub flick_duration: Duration,
    pub epsilon: f64,
    pub resync_period: Duration,
    pub preview_rate: f64,
    pub hint_duration: Duration,
    /// `None` disables ambient auto-rotation.
    pub auto_rotate_delay: Option<Duration>,
    pub auto_rotate_speed_deg: f64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            sensitivity: SENSITIVITY,
            lerp_factor: LERP_FACTOR,
            frame_step: FRAME_STEP_SEC,
            flick_threshold: FLICK_THRESHOLD_PX_PER_MS,
            flick_rate: FLICK_RATE,
            flick_duration: FLICK_DURATION,
            epsilon: EPSILON_SEC,
            resync_period: RESYNC_PERIOD,
            preview_rate: PREVIEW_RATE,
            hint_duration: HINT_DURATION,
            auto_rotate_delay: Some(AUTO_ROTATE_DELAY),
            auto_rotate_speed_deg: AUTO_ROTATE_SPEED_DEG_PER_SEC,
        }
    }
}

impl ControllerConfig {
    pub fn with_sensitivity(mut self, sensitivity: f64) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    pub fn with_lerp_factor(mut self, lerp_factor: f64) -> Self {
        self.lerp_factor = lerp_factor;
        self
    }

    pub fn with_frame_step(mut self, frame_step: f64) -> Self {
        self.frame_step = frame_step;
        self
    }

    pub fn with_flick_threshold(mut self, px_per_ms: f64) -> Self {
        self.flick_threshold = px_per_ms;
        self
    }

    pub fn with_auto_rotate_delay(mut self, delay: Option<Duration>) -> Self {
        self.auto_rotate_delay = delay;
        self
    }

    /// Check every tuning value, reporting the first one out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.sensitivity.is_finite() && self.sensitivity > 0.0) {
            return Err(ConfigError::Sensitivity(self.sensitivity));
        }
        if !(self.lerp_factor > 0.0 && self.lerp_factor < 1.0) {
            return Err(ConfigError::LerpFactor(self.lerp_factor));
        }
        if !(self.frame_step.is_finite() && self.frame_step > 0.0) {
            return Err(ConfigError::FrameStep(self.frame_step));
        }
        if !(self.flick_threshold.is_finite() && self.flick_threshold >= 0.0) {
            return Err(ConfigError::FlickThreshold(self.flick_threshold));
        }
        for rate in [self.flick_rate, self.preview_rate] {
            if !(rate.is_finite() && rate > 0.0) {
                return Err(ConfigError::Rate(rate));
            }
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(ConfigError::Epsilon(self.epsilon));
        }
        if self.flick_duration.is_zero() {
            return Err(ConfigError::ZeroDuration("flick duration"));
        }
        if self.resync_period.is_zero() {
            return Err(ConfigError::ZeroDuration("resync period"));
        }
        Ok(())
    }
}
