use crate::constants::FALLBACK_DURATION_SEC;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TimelineError {
    #[error("playback was rejected: {0}")]
    PlayRejected(String),
    #[error("timeline is detached from its media element")]
    Detached,
}

/// A looping, seekable media timeline (an HTML video element on the web).
pub trait MediaTimeline {
    /// Length in seconds; `None` until metadata has loaded.
    fn duration(&self) -> Option<f64>;
    fn position(&self) -> f64;
    /// Seek. Callers pass positions already wrapped into `[0, duration)`.
    fn seek(&mut self, seconds: f64);
    fn playback_rate(&self) -> f64;
    fn set_playback_rate(&mut self, rate: f64);
    fn play(&mut self) -> Result<(), TimelineError>;
    /// Idempotent.
    fn pause(&mut self);
    /// Whether a negative playback rate plays the media backwards.
    fn supports_reverse_playback(&self) -> bool {
        false
    }
}

/// Geometry of the element that receives the drag gestures.
pub trait ContainerGeometry {
    /// Width in CSS pixels, `None` while the element is not attached.
    fn width_px(&self) -> Option<f64>;
}

/// Load status of the timeline, driven by the host's metadata/error signals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Readiness {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// A duration the controller may divide by and wrap into.
#[inline]
pub fn usable_duration(duration: Option<f64>) -> Option<f64> {
    duration.filter(|d| d.is_finite() && *d > 0.0)
}

#[inline]
pub fn effective_duration(duration: Option<f64>) -> f64 {
    usable_duration(duration).unwrap_or(FALLBACK_DURATION_SEC)
}

/// Wrap `t` into `[0, duration)`. Non-finite input maps to 0.
#[inline]
pub fn wrap_time(t: f64, duration: f64) -> f64 {
    if !t.is_finite() || !(duration.is_finite() && duration > 0.0) {
        return 0.0;
    }
    let r = t.rem_euclid(duration);
    // rem_euclid rounds up to `duration` for tiny negative inputs
    if r >= duration {
        0.0
    } else {
        r
    }
}
