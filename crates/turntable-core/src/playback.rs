use crate::flick::SpinDirection;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Idle,
    Dragging,
    FlickSpinning,
    ManualPlaying,
    AutoRotating,
}

impl PlaybackState {
    /// States driven by the user rather than by the idle fallback.
    #[inline]
    pub fn is_interactive(self) -> bool {
        matches!(
            self,
            PlaybackState::Dragging | PlaybackState::FlickSpinning | PlaybackState::ManualPlaying
        )
    }

    /// Stable name for styling hooks (`data-state` attributes and the like).
    pub fn as_str(self) -> &'static str {
        match self {
            PlaybackState::Idle => "idle",
            PlaybackState::Dragging => "dragging",
            PlaybackState::FlickSpinning => "flick",
            PlaybackState::ManualPlaying => "playing",
            PlaybackState::AutoRotating => "auto-rotate",
        }
    }
}

/// How a flick spin moves the timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpinDrive {
    /// Native playback at a (possibly negative) rate.
    Native,
    /// The integrator's target is advanced every tick.
    Synthetic,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlickSpin {
    pub direction: SpinDirection,
    pub drive: SpinDrive,
    pub deadline_ms: f64,
}

fn allowed(from: PlaybackState, to: PlaybackState) -> bool {
    use PlaybackState::*;
    matches!(
        (from, to),
        (Idle | AutoRotating | ManualPlaying | FlickSpinning, Dragging)
            | (Dragging, FlickSpinning | Idle)
            | (Idle | AutoRotating, ManualPlaying)
            | (ManualPlaying | FlickSpinning | AutoRotating, Idle)
            | (Idle, AutoRotating)
    )
}

#[derive(Clone, Debug, Default)]
pub struct PlaybackCoordinator {
    state: PlaybackState,
    flick: Option<FlickSpin>,
    idle_since_ms: f64,
    ambient_angle_deg: f64,
}

impl PlaybackCoordinator {
    pub fn new(now_ms: f64) -> Self {
        Self {
            idle_since_ms: now_ms,
            ..Self::default()
        }
    }

    #[inline]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    #[inline]
    pub fn flick(&self) -> Option<&FlickSpin> {
        self.flick.as_ref()
    }

    /// Request a transition. Disallowed transitions are refused and logged.
    pub fn enter(&mut self, next: PlaybackState, now_ms: f64) -> bool {
        if next == PlaybackState::FlickSpinning {
            log::warn!("[playback] flick spins start through begin_flick");
            return false;
        }
        self.apply(next, now_ms)
    }

    /// `Dragging -> FlickSpinning`, recording how the spin is driven.
    pub fn begin_flick(&mut self, spin: FlickSpin, now_ms: f64) -> bool {
        if !self.apply(PlaybackState::FlickSpinning, now_ms) {
            return false;
        }
        self.flick = Some(spin);
        true
    }

    fn apply(&mut self, next: PlaybackState, now_ms: f64) -> bool {
        let prev = self.state;
        if !allowed(prev, next) {
            log::warn!("[playback] refused {:?} -> {:?}", prev, next);
            return false;
        }
        log::debug!("[playback] {:?} -> {:?}", prev, next);
        if prev == PlaybackState::FlickSpinning {
            self.flick = None;
        }
        if next == PlaybackState::Idle {
            self.idle_since_ms = now_ms;
        }
        self.state = next;
        true
    }

    /// Back to `Idle` from anywhere.
    pub fn reset(&mut self, now_ms: f64) {
        if self.state != PlaybackState::Idle {
            log::debug!("[playback] {:?} -> Idle (reset)", self.state);
        }
        self.state = PlaybackState::Idle;
        self.flick = None;
        self.idle_since_ms = now_ms;
        self.ambient_angle_deg = 0.0;
    }

    /// Native playback owns the media position; integrator writes must wait.
    pub fn native_owns_timeline(&self) -> bool {
        match self.state {
            PlaybackState::ManualPlaying => true,
            PlaybackState::FlickSpinning => {
                matches!(self.flick, Some(FlickSpin { drive: SpinDrive::Native, .. }))
            }
            _ => false,
        }
    }

    /// How long the coordinator has been idle, if it is.
    pub fn idle_for(&self, now_ms: f64) -> Option<Duration> {
        if self.state != PlaybackState::Idle {
            return None;
        }
        let secs = ((now_ms - self.idle_since_ms) / 1000.0).max(0.0);
        Some(Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX))
    }

    #[inline]
    pub fn ambient_angle_deg(&self) -> f64 {
        self.ambient_angle_deg
    }

    pub fn advance_ambient(&mut self, dt: Duration, speed_deg_per_sec: f64) {
        if self.state == PlaybackState::AutoRotating {
            self.ambient_angle_deg =
                (self.ambient_angle_deg + speed_deg_per_sec * dt.as_secs_f64()).rem_euclid(360.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refuses_play_while_dragging() {
        let mut c = PlaybackCoordinator::new(0.0);
        assert!(c.enter(PlaybackState::Dragging, 0.0));
        assert!(!c.enter(PlaybackState::ManualPlaying, 1.0));
        assert_eq!(c.state(), PlaybackState::Dragging);
    }

    #[test]
    fn flick_cleared_on_leave() {
        let mut c = PlaybackCoordinator::new(0.0);
        c.enter(PlaybackState::Dragging, 0.0);
        let spin = FlickSpin {
            direction: SpinDirection::Forward,
            drive: SpinDrive::Native,
            deadline_ms: 800.0,
        };
        assert!(c.begin_flick(spin, 10.0));
        assert!(c.native_owns_timeline());
        assert!(c.enter(PlaybackState::Idle, 810.0));
        assert!(c.flick().is_none());
        assert!(!c.native_owns_timeline());
    }

    #[test]
    fn ambient_only_advances_while_auto_rotating() {
        let mut c = PlaybackCoordinator::new(0.0);
        c.advance_ambient(Duration::from_secs(1), 30.0);
        assert_eq!(c.ambient_angle_deg(), 0.0);
        c.enter(PlaybackState::AutoRotating, 0.0);
        c.advance_ambient(Duration::from_secs(13), 30.0);
        assert!((c.ambient_angle_deg() - 30.0).abs() < 1e-9);
    }
}
