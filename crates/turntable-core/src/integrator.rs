//! Virtual timeline integrator.
//!
//! `current` and `target` are exposed wrapped into `[0, duration)`, but the
//! distance still to travel is kept signed and unwrapped: a drag worth more
//! than half a revolution eases the long way round, in the direction of the
//! drag, instead of taking the shorter path across the seam.

use crate::constants::REFERENCE_FPS;
use crate::quantize::frame_position;
use crate::timeline::wrap_time;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VirtualTime {
    pub current: f64,
    pub target: f64,
}

#[derive(Clone, Debug)]
pub struct Integrator {
    time: VirtualTime,
    // last target as handed in, before wrapping
    raw_target: f64,
    pending: f64,
    lerp_factor: f64,
    epsilon: f64,
    frame_step: f64,
    last_written: Option<f64>,
}

impl Integrator {
    pub fn new(lerp_factor: f64, epsilon: f64, frame_step: f64) -> Self {
        Self {
            time: VirtualTime::default(),
            raw_target: 0.0,
            pending: 0.0,
            lerp_factor,
            epsilon,
            frame_step,
            last_written: None,
        }
    }

    #[inline]
    pub fn time(&self) -> VirtualTime {
        self.time
    }

    /// Move the target to an unwrapped position measured in the same frame
    /// as the previous target (see [`Integrator::rebase_target`]).
    pub fn set_target(&mut self, target: f64, duration: f64) {
        if !target.is_finite() {
            return;
        }
        self.pending += target - self.raw_target;
        self.raw_target = target;
        self.time.target = wrap_time(target, duration);
    }

    pub fn nudge_target(&mut self, delta: f64, duration: f64) {
        self.set_target(self.raw_target + delta, duration);
    }

    /// Forget the unwrapped frame of the target, keeping the distance still
    /// to travel. Call before measuring new targets from `time().target`.
    pub fn rebase_target(&mut self) {
        self.raw_target = self.time.target;
    }

    /// Move both positions to `t` without easing, e.g. after native playback.
    pub fn jump_to(&mut self, t: f64, duration: f64) {
        let t = wrap_time(t, duration);
        self.time = VirtualTime {
            current: t,
            target: t,
        };
        self.raw_target = t;
        self.pending = 0.0;
        self.last_written = None;
    }

    /// Fraction of the remaining distance covered during `dt`.
    ///
    /// Frame-rate independent form of the per-tick ease: at the reference
    /// cadence it equals `lerp_factor`, and two half-length ticks cover the
    /// same distance as one full tick.
    pub fn alpha(&self, dt: Duration) -> f64 {
        let ticks = dt.as_secs_f64() * REFERENCE_FPS;
        1.0 - (1.0 - self.lerp_factor).powf(ticks)
    }

    /// Signed distance left to travel, not reduced around the loop.
    #[inline]
    pub fn remaining(&self) -> f64 {
        self.pending
    }

    pub fn is_settled(&self) -> bool {
        self.pending.abs() <= self.epsilon
    }

    /// Advance one tick. Returns the frame position to seek to, or `None`
    /// when settled or when the frame did not change since the last write.
    pub fn step(&mut self, dt: Duration, duration: f64) -> Option<f64> {
        if self.is_settled() {
            return None;
        }
        let moved = self.pending * self.alpha(dt);
        self.pending -= moved;
        self.time.current = wrap_time(self.time.current + moved, duration);
        let frame = frame_position(self.time.current, self.frame_step, duration);
        if self.last_written == Some(frame) {
            return None;
        }
        self.last_written = Some(frame);
        Some(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_nanos(16_666_667);

    #[test]
    fn alpha_matches_lerp_at_reference_rate() {
        let integ = Integrator::new(0.18, 0.001, 0.1);
        let a = integ.alpha(Duration::from_secs_f64(1.0 / REFERENCE_FPS));
        assert!((a - 0.18).abs() < 1e-9);
        assert_eq!(integ.alpha(Duration::ZERO), 0.0);
    }

    #[test]
    fn two_half_ticks_equal_one_tick() {
        let integ = Integrator::new(0.18, 0.001, 0.1);
        let full = integ.alpha(TICK);
        let half = integ.alpha(TICK / 2);
        let combined = 1.0 - (1.0 - half) * (1.0 - half);
        assert!((full - combined).abs() < 1e-9);
    }

    #[test]
    fn eases_across_the_loop_seam() {
        let mut integ = Integrator::new(0.5, 0.001, 0.1);
        integ.jump_to(9.8, 10.0);
        integ.set_target(10.2, 10.0);
        assert!((integ.time().target - 0.2).abs() < 1e-9);
        integ.step(TICK, 10.0);
        let c = integ.time().current;
        assert!(c > 9.8 || c < 0.3, "current {c}");
    }

    #[test]
    fn long_targets_keep_their_direction() {
        let mut integ = Integrator::new(0.18, 0.001, 0.1);
        integ.jump_to(0.0, 10.0);
        integ.set_target(8.0, 10.0);
        assert!((integ.remaining() - 8.0).abs() < 1e-9);
        integ.step(TICK, 10.0);
        assert!((integ.time().current - 1.44).abs() < 1e-6);

        integ.jump_to(0.0, 10.0);
        integ.set_target(-8.0, 10.0);
        integ.step(TICK, 10.0);
        assert!((integ.time().current - 8.56).abs() < 1e-6);
    }

    #[test]
    fn rebase_keeps_pending_distance() {
        let mut integ = Integrator::new(0.18, 0.001, 0.1);
        integ.jump_to(1.0, 10.0);
        integ.set_target(13.0, 10.0);
        integ.rebase_target();
        assert_eq!(integ.time().target, 3.0);
        assert!((integ.remaining() - 12.0).abs() < 1e-9);
        integ.set_target(4.0, 10.0);
        assert!((integ.remaining() - 13.0).abs() < 1e-9);
    }

    #[test]
    fn skips_repeated_frame_writes() {
        let mut integ = Integrator::new(0.18, 0.001, 1.0);
        integ.set_target(0.3, 10.0);
        let mut writes = 0;
        for _ in 0..100 {
            if integ.step(TICK, 10.0).is_some() {
                writes += 1;
            }
        }
        assert_eq!(writes, 1);
    }
}
