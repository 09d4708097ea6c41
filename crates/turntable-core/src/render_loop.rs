use crate::constants::{MAX_FRAME_DT, REFERENCE_FPS};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopPhase {
    Stopped,
    Running,
    Cancelled,
}

#[derive(Clone, Debug)]
pub struct RenderLoopDriver {
    phase: LoopPhase,
    last_ms: Option<f64>,
    frames: u64,
    max_dt: Duration,
}

impl Default for RenderLoopDriver {
    fn default() -> Self {
        Self::new(MAX_FRAME_DT)
    }
}

impl RenderLoopDriver {
    pub fn new(max_dt: Duration) -> Self {
        Self {
            phase: LoopPhase::Stopped,
            last_ms: None,
            frames: 0,
            max_dt,
        }
    }

    #[inline]
    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == LoopPhase::Running
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Start ticking. A cancelled loop stays cancelled.
    pub fn start(&mut self) -> bool {
        if self.phase != LoopPhase::Stopped {
            return false;
        }
        self.phase = LoopPhase::Running;
        self.last_ms = None;
        true
    }

    /// Account for one frame at `now_ms` and return its clamped delta.
    ///
    /// The first frame assumes the reference cadence; a timestamp going
    /// backwards yields a zero delta.
    pub fn step(&mut self, now_ms: f64) -> Option<Duration> {
        if self.phase != LoopPhase::Running {
            return None;
        }
        let dt = match self.last_ms {
            None => Duration::from_secs_f64(1.0 / REFERENCE_FPS),
            Some(prev) if now_ms > prev => {
                Duration::try_from_secs_f64((now_ms - prev) / 1000.0).unwrap_or(self.max_dt)
            }
            Some(_) => Duration::ZERO,
        };
        self.last_ms = Some(now_ms);
        self.frames += 1;
        Some(dt.min(self.max_dt))
    }

    /// Stop for good. Returns `true` only for the call that cancelled.
    pub fn cancel(&mut self) -> bool {
        if self.phase == LoopPhase::Cancelled {
            return false;
        }
        self.phase = LoopPhase::Cancelled;
        true
    }
}
