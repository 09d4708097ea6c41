// Shared fakes for the host-side controller tests.
// The web front-end is wasm-only; these stand in for the video element and
// the container box.

#![allow(dead_code)]

use std::time::Duration;
use turntable_core::*;

pub const FRAME_MS: f64 = 1000.0 / 60.0;
pub const WIDTH_PX: f64 = 500.0;

#[derive(Debug)]
pub struct FakeTimeline {
    pub duration: Option<f64>,
    pub position: f64,
    pub rate: f64,
    pub playing: bool,
    pub reverse: bool,
    pub reject_play: bool,
    pub seeks: Vec<f64>,
}

impl FakeTimeline {
    pub fn with_duration(duration: f64) -> Self {
        Self {
            duration: Some(duration),
            position: 0.0,
            rate: 1.0,
            playing: false,
            reverse: false,
            reject_play: false,
            seeks: Vec::new(),
        }
    }

    pub fn loading() -> Self {
        Self {
            duration: None,
            ..Self::with_duration(0.0)
        }
    }
}

impl MediaTimeline for FakeTimeline {
    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn position(&self) -> f64 {
        self.position
    }

    fn seek(&mut self, t: f64) {
        self.position = t;
        self.seeks.push(t);
    }

    fn playback_rate(&self) -> f64 {
        self.rate
    }

    fn set_playback_rate(&mut self, rate: f64) {
        self.rate = rate;
    }

    fn play(&mut self) -> Result<(), TimelineError> {
        if self.reject_play {
            return Err(TimelineError::PlayRejected("NotAllowedError".into()));
        }
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn supports_reverse_playback(&self) -> bool {
        self.reverse
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedWidth(pub Option<f64>);

impl ContainerGeometry for FixedWidth {
    fn width_px(&self) -> Option<f64> {
        self.0
    }
}

pub type TestController = ScrubController<FakeTimeline, FixedWidth>;

pub fn quiet_config() -> ControllerConfig {
    ControllerConfig::default().with_auto_rotate_delay(None)
}

/// A started controller whose timeline already reported its metadata.
pub fn ready_with(config: ControllerConfig, timeline: FakeTimeline) -> TestController {
    let mut c = ScrubController::new(config, timeline, FixedWidth(Some(WIDTH_PX)), 0.0)
        .expect("valid config");
    c.on_metadata_ready(0.0);
    c.start();
    c
}

pub fn ready(duration: f64) -> TestController {
    ready_with(quiet_config(), FakeTimeline::with_duration(duration))
}

/// Drive frames at 60 Hz from `from_ms` up to and including `to_ms`.
/// Returns the timestamp of the last frame.
pub fn run_frames(c: &mut TestController, from_ms: f64, to_ms: f64) -> f64 {
    let mut now = from_ms;
    while now <= to_ms {
        c.frame(now);
        now += FRAME_MS;
    }
    now - FRAME_MS
}

pub fn in_range(t: f64, duration: f64) -> bool {
    (0.0..duration).contains(&t)
}

pub fn secs(s: f64) -> Duration {
    Duration::from_secs_f64(s)
}
