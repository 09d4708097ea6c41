//! The drag-scrub controller, one instance per mounted viewer.
//!
//! Owns the integrator, the drag tracker, the playback coordinator and the
//! render loop handle, and talks to the host only through the injected
//! [`MediaTimeline`] and [`ContainerGeometry`]. Every entry point is a
//! silent no-op when the timeline is not ready; nothing here returns an
//! error to the host once construction succeeded.

use crate::config::{ConfigError, ControllerConfig};
use crate::constants::NORMAL_RATE;
use crate::drag::{DragSession, DragTracker};
use crate::flick::{detect_flick, Flick, SpinDirection};
use crate::input::{GestureEvent, InputUnifier, RawInput};
use crate::integrator::{Integrator, VirtualTime};
use crate::playback::{FlickSpin, PlaybackCoordinator, PlaybackState, SpinDrive};
use crate::render_loop::RenderLoopDriver;
use crate::timeline::{
    effective_duration, usable_duration, ContainerGeometry, MediaTimeline, Readiness,
};
use std::time::Duration;

#[inline]
fn millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

#[derive(Clone, Copy, Debug)]
struct Hint {
    visible: bool,
    deadline_ms: f64,
}

pub struct ScrubController<T, G> {
    config: ControllerConfig,
    timeline: T,
    geometry: G,
    readiness: Readiness,
    integrator: Integrator,
    drag: DragTracker,
    input: InputUnifier,
    playback: PlaybackCoordinator,
    render_loop: RenderLoopDriver,
    hint: Hint,
    next_resync_ms: f64,
}

impl<T: MediaTimeline, G: ContainerGeometry> ScrubController<T, G> {
    pub fn new(
        config: ControllerConfig,
        timeline: T,
        geometry: G,
        now_ms: f64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let integrator = Integrator::new(config.lerp_factor, config.epsilon, config.frame_step);
        let hint = Hint {
            visible: true,
            deadline_ms: now_ms + millis(config.hint_duration),
        };
        Ok(Self {
            config,
            timeline,
            geometry,
            readiness: Readiness::Loading,
            integrator,
            drag: DragTracker::default(),
            input: InputUnifier::default(),
            playback: PlaybackCoordinator::new(now_ms),
            render_loop: RenderLoopDriver::default(),
            hint,
            next_resync_ms: now_ms,
        })
    }

    // ---------------- Accessors ----------------

    #[inline]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    #[inline]
    pub fn timeline(&self) -> &T {
        &self.timeline
    }

    #[inline]
    pub fn timeline_mut(&mut self) -> &mut T {
        &mut self.timeline
    }

    #[inline]
    pub fn geometry_mut(&mut self) -> &mut G {
        &mut self.geometry
    }

    #[inline]
    pub fn state(&self) -> PlaybackState {
        self.playback.state()
    }

    #[inline]
    pub fn readiness(&self) -> Readiness {
        self.readiness
    }

    #[inline]
    pub fn virtual_time(&self) -> VirtualTime {
        self.integrator.time()
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    #[inline]
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.session()
    }

    /// How the running flick spin is driven, if one is running.
    #[inline]
    pub fn flick_drive(&self) -> Option<SpinDrive> {
        self.playback.flick().map(|s| s.drive)
    }

    #[inline]
    pub fn render_loop(&self) -> &RenderLoopDriver {
        &self.render_loop
    }

    #[inline]
    pub fn ambient_angle_deg(&self) -> f64 {
        self.playback.ambient_angle_deg()
    }

    pub fn is_ready(&self) -> bool {
        self.ready_duration().is_some()
    }

    /// "Drag to rotate" affordance: shown after mount until the first
    /// gesture or the hint timeout, never while loading or playing.
    pub fn hint_visible(&self) -> bool {
        self.hint.visible && self.is_ready() && self.state() != PlaybackState::ManualPlaying
    }

    fn ready_duration(&self) -> Option<f64> {
        if self.readiness != Readiness::Ready {
            return None;
        }
        usable_duration(self.timeline.duration())
    }

    // ---------------- Lifecycle ----------------

    pub fn start(&mut self) -> bool {
        self.render_loop.start()
    }

    /// One render-loop frame. Returns `false` once the loop is not running.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        match self.render_loop.step(now_ms) {
            Some(dt) => {
                self.tick(now_ms, dt);
                true
            }
            None => false,
        }
    }

    /// Tear down: drop any gesture and cancel the loop. Returns `true` only
    /// for the call that actually cancelled it.
    pub fn shutdown(&mut self) -> bool {
        self.drag.cancel();
        self.input.release();
        let first = self.render_loop.cancel();
        if first {
            log::info!("[viewer] render loop cancelled after {} frames", self.render_loop.frames());
        }
        first
    }

    // ---------------- Timeline signals ----------------

    pub fn on_metadata_ready(&mut self, now_ms: f64) {
        let Some(duration) = usable_duration(self.timeline.duration()) else {
            log::warn!("[timeline] metadata signalled without a usable duration");
            return;
        };
        self.readiness = Readiness::Ready;
        self.integrator.jump_to(self.timeline.position(), duration);
        if self.hint.visible {
            self.hint.deadline_ms = now_ms + millis(self.config.hint_duration);
        }
        log::info!("[timeline] ready, duration {:.2}s", duration);
    }

    pub fn on_load_error(&mut self, message: &str, now_ms: f64) {
        log::error!("[timeline] load failed: {}", message);
        self.readiness = Readiness::Failed;
        self.abandon_activity(now_ms);
    }

    /// The host is about to re-request the asset.
    pub fn on_reload_requested(&mut self, now_ms: f64) {
        log::info!("[timeline] reload requested");
        self.readiness = Readiness::Loading;
        self.abandon_activity(now_ms);
        self.integrator.jump_to(0.0, effective_duration(None));
    }

    fn abandon_activity(&mut self, now_ms: f64) {
        self.drag.cancel();
        self.input.release();
        if self.playback.native_owns_timeline() {
            self.stop_native();
        }
        self.playback.reset(now_ms);
    }

    // ---------------- Gestures ----------------

    /// Feed one raw device event through the input unifier.
    pub fn handle_input(&mut self, raw: RawInput) -> Option<GestureEvent> {
        let event = self.input.accept(raw)?;
        match event {
            GestureEvent::Begin(s) => {
                if !self.begin_drag(s.x, s.timestamp_ms) {
                    self.input.release();
                }
            }
            GestureEvent::Move(s) => {
                self.drag_to(s.x);
            }
            GestureEvent::End(s) => {
                self.drag_to(s.x);
                self.end_drag(s.timestamp_ms);
            }
            GestureEvent::Cancel => self.cancel_drag(raw.timestamp_ms),
        }
        Some(event)
    }

    pub fn begin_drag(&mut self, x: f64, now_ms: f64) -> bool {
        if self.drag.is_active() {
            return false;
        }
        let Some(duration) = self.ready_duration() else {
            log::debug!("[drag] ignored, timeline not ready");
            return false;
        };
        match self.state() {
            PlaybackState::ManualPlaying => {
                self.stop_native();
                self.resync(duration);
            }
            PlaybackState::FlickSpinning => self.interrupt_flick(duration),
            _ => {}
        }
        if !self.playback.enter(PlaybackState::Dragging, now_ms) {
            return false;
        }
        self.integrator.rebase_target();
        let start = self.integrator.time().target;
        self.drag.begin(x, start, now_ms);
        self.hint.visible = false;
        log::debug!("[drag] begin x={:.1} t0={:.3}", x, start);
        true
    }

    pub fn drag_to(&mut self, x: f64) -> bool {
        let Some(duration) = self.ready_duration() else {
            return false;
        };
        let width = self.geometry.width_px();
        match self
            .drag
            .target_for(x, width, duration, self.config.sensitivity)
        {
            Some(target) => {
                self.integrator.set_target(target, duration);
                true
            }
            None => false,
        }
    }

    /// Close the gesture; a fast release turns into a flick spin.
    pub fn end_drag(&mut self, now_ms: f64) -> Option<Flick> {
        let release = self.drag.end(now_ms)?;
        match detect_flick(&release, self.config.flick_threshold) {
            Some(flick) if self.start_flick(flick, now_ms) => {
                log::info!(
                    "[flick] {:?} at {:.2} px/ms",
                    flick.direction,
                    flick.velocity_px_per_ms
                );
                Some(flick)
            }
            _ => {
                self.playback.enter(PlaybackState::Idle, now_ms);
                None
            }
        }
    }

    pub fn cancel_drag(&mut self, now_ms: f64) {
        self.input.release();
        if self.drag.cancel() {
            log::debug!("[drag] cancelled");
            self.playback.enter(PlaybackState::Idle, now_ms);
        }
    }

    // ---------------- Flick ----------------

    fn start_flick(&mut self, flick: Flick, now_ms: f64) -> bool {
        if self.ready_duration().is_none() {
            return false;
        }
        let native = match flick.direction {
            SpinDirection::Forward => true,
            SpinDirection::Reverse => self.timeline.supports_reverse_playback(),
        };
        let mut drive = SpinDrive::Synthetic;
        if native {
            self.timeline
                .set_playback_rate(flick.direction.sign() * self.config.flick_rate);
            match self.timeline.play() {
                Ok(()) => drive = SpinDrive::Native,
                Err(e) => {
                    log::warn!("[flick] native spin unavailable, easing instead: {}", e);
                    self.timeline.set_playback_rate(NORMAL_RATE);
                }
            }
        }
        let spin = FlickSpin {
            direction: flick.direction,
            drive,
            deadline_ms: now_ms + millis(self.config.flick_duration),
        };
        if !self.playback.begin_flick(spin, now_ms) {
            if drive == SpinDrive::Native {
                self.stop_native();
            }
            return false;
        }
        self.next_resync_ms = now_ms + millis(self.config.resync_period);
        true
    }

    fn finish_flick(&mut self, now_ms: f64) {
        if let Some(spin) = self.playback.flick().copied() {
            if spin.drive == SpinDrive::Native {
                self.stop_native();
                if let Some(duration) = self.ready_duration() {
                    self.resync(duration);
                }
            }
        }
        self.playback.enter(PlaybackState::Idle, now_ms);
    }

    /// Stop a spin in place so a new gesture starts from the visible frame.
    fn interrupt_flick(&mut self, duration: f64) {
        match self.playback.flick().map(|s| s.drive) {
            Some(SpinDrive::Native) => {
                self.stop_native();
                self.resync(duration);
            }
            Some(SpinDrive::Synthetic) => {
                let current = self.integrator.time().current;
                self.integrator.jump_to(current, duration);
            }
            None => {}
        }
    }

    // ---------------- Playback requests ----------------

    pub fn on_play_pause_requested(&mut self, now_ms: f64) {
        self.request_playback(NORMAL_RATE, true, now_ms);
    }

    /// The "360° preview" button: native playback at the preview rate.
    pub fn on_spin_preview_requested(&mut self, now_ms: f64) {
        self.request_playback(self.config.preview_rate, false, now_ms);
    }

    fn request_playback(&mut self, rate: f64, toggles: bool, now_ms: f64) {
        let Some(duration) = self.ready_duration() else {
            return;
        };
        match self.state() {
            PlaybackState::ManualPlaying if toggles => {
                self.stop_native();
                self.resync(duration);
                self.playback.enter(PlaybackState::Idle, now_ms);
            }
            PlaybackState::ManualPlaying => self.timeline.set_playback_rate(rate),
            PlaybackState::Dragging => log::debug!("[playback] ignored while dragging"),
            PlaybackState::FlickSpinning => {
                self.finish_flick(now_ms);
                self.start_manual(rate, now_ms);
            }
            PlaybackState::Idle | PlaybackState::AutoRotating => {
                self.start_manual(rate, now_ms);
            }
        }
    }

    fn start_manual(&mut self, rate: f64, now_ms: f64) -> bool {
        self.timeline.set_playback_rate(rate);
        if let Err(e) = self.timeline.play() {
            log::warn!("[playback] play rejected: {}", e);
            self.timeline.set_playback_rate(NORMAL_RATE);
            return false;
        }
        if !self.playback.enter(PlaybackState::ManualPlaying, now_ms) {
            self.stop_native();
            return false;
        }
        self.next_resync_ms = now_ms + millis(self.config.resync_period);
        true
    }

    /// Stop everything and return to frame zero. Safe to call repeatedly.
    pub fn on_reset_requested(&mut self, now_ms: f64) {
        self.drag.cancel();
        self.input.release();
        self.stop_native();
        self.playback.reset(now_ms);
        let duration = effective_duration(self.timeline.duration());
        self.integrator.jump_to(0.0, duration);
        if self.is_ready() {
            self.timeline.seek(0.0);
        }
    }

    fn stop_native(&mut self) {
        self.timeline.pause();
        self.timeline.set_playback_rate(NORMAL_RATE);
    }

    fn resync(&mut self, duration: f64) {
        self.integrator.jump_to(self.timeline.position(), duration);
    }

    /// Copy the native position into virtual time while native playback
    /// owns the timeline. Returns whether anything was copied.
    pub fn resync_from_timeline(&mut self) -> bool {
        if !self.playback.native_owns_timeline() {
            return false;
        }
        match self.ready_duration() {
            Some(duration) => {
                self.resync(duration);
                true
            }
            None => false,
        }
    }

    // ---------------- Per-frame work ----------------

    /// Advance timers, the integrator and ambient rotation by one frame.
    pub fn tick(&mut self, now_ms: f64, dt: Duration) {
        if let Some(spin) = self.playback.flick().copied() {
            if now_ms >= spin.deadline_ms {
                self.finish_flick(now_ms);
            } else if spin.drive == SpinDrive::Synthetic {
                if let Some(duration) = self.ready_duration() {
                    let delta = spin.direction.sign() * self.config.flick_rate * dt.as_secs_f64();
                    self.integrator.nudge_target(delta, duration);
                }
            }
        }

        if self.playback.native_owns_timeline() {
            if now_ms >= self.next_resync_ms {
                self.resync_from_timeline();
                self.next_resync_ms = now_ms + millis(self.config.resync_period);
            }
        } else if let Some(duration) = self.ready_duration() {
            if let Some(frame) = self.integrator.step(dt, duration) {
                self.timeline.seek(frame);
            }
        }

        if self.hint.visible && now_ms >= self.hint.deadline_ms {
            self.hint.visible = false;
        }

        if let Some(delay) = self.config.auto_rotate_delay {
            let idle_long_enough = self.playback.idle_for(now_ms).is_some_and(|t| t >= delay);
            if idle_long_enough && self.is_ready() {
                self.playback.enter(PlaybackState::AutoRotating, now_ms);
            }
        }
        self.playback
            .advance_ambient(dt, self.config.auto_rotate_speed_deg);
    }
}
