use turntable_core::{ContainerGeometry, MediaTimeline, TimelineError};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub struct VideoTimeline {
    video: web::HtmlVideoElement,
    reverse_playback: bool,
}

impl VideoTimeline {
    pub fn new(video: web::HtmlVideoElement, reverse_playback: bool) -> Self {
        video.set_loop(true);
        video.set_muted(true);
        Self {
            video,
            reverse_playback,
        }
    }
}

impl MediaTimeline for VideoTimeline {
    fn duration(&self) -> Option<f64> {
        let d = self.video.duration();
        (d.is_finite() && d > 0.0).then_some(d)
    }

    fn position(&self) -> f64 {
        self.video.current_time()
    }

    fn seek(&mut self, seconds: f64) {
        self.video.set_current_time(seconds);
    }

    fn playback_rate(&self) -> f64 {
        self.video.playback_rate()
    }

    fn set_playback_rate(&mut self, rate: f64) {
        self.video.set_playback_rate(rate);
    }

    fn play(&mut self) -> Result<(), TimelineError> {
        if !self.video.is_connected() {
            return Err(TimelineError::Detached);
        }
        let promise = self
            .video
            .play()
            .map_err(|e| TimelineError::PlayRejected(format!("{:?}", e)))?;
        // Autoplay policy rejections arrive asynchronously
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("[timeline] play() rejected: {:?}", e);
            }
        });
        Ok(())
    }

    fn pause(&mut self) {
        let _ = self.video.pause();
    }

    fn supports_reverse_playback(&self) -> bool {
        self.reverse_playback
    }
}

pub struct ContainerBox {
    el: web::HtmlElement,
}

impl ContainerBox {
    pub fn new(el: web::HtmlElement) -> Self {
        Self { el }
    }
}

impl ContainerGeometry for ContainerBox {
    fn width_px(&self) -> Option<f64> {
        if !self.el.is_connected() {
            return None;
        }
        let w = self.el.client_width();
        (w > 0).then_some(w as f64)
    }
}
