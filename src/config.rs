//! Per-viewer overrides read from `data-*` attributes on the container.
//!
//! ```html
//! <div id="viewer" data-sensitivity="1.5" data-frame-step="0.04"
//!      data-auto-rotate-delay-ms="off" data-reverse-playback="true">
//! ```

use crate::dom;
use std::time::Duration;
use turntable_core::ControllerConfig;
use web_sys as web;

fn parse_f64(el: &web::Element, name: &str) -> Option<f64> {
    let raw = dom::data_attr(el, name)?;
    match raw.trim().parse::<f64>() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("[config] ignoring data-{}={:?}", name, raw);
            None
        }
    }
}

fn parse_millis(el: &web::Element, name: &str) -> Option<Duration> {
    parse_f64(el, name)
        .filter(|ms| *ms >= 0.0)
        .and_then(|ms| Duration::try_from_secs_f64(ms / 1000.0).ok())
}

pub fn from_data_attributes(el: &web::Element) -> ControllerConfig {
    let mut cfg = ControllerConfig::default();
    if let Some(v) = parse_f64(el, "sensitivity") {
        cfg.sensitivity = v;
    }
    if let Some(v) = parse_f64(el, "lerp-factor") {
        cfg.lerp_factor = v;
    }
    if let Some(v) = parse_f64(el, "frame-step") {
        cfg.frame_step = v;
    }
    if let Some(v) = parse_f64(el, "flick-threshold") {
        cfg.flick_threshold = v;
    }
    if let Some(v) = parse_f64(el, "flick-rate") {
        cfg.flick_rate = v;
    }
    if let Some(d) = parse_millis(el, "flick-duration-ms") {
        cfg.flick_duration = d;
    }
    if let Some(v) = parse_f64(el, "preview-rate") {
        cfg.preview_rate = v;
    }
    if let Some(d) = parse_millis(el, "hint-duration-ms") {
        cfg.hint_duration = d;
    }
    match dom::data_attr(el, "auto-rotate-delay-ms").as_deref() {
        Some("off") => cfg.auto_rotate_delay = None,
        Some(_) => {
            if let Some(d) = parse_millis(el, "auto-rotate-delay-ms") {
                cfg.auto_rotate_delay = Some(d);
            }
        }
        None => {}
    }
    cfg
}

pub fn reverse_playback(el: &web::Element) -> bool {
    matches!(dom::data_attr(el, "reverse-playback").as_deref(), Some("true" | "1"))
}
