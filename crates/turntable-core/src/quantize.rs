use crate::timeline::wrap_time;

/// Snap `t` to the nearest multiple of `frame_step`.
///
/// The capture only holds a finite number of angular frames, so positions in
/// between would make the decoder repeat or jitter frames. A non-positive or
/// non-finite step leaves `t` untouched.
#[inline]
pub fn quantize(t: f64, frame_step: f64) -> f64 {
    if !t.is_finite() || !(frame_step.is_finite() && frame_step > 0.0) {
        return t;
    }
    (t / frame_step).round() * frame_step
}

/// The position actually written to the timeline for a virtual time.
#[inline]
pub fn frame_position(t: f64, frame_step: f64, duration: f64) -> f64 {
    wrap_time(quantize(t, frame_step), duration)
}
