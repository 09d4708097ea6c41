use smallvec::SmallVec;
use turntable_core::{InputPhase, PointerSource, RawInput};
use web_sys as web;

pub type RawBatch = SmallVec<[RawInput; 2]>;

#[inline]
pub fn is_mouse(ev: &web::PointerEvent) -> bool {
    ev.pointer_type() == "mouse"
}

// ---------------- Pointer events ----------------
#[inline]
pub fn pointer_raw(ev: &web::PointerEvent, phase: InputPhase) -> RawInput {
    let source = if is_mouse(ev) {
        PointerSource::Mouse
    } else {
        PointerSource::Pointer(ev.pointer_id())
    };
    RawInput::new(source, phase, ev.client_x() as f64, ev.time_stamp())
}

// ---------------- Touch events ----------------
#[inline]
fn touch_raw(touch: &web::Touch, phase: InputPhase, timestamp_ms: f64) -> RawInput {
    RawInput::new(
        PointerSource::Touch(touch.identifier()),
        phase,
        touch.client_x() as f64,
        timestamp_ms,
    )
}

/// Only the first touch point can start a gesture.
pub fn touch_start_raw(ev: &web::TouchEvent) -> Option<RawInput> {
    ev.touches()
        .get(0)
        .map(|t| touch_raw(&t, InputPhase::Start, ev.time_stamp()))
}

/// Every changed touch; the unifier keeps the one owning the gesture.
pub fn touch_changed_raws(ev: &web::TouchEvent, phase: InputPhase) -> RawBatch {
    let list = ev.changed_touches();
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| touch_raw(&t, phase, ev.time_stamp()))
        .collect()
}
