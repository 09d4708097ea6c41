use crate::constants::*;
use crate::dom;
use turntable_core::{PlaybackState, Readiness};
use web_sys as web;

/// What the DOM currently shows; re-rendered only when it changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snapshot {
    pub state: PlaybackState,
    pub readiness: Readiness,
    pub hint: bool,
    pub ambient_deg: f64,
    pub dragging: bool,
}

#[inline]
fn readiness_str(r: Readiness) -> &'static str {
    match r {
        Readiness::Loading => "loading",
        Readiness::Ready => "ready",
        Readiness::Failed => "failed",
    }
}

pub fn render(container: &web::HtmlElement, prev: Option<Snapshot>, next: Snapshot) {
    if prev.map_or(true, |p| p.state != next.state) {
        let _ = container.set_attribute(ATTR_STATE, next.state.as_str());
        let cursor = if next.state == PlaybackState::Dragging {
            "grabbing"
        } else {
            "grab"
        };
        let _ = container.style().set_property("cursor", cursor);
    }
    if prev.map_or(true, |p| p.readiness != next.readiness) {
        let _ = container.set_attribute(ATTR_READINESS, readiness_str(next.readiness));
        dom::set_shown_all(container, ATTR_LOADING, next.readiness == Readiness::Loading);
        dom::set_shown_all(container, ATTR_ERROR, next.readiness == Readiness::Failed);
    }
    if prev.map_or(true, |p| p.hint != next.hint) {
        dom::set_shown_all(container, ATTR_HINT, next.hint);
    }
    if prev.map_or(true, |p| p.ambient_deg != next.ambient_deg) {
        let _ = container
            .style()
            .set_property(AMBIENT_ANGLE_VAR, &format!("{:.2}deg", next.ambient_deg));
    }
}
