use super::{Handler, HandlerSet};
use crate::constants::*;
use crate::dom;
use crate::input;
use crate::viewer::ViewerContext;
use smallvec::smallvec;
use turntable_core::{InputPhase, RawInput};
use wasm_bindgen::JsCast;
use web_sys as web;

fn feed(ctx: &ViewerContext, raws: impl IntoIterator<Item = RawInput>) {
    {
        let mut c = ctx.controller.borrow_mut();
        for raw in raws {
            c.handle_input(raw);
        }
    }
    ctx.sync();
}

fn pointer_handler(ctx: &ViewerContext, name: &'static str, phase: InputPhase) -> Handler {
    let ctx = ctx.clone();
    Handler::new(name, move |ev: web::Event| {
        if let Some(pe) = ev.dyn_ref::<web::PointerEvent>() {
            feed(&ctx, [input::pointer_raw(pe, phase)]);
        }
    })
}

fn touch_handler(ctx: &ViewerContext, name: &'static str, phase: InputPhase) -> Handler {
    let ctx = ctx.clone();
    Handler::new(name, move |ev: web::Event| {
        if let Some(te) = ev.dyn_ref::<web::TouchEvent>() {
            feed(&ctx, input::touch_changed_raws(te, phase));
        }
    })
}

/// Window listeners that follow a drag outside the container.
pub fn drag_handlers(ctx: &ViewerContext) -> HandlerSet {
    smallvec![
        pointer_handler(ctx, "pointermove", InputPhase::Move),
        pointer_handler(ctx, "pointerup", InputPhase::End),
        pointer_handler(ctx, "pointercancel", InputPhase::Cancel),
        touch_handler(ctx, "touchmove", InputPhase::Move),
        touch_handler(ctx, "touchend", InputPhase::End),
        touch_handler(ctx, "touchcancel", InputPhase::Cancel),
    ]
}

/// Gesture starts plus delegated clicks on host buttons.
pub fn container_handlers(ctx: &ViewerContext) -> HandlerSet {
    let down = ctx.clone();
    let touch = ctx.clone();
    let click = ctx.clone();
    smallvec![
        Handler::new("pointerdown", move |ev: web::Event| {
            if dom::closest_with_attr(&ev, ATTR_ACTION).is_some() {
                return;
            }
            let Some(pe) = ev.dyn_ref::<web::PointerEvent>() else {
                return;
            };
            if input::is_mouse(pe) {
                if pe.button() != 0 {
                    return;
                }
                ev.prevent_default();
            }
            feed(&down, [input::pointer_raw(pe, InputPhase::Start)]);
        }),
        Handler::new("touchstart", move |ev: web::Event| {
            if dom::closest_with_attr(&ev, ATTR_ACTION).is_some() {
                return;
            }
            if let Some(raw) = ev.dyn_ref::<web::TouchEvent>().and_then(input::touch_start_raw) {
                feed(&touch, [raw]);
            }
        }),
        Handler::new("click", move |ev: web::Event| {
            let Some(action) = dom::closest_with_attr(&ev, ATTR_ACTION)
                .and_then(|el| el.get_attribute(ATTR_ACTION))
            else {
                return;
            };
            ev.stop_propagation();
            dispatch_action(&click, &action);
        }),
    ]
}

pub fn dispatch_action(ctx: &ViewerContext, action: &str) {
    match action {
        ACTION_PLAY_PAUSE => ctx.with_controller(|c, now| c.on_play_pause_requested(now)),
        ACTION_RESET => ctx.with_controller(|c, now| c.on_reset_requested(now)),
        ACTION_PREVIEW => ctx.with_controller(|c, now| c.on_spin_preview_requested(now)),
        ACTION_ZOOM => ctx.toggle_zoom(),
        ACTION_RELOAD => ctx.reload(),
        other => log::warn!("[events] unknown action {:?}", other),
    }
}
