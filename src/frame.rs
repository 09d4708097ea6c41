use crate::viewer::ViewerContext;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameCallback = Closure<dyn FnMut(f64)>;

fn request_frame(cb: &FrameCallback) -> Option<i32> {
    web::window()?
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .ok()
}

/// `requestAnimationFrame` handle driving the controller for the viewer's
/// whole mounted lifetime.
pub struct FrameLoop {
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<FrameCallback>>>,
}

impl FrameLoop {
    pub fn start(ctx: ViewerContext) -> Self {
        let tick: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick_clone = tick.clone();
        let raf_id_clone = raf_id.clone();
        let controller = ctx.controller.clone();

        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp_ms: f64| {
            raf_id_clone.set(None);
            let running = ctx.controller.borrow_mut().frame(timestamp_ms);
            ctx.sync();
            if running {
                if let Some(cb) = tick_clone.borrow().as_ref() {
                    raf_id_clone.set(request_frame(cb));
                }
            }
        }) as Box<dyn FnMut(f64)>));

        controller.borrow_mut().start();
        if let Some(cb) = tick.borrow().as_ref() {
            raf_id.set(request_frame(cb));
        }
        Self { raf_id, tick }
    }

    /// Cancel the pending frame and free the callback. Must not be called
    /// from inside the frame callback itself.
    pub fn cancel(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                let _ = w.cancel_animation_frame(id);
            }
        }
        self.tick.borrow_mut().take();
    }
}
