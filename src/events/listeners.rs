//! Event listener registrations with scoped lifetimes.
//!
//! Callbacks live in a [`HandlerSet`] for the viewer's whole lifetime; a
//! [`Registration`] only attaches them to a target and detaches them again
//! when dropped. Dropping a registration from inside one of its own
//! callbacks is fine because no closure is freed by it.

use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Handler {
    name: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Handler {
    pub fn new(name: &'static str, f: impl FnMut(web::Event) + 'static) -> Self {
        Self {
            name,
            closure: Closure::wrap(Box::new(f) as Box<dyn FnMut(web::Event)>),
        }
    }

    #[inline]
    fn callback(&self) -> &js_sys::Function {
        self.closure.as_ref().unchecked_ref()
    }
}

pub type HandlerSet = SmallVec<[Handler; 6]>;

pub struct Registration {
    target: web::EventTarget,
    handlers: Rc<HandlerSet>,
}

impl Registration {
    pub fn attach(target: web::EventTarget, handlers: Rc<HandlerSet>) -> Self {
        for h in handlers.iter() {
            if let Err(e) = target.add_event_listener_with_callback(h.name, h.callback()) {
                log::warn!("[events] could not listen for {}: {:?}", h.name, e);
            }
        }
        Self { target, handlers }
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        for h in self.handlers.iter() {
            let _ = self
                .target
                .remove_event_listener_with_callback(h.name, h.callback());
        }
    }
}

/// Window-level move/up listeners, attached only while a drag is open.
#[derive(Default)]
pub struct DragListeners {
    handlers: Option<Rc<HandlerSet>>,
    active: Option<Registration>,
}

impl DragListeners {
    pub fn install(&mut self, handlers: HandlerSet) {
        self.handlers = Some(Rc::new(handlers));
    }

    pub fn acquire(&mut self) {
        if self.active.is_some() {
            return;
        }
        let (Some(handlers), Some(window)) = (self.handlers.clone(), web::window()) else {
            return;
        };
        self.active = Some(Registration::attach(window.into(), handlers));
        log::debug!("[events] drag listeners attached");
    }

    pub fn release(&mut self) -> Option<Registration> {
        let r = self.active.take();
        if r.is_some() {
            log::debug!("[events] drag listeners released");
        }
        r
    }

    /// Detach and free the callbacks. Must not run inside one of them.
    pub fn clear(&mut self) {
        self.active = None;
        self.handlers = None;
    }
}

pub type SharedDragListeners = Rc<RefCell<DragListeners>>;
