use crate::config;
use crate::constants::{HAVE_METADATA, ZOOMED_CLASS};
use crate::dom;
use crate::events::{self, DragListeners, Registration, SharedDragListeners};
use crate::frame::FrameLoop;
use crate::overlay::{self, Snapshot};
use crate::video::{ContainerBox, VideoTimeline};
use anyhow::Context;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use turntable_core::ScrubController;
use web_sys as web;

pub type Controller = ScrubController<VideoTimeline, ContainerBox>;

/// State shared by every callback of one viewer.
#[derive(Clone)]
pub struct ViewerContext {
    pub controller: Rc<RefCell<Controller>>,
    pub container: web::HtmlElement,
    pub video: web::HtmlVideoElement,
    pub drag_listeners: SharedDragListeners,
    zoomed: Rc<Cell<bool>>,
    rendered: Rc<Cell<Option<Snapshot>>>,
}

impl ViewerContext {
    /// Bring listeners and DOM in line with the controller after any change.
    pub fn sync(&self) {
        let snapshot = {
            let c = self.controller.borrow();
            Snapshot {
                state: c.state(),
                readiness: c.readiness(),
                hint: c.hint_visible(),
                ambient_deg: c.ambient_angle_deg(),
                dragging: c.is_dragging(),
            }
        };

        let released = {
            let mut listeners = self.drag_listeners.borrow_mut();
            if snapshot.dragging {
                listeners.acquire();
                None
            } else {
                listeners.release()
            }
        };
        drop(released);

        let prev = self.rendered.replace(Some(snapshot));
        if prev != Some(snapshot) {
            overlay::render(&self.container, prev, snapshot);
        }
    }

    pub fn toggle_zoom(&self) {
        let zoomed = !self.zoomed.get();
        self.zoomed.set(zoomed);
        let _ = self
            .container
            .class_list()
            .toggle_with_force(ZOOMED_CLASS, zoomed);
    }

    #[inline]
    pub fn is_zoomed(&self) -> bool {
        self.zoomed.get()
    }

    pub fn reload(&self) {
        self.controller
            .borrow_mut()
            .on_reload_requested(dom::now_ms());
        self.video.load();
        self.sync();
    }

    /// Run `f` on the controller with the current time, then sync the DOM.
    pub fn with_controller(&self, f: impl FnOnce(&mut Controller, f64)) {
        f(&mut self.controller.borrow_mut(), dom::now_ms());
        self.sync();
    }
}

pub struct Viewer {
    ctx: ViewerContext,
    frame: FrameLoop,
    container_listeners: Option<Registration>,
    media_listeners: Option<Registration>,
}

impl Viewer {
    pub fn mount(container_id: &str, video_id: &str) -> anyhow::Result<Self> {
        let document = dom::window_document().context("no document")?;
        let container: web::HtmlElement = dom::element_by_id(&document, container_id)?;
        let video: web::HtmlVideoElement = dom::element_by_id(&document, video_id)?;

        let cfg = config::from_data_attributes(&container);
        let timeline = VideoTimeline::new(video.clone(), config::reverse_playback(&container));
        let geometry = ContainerBox::new(container.clone());
        let controller = ScrubController::new(cfg, timeline, geometry, dom::now_ms())
            .context("invalid viewer configuration")?;

        // Pointer moves must not turn into page scrolls while scrubbing
        let _ = container.style().set_property("touch-action", "none");

        let ctx = ViewerContext {
            controller: Rc::new(RefCell::new(controller)),
            container: container.clone(),
            video: video.clone(),
            drag_listeners: Rc::new(RefCell::new(DragListeners::default())),
            zoomed: Rc::new(Cell::new(false)),
            rendered: Rc::new(Cell::new(None)),
        };

        ctx.drag_listeners
            .borrow_mut()
            .install(events::drag_handlers(&ctx));
        let container_listeners = Registration::attach(
            container.clone().into(),
            Rc::new(events::container_handlers(&ctx)),
        );
        let media_listeners =
            Registration::attach(video.clone().into(), Rc::new(events::media_handlers(&ctx)));

        // Metadata may already be there when the element was cached
        if video.ready_state() >= HAVE_METADATA {
            ctx.controller
                .borrow_mut()
                .on_metadata_ready(dom::now_ms());
        }

        let frame = FrameLoop::start(ctx.clone());
        ctx.sync();
        log::info!("[viewer] mounted #{} with #{}", container_id, video_id);

        Ok(Self {
            ctx,
            frame,
            container_listeners: Some(container_listeners),
            media_listeners: Some(media_listeners),
        })
    }

    #[inline]
    pub fn context(&self) -> &ViewerContext {
        &self.ctx
    }

    /// Release every listener and the frame callback. Idempotent.
    pub fn destroy(&mut self) {
        if self.ctx.controller.borrow_mut().shutdown() {
            self.frame.cancel();
        }
        self.ctx.drag_listeners.borrow_mut().clear();
        self.container_listeners = None;
        self.media_listeners = None;
    }
}

impl Drop for Viewer {
    fn drop(&mut self) {
        self.destroy();
    }
}
