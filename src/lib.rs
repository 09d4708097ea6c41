#![cfg(target_arch = "wasm32")]

use wasm_bindgen::prelude::*;

mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod video;
mod viewer;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("turntable-web starting");
    Ok(())
}

/// Handle returned to the host page for one mounted viewer.
#[wasm_bindgen]
pub struct TurntableViewer {
    viewer: viewer::Viewer,
}

#[wasm_bindgen]
impl TurntableViewer {
    #[wasm_bindgen(constructor)]
    pub fn mount(container_id: &str, video_id: &str) -> Result<TurntableViewer, JsValue> {
        match viewer::Viewer::mount(container_id, video_id) {
            Ok(viewer) => Ok(Self { viewer }),
            Err(e) => {
                log::error!("[viewer] mount failed: {:?}", e);
                Err(JsValue::from_str(&format!("{:#}", e)))
            }
        }
    }

    #[wasm_bindgen(js_name = playPause)]
    pub fn play_pause(&self) {
        self.viewer
            .context()
            .with_controller(|c, now| c.on_play_pause_requested(now));
    }

    pub fn reset(&self) {
        self.viewer
            .context()
            .with_controller(|c, now| c.on_reset_requested(now));
    }

    #[wasm_bindgen(js_name = spinPreview)]
    pub fn spin_preview(&self) {
        self.viewer
            .context()
            .with_controller(|c, now| c.on_spin_preview_requested(now));
    }

    #[wasm_bindgen(js_name = toggleZoom)]
    pub fn toggle_zoom(&self) -> bool {
        let ctx = self.viewer.context();
        ctx.toggle_zoom();
        ctx.is_zoomed()
    }

    pub fn reload(&self) {
        self.viewer.context().reload();
    }

    pub fn state(&self) -> String {
        self.viewer
            .context()
            .controller
            .borrow()
            .state()
            .as_str()
            .to_string()
    }

    #[wasm_bindgen(js_name = hintVisible)]
    pub fn hint_visible(&self) -> bool {
        self.viewer.context().controller.borrow().hint_visible()
    }

    /// Release listeners and the frame loop; the handle stays inert after.
    pub fn destroy(&mut self) {
        self.viewer.destroy();
    }
}
