use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Milliseconds on the same clock as event and frame timestamps.
#[inline]
pub fn now_ms() -> f64 {
    web::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))?;
    el.dyn_into::<T>()
        .map_err(|e| anyhow!("#{} has the wrong element type: {:?}", id, e))
}

#[inline]
pub fn set_shown(el: &web::Element, shown: bool) {
    let _ = if shown {
        el.remove_attribute("hidden")
    } else {
        el.set_attribute("hidden", "")
    };
}

/// Show or hide every descendant of `root` carrying `attr`.
pub fn set_shown_all(root: &web::Element, attr: &str, shown: bool) {
    if let Ok(list) = root.query_selector_all(&format!("[{}]", attr)) {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                set_shown(&el, shown);
            }
        }
    }
}

/// The closest ancestor of the event target (inclusive) carrying `attr`.
pub fn closest_with_attr(ev: &web::Event, attr: &str) -> Option<web::Element> {
    let target = ev.target()?.dyn_into::<web::Element>().ok()?;
    target.closest(&format!("[{}]", attr)).ok().flatten()
}

#[inline]
pub fn data_attr(el: &web::Element, name: &str) -> Option<String> {
    el.get_attribute(&format!("data-{}", name))
}
