use super::{Handler, HandlerSet};
use crate::viewer::ViewerContext;
use smallvec::smallvec;

pub fn media_handlers(ctx: &ViewerContext) -> HandlerSet {
    let ready = ctx.clone();
    let failed = ctx.clone();
    smallvec![
        Handler::new("loadedmetadata", move |_ev| {
            ready.with_controller(|c, now| c.on_metadata_ready(now));
        }),
        Handler::new("error", move |_ev| {
            let message = failed
                .video
                .error()
                .map(|e| format!("media error code {}", e.code()))
                .unwrap_or_else(|| "unknown media error".to_string());
            failed.with_controller(|c, now| c.on_load_error(&message, now));
        }),
    ]
}
