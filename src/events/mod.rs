pub mod listeners;
pub mod media;
pub mod pointer;

pub use listeners::{DragListeners, Handler, HandlerSet, Registration, SharedDragListeners};
pub use media::media_handlers;
pub use pointer::{container_handlers, drag_handlers};
