pub mod config;
pub mod constants;
pub mod controller;
pub mod drag;
pub mod flick;
pub mod input;
pub mod integrator;
pub mod playback;
pub mod quantize;
pub mod render_loop;
pub mod timeline;

pub use config::*;
pub use controller::ScrubController;
pub use drag::{scrub_time_delta, DragRelease, DragSession, DragTracker};
pub use flick::{detect_flick, release_velocity, Flick, SpinDirection};
pub use input::*;
pub use integrator::{Integrator, VirtualTime};
pub use playback::*;
pub use quantize::*;
pub use render_loop::*;
pub use timeline::*;
