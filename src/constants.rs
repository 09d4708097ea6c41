// DOM hooks shared by the viewer modules.

// Attributes written on the container for styling
pub const ATTR_STATE: &str = "data-turntable-state";
pub const ATTR_READINESS: &str = "data-turntable-readiness";
pub const AMBIENT_ANGLE_VAR: &str = "--turntable-ambient-angle";
pub const ZOOMED_CLASS: &str = "is-zoomed";

// Descendants toggled by the viewer
pub const ATTR_HINT: &str = "data-turntable-hint";
pub const ATTR_LOADING: &str = "data-turntable-loading";
pub const ATTR_ERROR: &str = "data-turntable-error";

// Host buttons: <button data-turntable-action="play-pause">
pub const ATTR_ACTION: &str = "data-turntable-action";
pub const ACTION_PLAY_PAUSE: &str = "play-pause";
pub const ACTION_RESET: &str = "reset";
pub const ACTION_PREVIEW: &str = "preview";
pub const ACTION_ZOOM: &str = "zoom";
pub const ACTION_RELOAD: &str = "reload";

// HTMLMediaElement.HAVE_METADATA
pub const HAVE_METADATA: u16 = 1;
