use std::time::Duration;

// Default tuning for the scrub controller. Every value can be overridden
// through `ControllerConfig`.

// Scrubbing
pub const SENSITIVITY: f64 = 2.0; // container-widths per revolution = 1 / SENSITIVITY
pub const FRAME_STEP_SEC: f64 = 0.1; // seconds per captured angular frame

// Smoothing
pub const LERP_FACTOR: f64 = 0.18; // per-tick ease at the reference cadence
pub const REFERENCE_FPS: f64 = 60.0;
pub const EPSILON_SEC: f64 = 0.001; // below this the integrator stops writing

// Flick
pub const FLICK_THRESHOLD_PX_PER_MS: f64 = 0.6;
pub const FLICK_RATE: f64 = 2.0;
pub const FLICK_DURATION: Duration = Duration::from_millis(800);

// Playback
pub const PREVIEW_RATE: f64 = 1.25; // "360° preview" button
pub const NORMAL_RATE: f64 = 1.0;
pub const RESYNC_PERIOD: Duration = Duration::from_millis(120);

// Affordances
pub const HINT_DURATION: Duration = Duration::from_millis(2500);
pub const AUTO_ROTATE_DELAY: Duration = Duration::from_secs(6);
pub const AUTO_ROTATE_SPEED_DEG_PER_SEC: f64 = 24.0;

// Render loop
pub const MAX_FRAME_DT: Duration = Duration::from_millis(100); // clamp after tab switches

// Used for arithmetic while the real duration is unknown
pub const FALLBACK_DURATION_SEC: f64 = 1.0;
