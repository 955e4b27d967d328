/// Host-side drawing and gesture tuning constants.
///
/// Lengths are CSS pixels unless noted; the frontend multiplies by
/// `devicePixelRatio` before comparing against canvas backing-store pixels.
// Element ids
pub const CANVAS_ID: &str = "sphere-canvas";
pub const TOAST_ID: &str = "select-toast";

// Gesture classification
pub const TAP_SLOP_PX: f64 = 8.0; // pointer travel below this is still a tap

// Label painting
pub const BASE_TEXT_SIZE_PX: f64 = 12.0;
pub const TEXT_COLOR: &str = "#000000";
pub const BACKGROUND_COLOR: &str = "#ffffff";
pub const FONT_FAMILY: &str = "system-ui, sans-serif";

// Sphere sizing when no data-radius is given: fraction of the shorter canvas side
pub const AUTO_RADIUS_FRACTION: f64 = 0.38;
pub const PERSPECTIVE_HEADROOM: f64 = 1.25; // perspective depth floor as a multiple of the radius

// Demo labels
pub const DEFAULT_NAME_SEED: u64 = 42;

// Selection toast
pub const TOAST_DURATION_MS: i32 = 2000;
