// Shared geometry/interaction tuning constants used by the core and the web frontend.

// Rotation
pub const DRAG_SENSITIVITY: f64 = 0.005; // radians of rotation per screen unit of drag

// Depth cues
pub const PERSPECTIVE_DEPTH: f64 = 300.0; // z at which a label renders at twice its base size
pub const MIN_OPACITY: f64 = 0.4; // back-facing labels stay faintly visible
pub const MAX_OPACITY: f64 = 1.0;

// Interaction
pub const DEFAULT_TOUCH_RADIUS: f64 = 60.0; // screen units around a label that count as a hit

// Demo defaults
pub const DEFAULT_RADIUS: f64 = 400.0;
pub const DEFAULT_LABEL_COUNT: usize = 40;
pub const DEFAULT_LABEL_PREFIX: &str = "Tag";
