// Keyboard shortcuts, kept free of web types so host tests can include them.

pub const KEY_NUDGE_PX: f64 = 24.0; // drag distance simulated by one arrow key press

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyAction {
    /// Rotate as if dragged by `(dx, dy)` CSS pixels.
    Nudge { dx: f64, dy: f64 },
    ResetOrientation,
    ShuffleNames,
    NumberedTags,
    ToggleFullscreen,
    ExitFullscreen,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        "ArrowLeft" => Some(KeyAction::Nudge {
            dx: -KEY_NUDGE_PX,
            dy: 0.0,
        }),
        "ArrowRight" => Some(KeyAction::Nudge {
            dx: KEY_NUDGE_PX,
            dy: 0.0,
        }),
        "ArrowUp" => Some(KeyAction::Nudge {
            dx: 0.0,
            dy: -KEY_NUDGE_PX,
        }),
        "ArrowDown" => Some(KeyAction::Nudge {
            dx: 0.0,
            dy: KEY_NUDGE_PX,
        }),
        "0" | "r" | "R" => Some(KeyAction::ResetOrientation),
        "n" | "N" => Some(KeyAction::ShuffleNames),
        "t" | "T" => Some(KeyAction::NumberedTags),
        "Enter" => Some(KeyAction::ToggleFullscreen),
        "Escape" => Some(KeyAction::ExitFullscreen),
        _ => None,
    }
}
