// Keyboard shortcuts. Kept free of web types so it can be tested on the host.

use handfx_core::Mode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    SelectMode(Mode),
    ToggleMute,
    ToggleFullscreen,
    ExitFullscreen,
}

#[inline]
pub fn mode_for_digit(key: &str) -> Option<Mode> {
    match key {
        "1" => Some(Mode::Particles),
        "2" => Some(Mode::Neural),
        "3" => Some(Mode::Hologram),
        "4" => Some(Mode::Matrix),
        _ => None,
    }
}

pub fn action_for_key(key: &str) -> Option<KeyAction> {
    if let Some(mode) = mode_for_digit(key) {
        return Some(KeyAction::SelectMode(mode));
    }
    match key {
        "m" | "M" => Some(KeyAction::ToggleMute),
        "f" | "F" => Some(KeyAction::ToggleFullscreen),
        "Escape" => Some(KeyAction::ExitFullscreen),
        _ => None,
    }
}
