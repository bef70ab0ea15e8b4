//! Keyboard event normalization for the focus trap.

use ui_focus::KeyInput;

/// Normalizes a DOM keyboard event for the focus trap.
pub fn key_input(ev: &web_sys::KeyboardEvent) -> KeyInput {
    KeyInput::from_key_name(&ev.key(), ev.shift_key())
}
