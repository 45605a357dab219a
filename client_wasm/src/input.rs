//! Keyboard input handling

use game_core::KeyboardState;
use web_sys::KeyboardEvent;

/// Handle key down event, returns true if the key is bound
pub fn handle_key_down(key: &str, keys: &mut KeyboardState) -> bool {
    set_key(key, keys, true)
}

/// Handle key up event, returns true if the key is bound
pub fn handle_key_up(key: &str, keys: &mut KeyboardState) -> bool {
    set_key(key, keys, false)
}

fn set_key(key: &str, keys: &mut KeyboardState, held: bool) -> bool {
    let slot = match key {
        "w" | "W" => &mut keys.left_up,
        "s" | "S" => &mut keys.left_down,
        "ArrowUp" | "Up" => &mut keys.right_up,
        "ArrowDown" | "Down" => &mut keys.right_down,
        " " | "Spacebar" => &mut keys.rematch,
        _ => return false,
    };
    *slot = held;
    true
}

/// Debug overlay toggle key
pub fn is_debug_toggle(key: &str) -> bool {
    matches!(key, "d" | "D")
}

/// Extract key from keyboard event
pub fn get_key_from_event(event: &KeyboardEvent) -> String {
    event.key()
}
