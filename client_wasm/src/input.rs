//! Keyboard input handling

use game_core::Key;
use web_sys::KeyboardEvent;

/// Map a key event to a game key.
///
/// Auto-repeat keeps flapping while space is held but never toggles pause.
pub fn key_from_event(event: &KeyboardEvent) -> Option<Key> {
    match Key::from_key(&event.key())? {
        Key::Confirm if event.repeat() => None,
        key => Some(key),
    }
}
