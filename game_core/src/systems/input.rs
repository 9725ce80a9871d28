/// Discrete player inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Flap upward
    Jump,
    /// Start, pause, resume or restart depending on the round state
    Confirm,
}

impl Key {
    /// Map a `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            " " => Some(Key::Jump),
            "Enter" => Some(Key::Confirm),
            _ => None,
        }
    }
}

/// What the host should do after an input was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Jumped,
    Started,
    Paused,
    Resumed,
    /// The finished round was torn down and a fresh one is waiting to start
    Restarted,
    Ignored,
}
