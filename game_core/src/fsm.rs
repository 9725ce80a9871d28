//! Round State Machine
//!
//! Ready → Running ⇄ Paused, Running → Over → Ready.

/// Round states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Ready,
    Running,
    Paused,
    Over,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundAction {
    Start,
    Pause,
    Resume,
    Crash,
    Restart,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: Phase,
    pub to_state: Phase,
    pub action: RoundAction,
}

/// Round Finite State Machine
#[derive(Debug, Clone, Default)]
pub struct GameFsm {
    state: Phase,
}

impl GameFsm {
    pub fn new() -> Self {
        Self {
            state: Phase::Ready,
        }
    }

    /// Get current state
    pub fn state(&self) -> Phase {
        self.state
    }

    /// Get current state as string (for JS interop)
    pub fn state_string(&self) -> String {
        format!("{:?}", self.state)
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: RoundAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: RoundAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: RoundAction) -> Option<Phase> {
        match (self.state, action) {
            (Phase::Ready, RoundAction::Start) => Some(Phase::Running),

            (Phase::Running, RoundAction::Pause) => Some(Phase::Paused),
            (Phase::Running, RoundAction::Crash) => Some(Phase::Over),

            (Phase::Paused, RoundAction::Resume) => Some(Phase::Running),

            (Phase::Over, RoundAction::Restart) => Some(Phase::Ready),

            _ => None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == Phase::Running
    }

    pub fn is_paused(&self) -> bool {
        self.state == Phase::Paused
    }

    pub fn is_over(&self) -> bool {
        self.state == Phase::Over
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let fsm = GameFsm::new();
        assert_eq!(fsm.state(), Phase::Ready);
    }

    #[test]
    fn test_valid_transition() {
        let mut fsm = GameFsm::new();
        let result = fsm.transition(RoundAction::Start);
        assert!(result.success);
        assert_eq!(result.from_state, Phase::Ready);
        assert_eq!(fsm.state(), Phase::Running);
    }

    #[test]
    fn test_invalid_transition() {
        let mut fsm = GameFsm::new();
        let result = fsm.transition(RoundAction::Crash);
        assert!(!result.success);
        assert_eq!(result.to_state, Phase::Ready);
        assert_eq!(fsm.state(), Phase::Ready);
    }

    #[test]
    fn test_pause_resume_flow() {
        let mut fsm = GameFsm::new();
        fsm.transition(RoundAction::Start);
        fsm.transition(RoundAction::Pause);
        assert!(fsm.is_paused());
        assert!(!fsm.can_transition(RoundAction::Crash), "no crash while paused");
        fsm.transition(RoundAction::Resume);
        assert!(fsm.is_running());
    }

    #[test]
    fn test_crash_and_restart_flow() {
        let mut fsm = GameFsm::new();
        fsm.transition(RoundAction::Start);
        fsm.transition(RoundAction::Crash);
        assert!(fsm.is_over());
        assert!(!fsm.can_transition(RoundAction::Resume));
        fsm.transition(RoundAction::Restart);
        assert_eq!(fsm.state_string(), "Ready");
    }
}
