//! Game State Machine
//!
//! Shared by both games. Pong allows pausing; the platformer does not.

use serde::{Deserialize, Serialize};

/// Game phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Title screen with Start / Quit
    Menu,
    /// Active gameplay
    Playing,
    /// Gameplay frozen behind the pause overlay
    Paused,
    /// Run ended, showing the result with Restart / Quit
    GameOver,
    /// Quit requested; the frame loop exits
    Terminated,
}

/// Actions that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Start,
    TogglePause,
    /// Raised by the simulation when the run reaches its end condition
    Finish,
    Restart,
    Quit,
}

/// Result of a phase transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub success: bool,
    pub from: Phase,
    pub to: Phase,
    pub action: Action,
}

impl Transition {
    /// True when this transition begins a fresh run
    pub fn starts_run(&self) -> bool {
        self.success && matches!(self.action, Action::Start | Action::Restart)
    }
}

/// Game finite state machine
#[derive(Debug, Clone)]
pub struct Fsm {
    phase: Phase,
    pausable: bool,
}

impl Fsm {
    pub fn new(pausable: bool) -> Self {
        Self {
            phase: Phase::Menu,
            pausable,
        }
    }

    /// Get current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_pausable(&self) -> bool {
        self.pausable
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: Action) -> bool {
        self.next_phase(action).is_some()
    }

    /// Attempt a transition; invalid actions leave the phase unchanged
    pub fn transition(&mut self, action: Action) -> Transition {
        let from = self.phase;

        match self.next_phase(action) {
            Some(to) => {
                self.phase = to;
                Transition {
                    success: true,
                    from,
                    to,
                    action,
                }
            }
            None => {
                log::debug!("Ignoring {:?} in {:?}", action, from);
                Transition {
                    success: false,
                    from,
                    to: from,
                    action,
                }
            }
        }
    }

    fn next_phase(&self, action: Action) -> Option<Phase> {
        use Action::*;
        use Phase::*;

        match (self.phase, action) {
            (Terminated, _) => None,
            (_, Quit) => Some(Terminated),

            (Menu, Start) => Some(Playing),

            (Playing, TogglePause) if self.pausable => Some(Paused),
            (Paused, TogglePause) => Some(Playing),

            (Playing, Finish) => Some(GameOver),

            (GameOver, Restart) => Some(Playing),

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ACTIONS: [Action; 5] = [
        Action::Start,
        Action::TogglePause,
        Action::Finish,
        Action::Restart,
        Action::Quit,
    ];

    #[test]
    fn test_initial_state() {
        let fsm = Fsm::new(true);
        assert_eq!(fsm.phase(), Phase::Menu);
    }

    #[test]
    fn test_full_pong_flow() {
        let mut fsm = Fsm::new(true);

        assert!(fsm.transition(Action::Start).starts_run());
        assert_eq!(fsm.phase(), Phase::Playing);

        assert!(fsm.transition(Action::TogglePause).success);
        assert_eq!(fsm.phase(), Phase::Paused);

        assert!(fsm.transition(Action::TogglePause).success);
        assert_eq!(fsm.phase(), Phase::Playing);

        assert!(fsm.transition(Action::Finish).success);
        assert_eq!(fsm.phase(), Phase::GameOver);

        assert!(fsm.transition(Action::Restart).starts_run());
        assert_eq!(fsm.phase(), Phase::Playing);
    }

    #[test]
    fn test_pause_unavailable_when_not_pausable() {
        let mut fsm = Fsm::new(false);
        fsm.transition(Action::Start);
        let result = fsm.transition(Action::TogglePause);
        assert!(!result.success);
        assert_eq!(fsm.phase(), Phase::Playing);
    }

    #[test]
    fn test_quit_from_every_phase() {
        for setup in [
            vec![],
            vec![Action::Start],
            vec![Action::Start, Action::TogglePause],
            vec![Action::Start, Action::Finish],
        ] {
            let mut fsm = Fsm::new(true);
            for action in setup {
                assert!(fsm.transition(action).success);
            }
            assert!(fsm.transition(Action::Quit).success);
            assert_eq!(fsm.phase(), Phase::Terminated);
        }
    }

    #[test]
    fn test_invalid_actions_are_noops() {
        let mut fsm = Fsm::new(true);
        // Menu only accepts Start and Quit
        for action in [Action::TogglePause, Action::Finish, Action::Restart] {
            let result = fsm.transition(action);
            assert!(!result.success);
            assert_eq!(result.to, Phase::Menu);
        }

        fsm.transition(Action::Start);
        fsm.transition(Action::TogglePause);
        // Paused cannot finish or restart
        assert!(!fsm.transition(Action::Finish).success);
        assert!(!fsm.transition(Action::Restart).success);
        assert_eq!(fsm.phase(), Phase::Paused);
    }

    #[test]
    fn test_terminated_is_final() {
        let mut fsm = Fsm::new(true);
        fsm.transition(Action::Quit);
        for action in ALL_ACTIONS {
            assert!(!fsm.can_transition(action));
            assert!(!fsm.transition(action).success);
        }
        assert_eq!(fsm.phase(), Phase::Terminated);
    }
}
