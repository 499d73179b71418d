//! Match state machine
//!
//! A match is either being played or finished. Restarting is the only way
//! out of a finished match.

/// Match phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsmState {
    Playing,
    GameOver,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    GameOver,
    Restart,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: FsmState,
    pub to_state: FsmState,
    pub action: GameAction,
}

/// Match finite state machine
#[derive(Debug, Clone)]
pub struct GameFsm {
    state: FsmState,
}

impl GameFsm {
    pub fn new() -> Self {
        Self {
            state: FsmState::Playing,
        }
    }

    pub fn state(&self) -> FsmState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: GameAction) -> bool {
        self.next_state(action).is_some()
    }

    /// Attempt a transition; invalid ones leave the state untouched
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from_state = self.state;
        let to_state = self.next_state(action).unwrap_or(from_state);
        let success = self.next_state(action).is_some();
        self.state = to_state;

        TransitionResult {
            success,
            from_state,
            to_state,
            action,
        }
    }

    fn next_state(&self, action: GameAction) -> Option<FsmState> {
        match (self.state, action) {
            (FsmState::Playing, GameAction::GameOver) => Some(FsmState::GameOver),
            (FsmState::GameOver, GameAction::Restart) => Some(FsmState::Playing),
            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state == FsmState::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.state == FsmState::GameOver
    }
}

impl Default for GameFsm {
    fn default() -> Self {
        Self::new()
    }
}
