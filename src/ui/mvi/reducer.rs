use super::intent::Intent;
use super::state::UiState;

/// The only place a state transition happens.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Consume the current state and an intent, return the next state.
    ///
    /// Implementations must not touch timers, observers or I/O.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
