//! Reducer trait for MVI architecture.

use super::effect::Effects;
use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> (State, Effects).
/// Side effects are returned as data and executed by the store.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Description of the work this reducer can request.
    type Effect: std::fmt::Debug + Send + 'static;

    /// Process an intent and return the new state plus effects to run.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Effects<Self::Effect>);
}
