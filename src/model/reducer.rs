//! Reducer trait: the only place where state transitions happen.

use std::error::Error;

use super::action::Action;
use super::state::State;

/// Computes the next state from the current state and an action.
///
/// `reduce` must be a pure function: no side effects, no blocking I/O.
/// Long-running work belongs outside the reducer and is communicated back
/// in as a later action. On rejection the store keeps the prior state, so
/// a failed dispatch is safely retryable.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: State;

    /// The action type this reducer handles.
    type Action: Action;

    /// Domain error returned when an action is rejected.
    ///
    /// Reducers that cannot fail use [`std::convert::Infallible`].
    type Error: Error + Send + Sync + 'static;

    /// Process an action and return the new state, or reject the action.
    ///
    /// Takes the current state by value; the action is borrowed because
    /// the store retains it for publication to observers.
    fn reduce(state: Self::State, action: &Self::Action) -> Result<Self::State, Self::Error>;
}
