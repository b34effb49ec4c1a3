//! Build errors for the automaton builder.

use crate::core::{StateId, Symbol};
use thiserror::Error;

/// Errors that can occur when building an automaton.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum BuildError {
    #[error("an automaton needs at least one state")]
    NoStates,

    #[error("state {state} is out of range for {state_count} states")]
    StateOutOfRange { state: StateId, state_count: usize },

    #[error("'{symbol}' is a checkpoint marker and cannot label a transition")]
    CheckpointTransition { symbol: Symbol },

    #[error("missing transition from state {state} on '{symbol}'")]
    MissingTransition { state: StateId, symbol: Symbol },
}
